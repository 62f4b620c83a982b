//! Core types shared by the NextStat probability crates.
//!
//! - [`Error`] / [`Result`]: the single error taxonomy every fallible call returns
//! - [`SamplerConfig`]: serializable settings for a sampling engine

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{DEFAULT_MAX_REJECTIONS, SamplerConfig};
