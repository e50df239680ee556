#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;

pub use error::Error;
pub use scoring::{Resolution, ScoringError, resolve, resolve_detailed};
