//! detector-core — shared library for AI-generated image detection.
//!
//! Provides image normalization, ONNX inference, the threshold decision
//! procedure, and result reporting used by both the CLI and GUI frontends.

pub mod classify;
pub mod error;
pub mod inference;
pub mod preprocess;
pub mod report;
pub mod verdict;

pub use error::{Error, Result};
