//! Typed error kinds for the detection pipeline.
//!
//! Every failure path is one of three kinds: the model artifact cannot be
//! loaded, the uploaded bytes cannot be turned into an input tensor, or the
//! forward pass itself fails. Frontends decide how to surface each kind;
//! nothing here prints or panics.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The ONNX model artifact could not be loaded.
    #[error("failed to load model from {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: ort::Error,
    },

    /// The image file could not be opened or decoded.
    #[error("failed to open image {path}: {source}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Uploaded bytes could not be decoded as JPEG/PNG.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The forward pass failed.
    #[error("inference failed: {0}")]
    Inference(#[from] ort::Error),

    /// The model ran but produced no output values.
    #[error("model returned an empty output tensor")]
    EmptyOutput,

    /// A previous caller panicked while holding the session.
    #[error("classifier session is poisoned")]
    SessionPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
