//! ONNX model loading and inference via the `ort` crate.

use std::path::Path;
use std::sync::Mutex;

use ndarray::Array4;
use ort::session::Session;
use ort::value::TensorRef;

use crate::error::{Error, Result};

/// Immutable handle to a loaded classifier.
///
/// Loaded once and shared by reference (or `Arc`) for the process lifetime.
/// The inner `Mutex` exists because `Session::run` takes `&mut self`, not
/// because callers run concurrently.
pub struct Detector {
    session: Mutex<Session>,
}

impl Detector {
    /// Load an ONNX model from the given path.
    pub fn load(model_path: &Path) -> Result<Self> {
        let session = Session::builder()
            .and_then(|b| b.with_intra_threads(4))
            .and_then(|b| b.commit_from_file(model_path))
            .map_err(|source| Error::ModelLoad {
                path: model_path.to_path_buf(),
                source,
            })?;

        log::debug!("loaded model from {}", model_path.display());

        Ok(Self {
            session: Mutex::new(session),
        })
    }

    /// Run inference on a normalized image tensor of shape (1, 224, 224, 3).
    ///
    /// Returns P(AI-generated) in [0.0, 1.0]. The first value of the first
    /// output is taken, which covers models emitting `scalar` as well as
    /// `[[scalar]]`.
    pub fn predict(&self, input: &Array4<f32>) -> Result<f32> {
        let input_tensor = TensorRef::from_array_view(input)?;

        let mut session = self.session.lock().map_err(|_| Error::SessionPoisoned)?;
        let input_name = session.inputs[0].name.clone();
        let outputs = session.run(ort::inputs![input_name => input_tensor])?;

        let output_array = outputs[0].try_extract_array::<f32>()?;
        let probability = output_array
            .iter()
            .next()
            .copied()
            .ok_or(Error::EmptyOutput)?;

        log::debug!("raw model output: {probability}");

        Ok(probability.clamp(0.0, 1.0))
    }
}
