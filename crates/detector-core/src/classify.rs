//! Per-request orchestration: image in, result out.
//!
//! Every error kind is caught here and folded into the result. A failed
//! request reports probability 0.0 and carries the error message; nothing
//! propagates as a fault into the frontends.

use std::path::Path;

use image::DynamicImage;

use crate::inference::Detector;
use crate::preprocess::{decode_image, load_image, to_input_tensor};
use crate::report::ClassifyResult;
use crate::verdict::decide;

/// Classify an already-decoded image.
pub fn classify_image(detector: &Detector, image: &DynamicImage, threshold: f32) -> ClassifyResult {
    let input = to_input_tensor(image);
    match detector.predict(&input) {
        Ok(p_ai) => ClassifyResult::classified(p_ai, decide(p_ai, threshold)),
        Err(e) => ClassifyResult::failed(&e),
    }
}

/// Classify raw uploaded bytes (JPEG or PNG).
pub fn classify_bytes(detector: &Detector, bytes: &[u8], threshold: f32) -> ClassifyResult {
    match decode_image(bytes) {
        Ok(image) => classify_image(detector, &image, threshold),
        Err(e) => ClassifyResult::failed(&e),
    }
}

/// Classify an image file on disk.
pub fn classify_file(detector: &Detector, path: &Path, threshold: f32) -> ClassifyResult {
    let result = match load_image(path) {
        Ok(image) => classify_image(detector, &image, threshold),
        Err(e) => ClassifyResult::failed(&e),
    };
    result.with_path(path)
}
