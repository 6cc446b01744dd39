//! Image normalization - converts an arbitrary input image into the fixed
//! tensor the classifier expects.
//!
//! Each image → tensor of shape (1, 224, 224, 3), NHWC:
//! - Resize to exactly 224x224 (Triangle filter)
//! - Drop the alpha channel if present (RGBA → RGB)
//! - Scale channel values from [0, 255] to [0.0, 1.0]
//! - Add a leading batch dimension of size 1

use std::path::Path;

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

use crate::error::{Error, Result};

pub const INPUT_WIDTH: u32 = 224;
pub const INPUT_HEIGHT: u32 = 224;
pub const RGB_CHANNELS: usize = 3;

/// Decode uploaded JPEG/PNG bytes into an image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Open and decode an image file from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| Error::ImageOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a decoded image into the model input tensor.
///
/// Deterministic: the same image always produces a bit-identical tensor.
pub fn to_input_tensor(img: &DynamicImage) -> Array4<f32> {
    let resized = img.resize_exact(INPUT_WIDTH, INPUT_HEIGHT, FilterType::Triangle);
    // to_rgb8 drops the alpha channel for RGBA inputs
    let rgb = resized.to_rgb8();

    let (height, width) = (INPUT_HEIGHT as usize, INPUT_WIDTH as usize);
    let mut tensor = Array4::<f32>::zeros((1, height, width, RGB_CHANNELS));

    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..RGB_CHANNELS {
            tensor[[0, y as usize, x as usize, c]] = f32::from(pixel[c]) / 255.0;
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn tensor_shape_is_fixed_for_any_input_size() {
        for (w, h) in [(100, 100), (640, 480), (31, 517), (224, 224)] {
            let tensor = to_input_tensor(&gradient_rgb(w, h));
            assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        }
    }

    #[test]
    fn tensor_values_are_normalized_to_unit_range() {
        let tensor = to_input_tensor(&gradient_rgb(300, 200));
        for &v in tensor.iter() {
            assert!((0.0..=1.0).contains(&v), "value {v} out of range");
        }
    }

    #[test]
    fn white_image_maps_to_ones() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 50, Rgb([255, 255, 255])));
        let tensor = to_input_tensor(&img);
        assert!(tensor.iter().all(|&v| (v - 1.0).abs() < f32::EPSILON));
    }

    #[test]
    fn normalization_is_idempotent() {
        let img = gradient_rgb(123, 77);
        let first = to_input_tensor(&img);
        let second = to_input_tensor(&img);
        assert_eq!(first, second);
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 128, 0])
        }));
        let tensor = to_input_tensor(&rgba);
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        for &v in tensor.iter() {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn rgba_matches_rgb_with_same_colors() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(80, 80, Rgb([10, 200, 30])));
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(80, 80, Rgba([10, 200, 30, 77])));
        assert_eq!(to_input_tensor(&rgb), to_input_tensor(&rgba));
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        assert!(decode_image(&[0u8; 16]).is_err());
    }

    #[test]
    fn decode_accepts_png_bytes() {
        let mut bytes = Vec::new();
        gradient_rgb(8, 8)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        let img = decode_image(&bytes).unwrap();
        assert_eq!(to_input_tensor(&img).shape(), &[1, 224, 224, 3]);
    }
}
