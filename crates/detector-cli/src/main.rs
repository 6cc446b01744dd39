//! AI-generated image detector CLI.
//!
//! Usage:
//!   ai-image-detector photo.jpg --model ai_image_detector.onnx
//!   ai-image-detector photo.png --model ai_image_detector.onnx --threshold 0.7 --format json

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use detector_core::classify::classify_file;
use detector_core::inference::Detector;
use detector_core::report::{print_result, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-image-detector")]
#[command(about = "ONNX-based AI-generated image detector")]
struct Cli {
    /// Image file to classify (JPEG or PNG)
    image: PathBuf,

    /// Path to the ONNX model file
    #[arg(short, long)]
    model: PathBuf,

    /// Classification threshold (0.0-1.0); P(AI) >= threshold means AI-generated
    #[arg(short, long, default_value = "0.5")]
    threshold: f32,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    eprintln!("[*] Loading model from {}...", cli.model.display());
    let detector = Detector::load(&cli.model)?;

    eprintln!("[*] Classifying {}...", cli.image.display());
    let result = classify_file(&detector, &cli.image, cli.threshold);

    print_result(&result, cli.format);

    Ok(())
}
