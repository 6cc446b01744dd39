//! Output formatting for classification results.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Error;
use crate::verdict::Verdict;

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Raw P(AI-generated) reported by the model; 0.0 on failure.
    pub probability: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifyResult {
    pub fn classified(probability: f32, verdict: Verdict) -> Self {
        Self {
            path: None,
            probability,
            verdict: Some(verdict),
            error: None,
        }
    }

    pub fn failed(error: &Error) -> Self {
        Self {
            path: None,
            probability: 0.0,
            verdict: None,
            error: Some(error.to_string()),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    /// Confidence in the chosen label; 0.0 when classification failed.
    pub fn confidence(&self) -> f32 {
        self.verdict.map_or(0.0, |v| v.confidence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

pub fn print_result(result: &ClassifyResult, format: OutputFormat) {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => print_json(result),
    }
}

fn print_text(result: &ClassifyResult) {
    println!("\n{}", "=".repeat(70));
    println!("CLASSIFICATION RESULT");
    println!("{}", "=".repeat(70));

    if let Some(path) = &result.path {
        println!("  Image:      {}", path.display());
    }

    if let Some(err) = &result.error {
        println!("  [ERR ] {err}");
        println!("  Confidence: 0.00%");
    } else if let Some(verdict) = &result.verdict {
        println!("  Verdict:    {}", verdict.label);
        println!("  Confidence: {:.2}%", verdict.confidence * 100.0);
        println!("  Raw P(AI):  {:.4}", result.probability);
    }

    println!("{}", "=".repeat(70));
}

fn print_json(result: &ClassifyResult) {
    println!(
        "{}",
        serde_json::to_string_pretty(result).unwrap_or_default()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{decide, Label};

    #[test]
    fn output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn failed_result_reports_zero_confidence() {
        let result = ClassifyResult::failed(&Error::EmptyOutput);
        assert_eq!(result.probability, 0.0);
        assert_eq!(result.confidence(), 0.0);
        assert!(result.verdict.is_none());
        assert!(result.error.is_some());
    }

    #[test]
    fn classified_result_carries_verdict() {
        let result = ClassifyResult::classified(0.87, decide(0.87, 0.5));
        let verdict = result.verdict.unwrap();
        assert_eq!(verdict.label, Label::AiGenerated);
        assert!((result.confidence() - 0.87).abs() < 1e-6);
        assert!(result.error.is_none());
    }

    #[test]
    fn json_serialization_skips_empty_fields() {
        let result = ClassifyResult::classified(0.2, decide(0.2, 0.5));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"label\":\"Authentic\""));
        assert!(!json.contains("\"error\""));
        assert!(!json.contains("\"path\""));
    }

    #[test]
    fn json_serialization_renames_ai_label() {
        let result = ClassifyResult::classified(0.9, decide(0.9, 0.5));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"label\":\"AI-Generated\""));
    }
}
