//! Threshold decision procedure.
//!
//! The classifier outputs a single probability for the AI-generated class.
//! `decide` maps that probability and a threshold to a label plus a
//! confidence in the *chosen* label: an image classified as Authentic at
//! p = 0.2 gets confidence 0.8, not 0.2.

use std::fmt;

use serde::Serialize;

/// Default classification threshold. If P(AI-generated) >= threshold, the
/// image is classified as AI-generated.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Authentic,
    #[serde(rename = "AI-Generated")]
    AiGenerated,
}

impl Label {
    #[must_use]
    pub fn is_ai_generated(&self) -> bool {
        matches!(self, Self::AiGenerated)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentic => write!(f, "Authentic"),
            Self::AiGenerated => write!(f, "AI-Generated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    pub label: Label,
    /// Probability mass assigned to `label`, in [0.0, 1.0].
    pub confidence: f32,
}

/// Map P(AI-generated) and a threshold to a verdict.
///
/// Pure and total over p, threshold in [0, 1]. The boundary is inclusive at
/// the high end: p == threshold classifies as AI-generated.
#[must_use]
pub fn decide(p_ai: f32, threshold: f32) -> Verdict {
    if p_ai >= threshold {
        Verdict {
            label: Label::AiGenerated,
            confidence: p_ai,
        }
    } else {
        Verdict {
            label: Label::Authentic,
            confidence: 1.0 - p_ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_authentic() {
        let v = decide(0.0, DEFAULT_THRESHOLD);
        assert_eq!(v.label, Label::Authentic);
        assert_eq!(v.confidence, 1.0);
    }

    #[test]
    fn certain_ai_generated() {
        let v = decide(1.0, DEFAULT_THRESHOLD);
        assert_eq!(v.label, Label::AiGenerated);
        assert_eq!(v.confidence, 1.0);
    }

    #[test]
    fn below_threshold_confidence_is_complement() {
        let v = decide(0.37, DEFAULT_THRESHOLD);
        assert_eq!(v.label, Label::Authentic);
        assert!((v.confidence - 0.63).abs() < 1e-6);
    }

    #[test]
    fn boundary_is_inclusive() {
        let v = decide(0.5, DEFAULT_THRESHOLD);
        assert_eq!(v.label, Label::AiGenerated);
        assert_eq!(v.confidence, 0.5);
    }

    #[test]
    fn sweep_below_threshold() {
        for i in 0..50 {
            let p = i as f32 / 100.0;
            let v = decide(p, DEFAULT_THRESHOLD);
            assert_eq!(v.label, Label::Authentic, "p={p}");
            assert!((v.confidence - (1.0 - p)).abs() < 1e-6, "p={p}");
        }
    }

    #[test]
    fn sweep_at_or_above_threshold() {
        for i in 50..=100 {
            let p = i as f32 / 100.0;
            let v = decide(p, DEFAULT_THRESHOLD);
            assert_eq!(v.label, Label::AiGenerated, "p={p}");
            assert_eq!(v.confidence, p, "p={p}");
        }
    }

    #[test]
    fn custom_threshold() {
        assert_eq!(decide(0.6, 0.7).label, Label::Authentic);
        assert_eq!(decide(0.7, 0.7).label, Label::AiGenerated);
    }

    #[test]
    fn confidence_always_at_least_threshold_complement() {
        for i in 0..=100 {
            let p = i as f32 / 100.0;
            let v = decide(p, DEFAULT_THRESHOLD);
            assert!((0.0..=1.0).contains(&v.confidence), "p={p}");
            assert!(v.confidence >= 0.5 - 1e-6, "p={p}");
        }
    }

    #[test]
    fn label_display() {
        assert_eq!(Label::Authentic.to_string(), "Authentic");
        assert_eq!(Label::AiGenerated.to_string(), "AI-Generated");
    }
}
