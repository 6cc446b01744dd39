//! Application state and classification management.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use eframe::egui;
use image::DynamicImage;

use detector_core::classify::classify_image;
use detector_core::inference::Detector;
use detector_core::preprocess::load_image;
use detector_core::report::ClassifyResult;
use detector_core::verdict::DEFAULT_THRESHOLD;

/// Application state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyState {
    Idle,
    Classifying,
    Complete,
}

pub struct DetectorApp {
    // Model
    pub model_path: Option<PathBuf>,
    pub detector: Option<Arc<Detector>>,
    pub model_loading: bool,
    pub model_error: Option<String>,

    // Selected image
    pub image_path: Option<PathBuf>,
    pub image: Option<DynamicImage>,
    pub preview: Option<egui::TextureHandle>,

    // Settings + state
    pub threshold: f32,
    pub state: ClassifyState,
    pub result: Option<ClassifyResult>,
    pub error_message: Option<String>,

    // Communication
    model_rx: Option<mpsc::Receiver<Result<Detector, String>>>,
    result_rx: Option<mpsc::Receiver<ClassifyResult>>,
}

impl DetectorApp {
    pub fn new() -> Self {
        Self {
            model_path: None,
            detector: None,
            model_loading: false,
            model_error: None,
            image_path: None,
            image: None,
            preview: None,
            threshold: DEFAULT_THRESHOLD,
            state: ClassifyState::Idle,
            result: None,
            error_message: None,
            model_rx: None,
            result_rx: None,
        }
    }

    /// Load the model artifact once, on a background thread. The resulting
    /// `Detector` is immutable for the rest of the process lifetime.
    pub fn load_model(&mut self, path: PathBuf) {
        self.model_path = Some(path.clone());
        self.detector = None;
        self.model_error = None;
        self.model_loading = true;

        let (tx, rx) = mpsc::channel();
        self.model_rx = Some(rx);

        std::thread::spawn(move || {
            let outcome = Detector::load(&path).map_err(|e| e.to_string());
            let _ = tx.send(outcome);
        });
    }

    pub fn set_image(&mut self, path: PathBuf) {
        match load_image(&path) {
            Ok(image) => {
                self.image_path = Some(path);
                self.image = Some(image);
                self.preview = None;
                self.result = None;
                self.error_message = None;
                self.state = ClassifyState::Idle;
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn can_classify(&self) -> bool {
        self.detector.is_some() && self.image.is_some() && self.state != ClassifyState::Classifying
    }

    pub fn start_classify(&mut self) {
        let Some(detector) = self.detector.clone() else {
            self.error_message = Some("No model loaded".into());
            return;
        };
        let Some(image) = self.image.clone() else {
            self.error_message = Some("No image selected".into());
            return;
        };

        self.error_message = None;
        self.result = None;
        self.state = ClassifyState::Classifying;

        let threshold = self.threshold;
        let (tx, rx) = mpsc::channel();
        self.result_rx = Some(rx);

        std::thread::spawn(move || {
            let result = classify_image(&detector, &image, threshold);
            let _ = tx.send(result);
        });
    }

    /// Poll for completion — called each frame.
    pub fn poll(&mut self) {
        if let Some(rx) = &self.model_rx {
            if let Ok(outcome) = rx.try_recv() {
                match outcome {
                    Ok(detector) => self.detector = Some(Arc::new(detector)),
                    Err(msg) => self.model_error = Some(msg),
                }
                self.model_loading = false;
                self.model_rx = None;
            }
        }

        if let Some(rx) = &self.result_rx {
            if let Ok(result) = rx.try_recv() {
                self.result = Some(result);
                self.state = ClassifyState::Complete;
                self.result_rx = None;
            }
        }
    }
}

impl eframe::App for DetectorApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        // Request repaint while background work is in flight
        if self.state == ClassifyState::Classifying || self.model_loading {
            ctx.request_repaint();
        }

        crate::ui::sidebar::draw_sidebar(ctx, self);
        crate::ui::result_view::draw_result_view(ctx, self);
    }
}
