//! Left panel: model/image file pickers, threshold slider, classify button.

use eframe::egui;

use crate::app::DetectorApp;

pub fn draw_sidebar(ctx: &egui::Context, app: &mut DetectorApp) {
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("AI IMAGE DETECTOR");
                ui.label("v0.1.0");
                ui.separator();

                // Model file picker
                ui.label("MODEL");
                if ui.button("Select Model...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("ONNX Model", &["onnx"])
                        .pick_file()
                    {
                        app.load_model(path);
                    }
                }
                if let Some(p) = &app.model_path {
                    ui.small(
                        p.file_name()
                            .map(|f| f.to_string_lossy().to_string())
                            .unwrap_or_else(|| "?".into()),
                    );
                }
                if app.model_loading {
                    ui.small("loading...");
                } else if app.detector.is_some() {
                    ui.small("model ready");
                }
                if let Some(err) = &app.model_error {
                    ui.colored_label(super::theme::COLOR_ERROR, err);
                    ui.small("Classification is disabled until a valid model is selected.");
                }
                ui.add_space(4.0);
                ui.separator();

                // Image file picker
                ui.label("IMAGE");
                if ui.button("Select Image...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &["jpg", "jpeg", "png"])
                        .pick_file()
                    {
                        app.set_image(path);
                    }
                }
                if let Some(p) = &app.image_path {
                    ui.small(
                        p.file_name()
                            .map(|f| f.to_string_lossy().to_string())
                            .unwrap_or_else(|| "?".into()),
                    );
                }
                ui.add_space(4.0);
                ui.separator();

                // Settings
                ui.label("SETTINGS");
                ui.horizontal(|ui| {
                    ui.label("Threshold:");
                    ui.add(egui::Slider::new(&mut app.threshold, 0.0..=1.0).step_by(0.05));
                });

                ui.add_space(8.0);

                // Classify button
                ui.add_enabled_ui(app.can_classify(), |ui| {
                    if ui
                        .add_sized([ui.available_width(), 32.0], egui::Button::new("CLASSIFY"))
                        .clicked()
                    {
                        app.start_classify();
                    }
                });

                // Error message
                if let Some(err) = &app.error_message {
                    ui.add_space(4.0);
                    ui.colored_label(super::theme::COLOR_ERROR, err);
                }
            });
        });
}
