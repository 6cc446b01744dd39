//! Main panel: image preview and color-coded verdict.

use eframe::egui;

use crate::app::{ClassifyState, DetectorApp};
use crate::ui::theme;

pub fn draw_result_view(ctx: &egui::Context, app: &mut DetectorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.image.is_none() {
            ui.centered_and_justified(|ui| {
                ui.label("Select a model and an image, then click CLASSIFY.");
            });
            return;
        }

        draw_preview(ui, ctx, app);
        ui.separator();

        match app.state {
            ClassifyState::Idle => {
                ui.label("Click CLASSIFY to get a verdict.");
            }
            ClassifyState::Classifying => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Preprocessing image and running inference...");
                });
            }
            ClassifyState::Complete => {
                draw_verdict(ui, app);
            }
        }
    });
}

fn draw_preview(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut DetectorApp) {
    // Upload the decoded image as a texture once per selection
    if app.preview.is_none() {
        if let Some(image) = &app.image {
            let size = [image.width() as usize, image.height() as usize];
            let rgba = image.to_rgba8();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            app.preview = Some(ctx.load_texture("preview", color_image, Default::default()));
        }
    }

    if let Some(texture) = &app.preview {
        ui.add(
            egui::Image::new(texture)
                .max_width(ui.available_width())
                .max_height(ui.available_height() * 0.6),
        );
    }
}

fn draw_verdict(ui: &mut egui::Ui, app: &DetectorApp) {
    let Some(result) = &app.result else {
        return;
    };

    ui.add_space(8.0);

    if let Some(err) = &result.error {
        ui.label(
            egui::RichText::new("Cannot classify")
                .color(theme::COLOR_ERROR)
                .size(22.0)
                .strong(),
        );
        ui.colored_label(theme::COLOR_ERROR, err);
        ui.label("Confidence: 0.00%");
        return;
    }

    if let Some(verdict) = result.verdict {
        let color = if verdict.label.is_ai_generated() {
            theme::COLOR_AI
        } else {
            theme::COLOR_AUTHENTIC
        };

        ui.label(
            egui::RichText::new(verdict.label.to_string())
                .color(color)
                .size(22.0)
                .strong(),
        );
        ui.label(format!("Confidence: {:.2}%", verdict.confidence * 100.0));
        ui.small(format!("Raw P(AI-generated): {:.4}", result.probability));
    }
}
