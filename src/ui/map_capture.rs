//! Karten-Capture-Modal: Klickfläche für die zweiphasige Punktauswahl.

use egui::{Color32, Rect, Sense, Vec2};

use crate::app::{AppIntent, AppState};
use crate::core::{to_normalized, PointKind, SurfaceRect};
use crate::shared::AnnotationScene;
use crate::ui::annotation;
use crate::ui::textures::TextureCache;

/// Kantenlänge der Capture-Oberfläche in Punkten.
const SURFACE_SIZE: f32 = 560.0;

/// Zeigt das Capture-Modal und sammelt erzeugte Intents.
pub fn show_capture_modal(
    ctx: &egui::Context,
    state: &AppState,
    scene: &AnnotationScene,
    textures: &TextureCache,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_map_modal {
        return events;
    }

    let title = match state.capture.awaiting() {
        Some(PointKind::Origin) => "Select Start Position",
        Some(PointKind::Target) => "Select Skill Target",
        None => "Kartenposition",
    };
    let map_name = state.selected_map_name().unwrap_or("Karte").to_string();

    egui::Window::new(format!("{} — {}", title, map_name))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::splat(SURFACE_SIZE), Sense::click());
            let painter = ui.painter_at(rect);

            match textures.map_texture() {
                Some(texture) => {
                    painter.image(
                        texture.id(),
                        rect,
                        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                None => {
                    painter.rect_filled(rect, egui::CornerRadius::same(2), Color32::from_gray(40));
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Kein Kartenbild verfügbar",
                        egui::FontId::proportional(14.0),
                        Color32::GRAY,
                    );
                }
            }

            if state.options.show_grid_overlay {
                annotation::paint_grid(&painter, rect, state.options.grid_divisions);
            }

            // Bounding-Box zum Zeitpunkt des Events, wie sie gerendert wurde
            let surface = SurfaceRect::new(rect.left(), rect.top(), rect.width(), rect.height());

            if let Some(pos) = response.hover_pos() {
                if let Some(point) = to_normalized(pos.x, pos.y, surface) {
                    events.push(AppIntent::CaptureHoverMoved { point });
                }
            } else if state.capture.hover.is_some() {
                events.push(AppIntent::CaptureHoverLeft);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(point) = to_normalized(pos.x, pos.y, surface) {
                        events.push(AppIntent::CapturePointCommitted { point });
                    }
                }
            }

            annotation::paint_annotation(&painter, rect, scene, &state.options);

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let hint = match state.capture.awaiting() {
                    Some(PointKind::Origin) => "Klick setzt den Startpunkt",
                    Some(PointKind::Target) => "Klick setzt das Skill-Ziel",
                    None => "",
                };
                ui.label(hint);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Abbrechen").clicked() {
                        events.push(AppIntent::CaptureCancelled);
                    }
                });
            });
        });

    events
}
