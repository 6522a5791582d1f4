//! Read-only Detail-Ansicht des zuletzt angelegten Fixed Points.

use egui::{Color32, Rect, Sense, Vec2};

use crate::app::render_scene;
use crate::app::{AppIntent, AppState};
use crate::core::resolve_asset_url;
use crate::ui::annotation;
use crate::ui::textures::TextureCache;

/// Kantenlänge der Karten-Vorschau in der Detail-Ansicht.
const DETAIL_MAP_SIZE: f32 = 360.0;

/// Zeigt die Detail-Ansicht und sammelt erzeugte Intents.
pub fn show_detail_view(
    ctx: &egui::Context,
    state: &AppState,
    textures: &TextureCache,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_detail {
        return events;
    }
    let Some(record) = &state.ui.last_created else {
        return events;
    };

    let scene = render_scene::build_for_record(record);

    egui::Window::new(format!("Fixed Point #{}", record.id))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading(&record.title);

            let agent_name = state
                .catalog
                .agent(&record.character_id)
                .map(|a| a.display_name.as_str())
                .unwrap_or(record.character_id.as_str());
            let map_name = state
                .catalog
                .game_map(&record.map_id)
                .map(|m| m.display_name.as_str())
                .unwrap_or(record.map_id.as_str());
            ui.label(format!("{} auf {}", agent_name, map_name));

            ui.add_space(6.0);

            // Karte des Datensatzes (nicht die aktuell im Formular gewählte)
            // mit den gespeicherten Punkten aus Schritt 1
            let (rect, _response) =
                ui.allocate_exact_size(Vec2::splat(DETAIL_MAP_SIZE), Sense::hover());
            let painter = ui.painter_at(rect);
            match textures.detail_texture() {
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
                }
            }
            annotation::paint_annotation(&painter, rect, &scene, &state.options);
            annotation::paint_legend(ui, &state.options);

            ui.add_space(6.0);
            ui.separator();

            for step in &record.steps {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("{}.", step.step_order)).strong());
                    if step.description.is_empty() {
                        ui.weak("(ohne Text)");
                    } else {
                        ui.label(&step.description);
                    }
                });
                if let Some(url) = &step.image_url {
                    ui.weak(resolve_asset_url(&state.options.asset_base_url, url));
                }
            }

            ui.add_space(6.0);
            if ui.button("Schließen").clicked() {
                events.push(AppIntent::DetailClosed);
            }
        });

    events
}
