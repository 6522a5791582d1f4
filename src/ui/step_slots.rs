//! Zentrale Schritt-Slots: Text, Bildvorschau, Dateidialog und Drag-and-drop.

use std::sync::Arc;

use egui::{Color32, Stroke};

use crate::app::{AppIntent, AppState};
use crate::ui::textures::TextureCache;

/// Maximale Kantenlänge der gezeichneten Vorschau in Punkten.
const PREVIEW_DISPLAY_EDGE: f32 = 240.0;

/// Rendert die fünf Schritt-Slots und sammelt erzeugte Intents.
pub fn render_step_slots(
    ctx: &egui::Context,
    state: &mut AppState,
    textures: &mut TextureCache,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Drops und Hover aus dem Frame-Input, für die Treffer-Prüfung pro Slot
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let drag_hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
    let pointer_pos = ctx.pointer_latest_pos();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Schritte");
        ui.add_space(4.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for draft in &mut state.form.steps {
                let slot = draft.order;

                let frame_response = egui::Frame::group(ui.style())
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(format!("Schritt {}", slot)).strong());

                        ui.add(
                            egui::TextEdit::multiline(&mut draft.description)
                                .desired_rows(2)
                                .desired_width(f32::INFINITY)
                                .hint_text("Beschreibung…"),
                        );

                        match &draft.staged_image {
                            Some(staged) => {
                                let texture = textures.preview_texture(
                                    ctx,
                                    slot,
                                    draft.preview_version,
                                    &staged.preview,
                                );
                                let size = scaled_size(
                                    texture.size()[0] as f32,
                                    texture.size()[1] as f32,
                                );
                                ui.image((texture.id(), size));
                                ui.horizontal(|ui| {
                                    ui.weak(&staged.file_name);
                                    if ui.small_button("Bild entfernen").clicked() {
                                        events.push(AppIntent::StepImageCleared { slot });
                                    }
                                });
                            }
                            None => {
                                // Verwaiste Vorschau-Textur (nach Entfernen/Reset) freigeben
                                textures.drop_preview(slot);
                                ui.horizontal(|ui| {
                                    if ui.button("Bild wählen…").clicked() {
                                        events.push(AppIntent::StepImageDialogRequested { slot });
                                    }
                                    ui.weak("oder Bild hierher ziehen");
                                });
                            }
                        }
                    })
                    .response;

                let rect = frame_response.rect;
                let pointer_over = pointer_pos.map(|p| rect.contains(p)).unwrap_or(false);

                // Drag-Hervorhebung nur über dem getroffenen Slot
                let should_highlight = drag_hovering && pointer_over;
                if should_highlight != draft.drag_active {
                    events.push(AppIntent::StepDragStateChanged {
                        slot,
                        active: should_highlight,
                    });
                }
                if draft.drag_active {
                    ui.painter().rect_stroke(
                        rect,
                        4.0,
                        Stroke::new(2.0, Color32::LIGHT_BLUE),
                        egui::StrokeKind::Inside,
                    );
                }

                if pointer_over {
                    for file in &dropped {
                        if let Some(intent) = intent_for_dropped_file(slot, file) {
                            events.push(intent);
                        }
                    }
                }

                ui.add_space(6.0);
            }
        });
    });

    events
}

/// Übersetzt eine fallen gelassene Datei in einen Staging-Intent.
///
/// Native Drops liefern einen Pfad, Web-Drops nur Bytes.
fn intent_for_dropped_file(slot: u32, file: &egui::DroppedFile) -> Option<AppIntent> {
    if let Some(path) = &file.path {
        return Some(AppIntent::StepImageFileSelected {
            slot,
            path: path.clone(),
        });
    }
    file.bytes.as_ref().map(|bytes: &Arc<[u8]>| AppIntent::StepImageBytesDropped {
        slot,
        file_name: file.name.clone(),
        bytes: bytes.clone(),
    })
}

/// Skaliert eine Vorschau proportional auf die Anzeige-Kante.
fn scaled_size(width: f32, height: f32) -> egui::Vec2 {
    let max_edge = width.max(height).max(1.0);
    let scale = (PREVIEW_DISPLAY_EDGE / max_edge).min(1.0);
    egui::Vec2::new(width * scale, height * scale)
}

/// Öffnet den vorgemerkten Bild-Dateidialog (höchstens einen pro Frame)
/// und übersetzt die Auswahl in einen Intent.
pub fn handle_image_dialog(state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if let Some(slot) = state.ui.pending_image_dialog_slot.take() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bilder", &["png", "jpg", "jpeg"])
            .set_title(&format!("Bild für Schritt {}", slot))
            .pick_file()
        {
            events.push(AppIntent::StepImageFileSelected { slot, path });
        }
    }

    events
}
