//! Optionen-Dialog für Farben, Radien und Capture-Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Marker ──────────────────────────────────────────
            ui.collapsing("Marker", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.marker_radius_px)
                                .range(4.0..=30.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Hover-Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.hover_radius_px)
                                .range(4.0..=40.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Startpunkt:", &mut opts.origin_color);
                changed |= color_edit(ui, "Skill-Ziel:", &mut opts.target_color);
            });

            // ── Connector ───────────────────────────────────────
            ui.collapsing("Connector", |ui| {
                changed |= color_edit(ui, "Farbe:", &mut opts.connector_color);
                ui.horizontal(|ui| {
                    ui.label("Strichlänge (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.connector_dash_px)
                                .range(2.0..=30.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Lücke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.connector_gap_px)
                                .range(1.0..=20.0)
                                .speed(0.5),
                        )
                        .changed();
                });
            });

            // ── Capture-Oberfläche ──────────────────────────────
            ui.collapsing("Capture-Oberfläche", |ui| {
                changed |= ui
                    .checkbox(&mut opts.show_grid_overlay, "Raster anzeigen")
                    .changed();
                ui.horizontal(|ui| {
                    ui.label("Raster-Unterteilungen:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.grid_divisions).range(2..=50))
                        .changed();
                });
            });

            // ── Backend ─────────────────────────────────────────
            ui.collapsing("Backend", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Asset-Basis-URL:");
                    changed |= ui.text_edit_singleline(&mut opts.asset_base_url).changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Datenverzeichnis:");
                    changed |= ui.text_edit_singleline(&mut opts.data_dir).changed();
                });
            });

            ui.separator();

            if ui.button("Schließen").clicked() {
                events.push(AppIntent::CloseOptionsDialogRequested);
            }
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
