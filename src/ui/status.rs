//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, STEP_SLOT_COUNT};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Schritte befüllt: {}/{}",
                state.filled_step_count(),
                STEP_SLOT_COUNT
            ));

            ui.separator();

            let points = match (
                state.form.annotation.origin.is_some(),
                state.form.annotation.target.is_some(),
            ) {
                (true, true) => "Start + Ziel gesetzt",
                (true, false) => "Start gesetzt",
                (false, true) => "Ziel gesetzt",
                (false, false) => "Keine Punkte",
            };
            ui.label(points);

            ui.separator();

            match state.selected_map_name() {
                Some(name) => ui.label(format!("Map: {}", name)),
                None => ui.label("Keine Map gewählt"),
            };

            // Ergebnis der letzten Submission (rechts)
            if let Some(msg) = &state.ui.status_message {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = if msg.is_error {
                        egui::Color32::LIGHT_RED
                    } else {
                        egui::Color32::LIGHT_GREEN
                    };
                    ui.label(egui::RichText::new(&msg.text).color(color));
                });
            }
        });
    });
}
