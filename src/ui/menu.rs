//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Neues Formular").clicked() {
                    events.push(AppIntent::CancelFormRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen…").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let has_record = state.ui.last_created.is_some();

                if ui
                    .add_enabled(has_record, egui::Button::new("Letzten Fixed Point anzeigen"))
                    .clicked()
                {
                    events.push(AppIntent::ShowDetailRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Kataloge neu laden").clicked() {
                    events.push(AppIntent::ReloadCatalogsRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
