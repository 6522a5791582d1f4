//! Linkes Formular-Panel: Titel, Agent/Karte, Positionsübersicht, Submit.

use crate::app::{AppIntent, AppState};
use crate::core::{NormalizedPoint, PointKind};

/// Rendert das Formular-Panel und sammelt erzeugte Intents.
pub fn render_form_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("form_panel")
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.heading("Neuer Fixed Point");
            ui.separator();

            ui.label("Titel:");
            ui.text_edit_singleline(&mut state.form.title);

            ui.add_space(8.0);
            render_agent_selector(ui, state, &mut events);
            ui.add_space(4.0);
            render_map_selector(ui, state, &mut events);

            ui.add_space(12.0);
            ui.heading("Kartenpunkte");
            ui.label("Positionen werden mit Schritt 1 gespeichert");
            ui.add_space(4.0);

            render_point_row(
                ui,
                "Startpunkt",
                PointKind::Origin,
                state.form.annotation.origin,
                &mut events,
            );
            render_point_row(
                ui,
                "Skill-Ziel",
                PointKind::Target,
                state.form.annotation.target,
                &mut events,
            );

            ui.add_space(12.0);
            ui.separator();

            let can_submit =
                !state.form.title.trim().is_empty() && !state.form.submission_in_flight;
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(can_submit, egui::Button::new("Erstellen"))
                    .clicked()
                {
                    events.push(AppIntent::SubmitRequested);
                }
                if ui.button("Verwerfen").clicked() {
                    events.push(AppIntent::CancelFormRequested);
                }
            });

            if state.ui.last_created.is_some()
                && ui.button("Zuletzt erstellten anzeigen…").clicked()
            {
                events.push(AppIntent::ShowDetailRequested);
            }
        });

    events
}

fn render_agent_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Agent:");
    let selected = state.selected_agent_name().unwrap_or("— wählen —");

    egui::ComboBox::from_id_salt("agent_select")
        .width(220.0)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for agent in state.catalog.agents() {
                let is_selected = state.form.agent_id.as_deref() == Some(agent.uuid.as_str());
                let label = match agent.role_name() {
                    Some(role) => format!("{} ({})", agent.display_name, role),
                    None => agent.display_name.clone(),
                };
                if ui.selectable_label(is_selected, label).clicked() {
                    events.push(AppIntent::AgentSelected {
                        agent_id: agent.uuid.clone(),
                    });
                }
            }
        });
}

fn render_map_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Map:");
    let selected = state.selected_map_name().unwrap_or("— wählen —");

    egui::ComboBox::from_id_salt("map_select")
        .width(220.0)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for map in state.catalog.maps() {
                let is_selected = state.form.map_id.as_deref() == Some(map.uuid.as_str());
                if ui
                    .selectable_label(is_selected, &map.display_name)
                    .clicked()
                {
                    events.push(AppIntent::MapSelected {
                        map_id: map.uuid.clone(),
                    });
                }
            }
        });
}

/// Eine Zeile der Positionsübersicht: Wert, Wählen- und Löschen-Aktion.
fn render_point_row(
    ui: &mut egui::Ui,
    label: &str,
    kind: PointKind,
    point: Option<NormalizedPoint>,
    events: &mut Vec<AppIntent>,
) {
    ui.horizontal(|ui| {
        ui.label(format!("{}:", label));
        match point {
            Some(p) => {
                ui.monospace(format!("({:.0}%, {:.0}%)", p.x * 100.0, p.y * 100.0));
                if ui.small_button("Löschen").clicked() {
                    events.push(AppIntent::ClearPointRequested { kind });
                }
            }
            None => {
                ui.weak("nicht gesetzt");
            }
        }
        if ui.small_button("wählen…").clicked() {
            events.push(AppIntent::OpenCaptureRequested { kind });
        }
    });
}
