//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::StudioOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet die Detail-Ansicht des zuletzt angelegten Fixed Points und
/// lädt das Kartenbild der Karte, auf der der Datensatz angelegt wurde.
pub fn show_detail(state: &mut AppState) {
    let Some(record) = &state.ui.last_created else {
        return;
    };

    let icon = state
        .catalog
        .game_map(&record.map_id)
        .map(|m| m.display_icon.clone())
        .unwrap_or_default();

    state.view.detail_map_image = use_cases::catalog::load_icon_image(&state.options, &icon);
    state.view.detail_map_dirty = true;
    state.ui.show_detail = true;
}

/// Schließt die Detail-Ansicht und gibt deren Kartenbild frei.
pub fn close_detail(state: &mut AppState) {
    state.view.detail_map_image = None;
    state.view.detail_map_dirty = true;
    state.ui.show_detail = false;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: StudioOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = StudioOptions::config_path();
    state.options.save_to_file(&path)
}
