//! Handler für das Zurücksetzen des Formulars.

use crate::app::state::CaptureState;
use crate::app::AppState;

/// Setzt Formular und Capture-Zustand auf den Leerzustand zurück.
pub fn reset(state: &mut AppState) {
    state.form.reset();
    state.capture = CaptureState::new();
    state.ui.show_map_modal = false;
    log::info!("Formular verworfen");
}
