//! Handler für das Bild-Staging der Schritt-Slots.

use std::path::PathBuf;
use std::sync::Arc;

use crate::app::use_cases;
use crate::app::AppState;

/// Merkt den Bild-Dateidialog für einen Slot vor.
pub fn request_image_dialog(state: &mut AppState, slot: u32) {
    use_cases::staging::request_image_dialog(state, slot);
}

/// Liest eine Bilddatei und merkt sie im Slot vor.
pub fn stage_from_path(state: &mut AppState, slot: u32, path: PathBuf) -> anyhow::Result<()> {
    use_cases::staging::stage_from_path(state, slot, path)
}

/// Merkt Bildbytes direkt im Slot vor (Drag-and-drop).
pub fn stage_bytes(state: &mut AppState, slot: u32, file_name: String, bytes: Arc<[u8]>) {
    use_cases::staging::stage_bytes(state, slot, file_name, bytes);
}

/// Entfernt das vorgemerkte Bild eines Slots.
pub fn clear_image(state: &mut AppState, slot: u32) {
    use_cases::staging::clear_image(state, slot);
}

/// Setzt die Drag-Hervorhebung eines Slots.
pub fn set_drag_active(state: &mut AppState, slot: u32, active: bool) {
    use_cases::staging::set_drag_active(state, slot, active);
}
