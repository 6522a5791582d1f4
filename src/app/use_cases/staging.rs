//! Bild-Staging der Schritt-Slots.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;

use crate::app::state::{StagedImage, PREVIEW_MAX_EDGE};
use crate::app::AppState;

/// Merkt den Bild-Dateidialog für einen Slot vor; die UI öffnet ihn
/// im nächsten Frame genau einmal.
pub fn request_image_dialog(state: &mut AppState, slot: u32) {
    state.ui.pending_image_dialog_slot = Some(slot);
}

/// Liest eine Bilddatei von der Platte und merkt sie im Slot vor.
pub fn stage_from_path(state: &mut AppState, slot: u32, path: PathBuf) -> anyhow::Result<()> {
    let bytes: Arc<[u8]> = std::fs::read(&path)
        .map_err(|e| anyhow::anyhow!("Bilddatei nicht lesbar ({:?}): {}", path, e))?
        .into();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bild.png".to_string());

    stage_bytes(state, slot, file_name, bytes);
    Ok(())
}

/// Merkt Bildbytes in einem Slot vor.
///
/// Nicht-Bild-Dateien werden kommentarlos verworfen (nur Debug-Log),
/// ein bereits vorgemerktes Bild wird ersetzt.
pub fn stage_bytes(state: &mut AppState, slot: u32, file_name: String, bytes: Arc<[u8]>) {
    if image::guess_format(&bytes).is_err() {
        log::debug!("Kein Bildformat erkannt, Drop verworfen: {}", file_name);
        return;
    }

    let decoded = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            log::debug!("Bild nicht dekodierbar, Drop verworfen ({}): {}", file_name, e);
            return;
        }
    };

    let preview = decoded
        .resize(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE, FilterType::Triangle)
        .to_rgba8();

    let Some(draft) = state.form.step_mut(slot) else {
        log::warn!("Unbekannter Slot {} beim Bild-Staging", slot);
        return;
    };

    log::info!(
        "Bild vorgemerkt für Schritt {}: {} ({} Bytes)",
        slot,
        file_name,
        bytes.len()
    );

    draft.staged_image = Some(StagedImage {
        file_name: sanitize_display_name(&file_name),
        bytes,
        preview,
    });
    draft.preview_version += 1;
    draft.drag_active = false;
}

/// Entfernt das vorgemerkte Bild eines Slots.
pub fn clear_image(state: &mut AppState, slot: u32) {
    if let Some(draft) = state.form.step_mut(slot) {
        draft.staged_image = None;
        draft.preview_version += 1;
    }
}

/// Setzt die Drag-Hervorhebung eines Slots (rein visuell).
pub fn set_drag_active(state: &mut AppState, slot: u32, active: bool) {
    if let Some(draft) = state.form.step_mut(slot) {
        draft.drag_active = active;
    }
}

/// Reduziert Dateinamen auf ihren Basisnamen.
fn sanitize_display_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}
