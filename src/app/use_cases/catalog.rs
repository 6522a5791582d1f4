//! Katalog-Laden und Agent-/Karten-Auswahl.

use std::path::Path;
use std::sync::Arc;

use crate::app::AppState;
use crate::core::{resolve_asset_url, Catalog, MapImage};
use crate::services::FixedPointBackend;
use crate::shared::StudioOptions;

/// Lädt beide Kataloge über das Backend und baut den Index neu auf.
pub fn load_catalogs(state: &mut AppState, backend: &dyn FixedPointBackend) -> anyhow::Result<()> {
    let agents = backend.fetch_agents()?;
    let maps = backend.fetch_maps()?;
    state.catalog = Catalog::from_collections(agents, maps);
    Ok(())
}

/// Setzt den gewählten Agenten. Unbekannte UUIDs werden ignoriert.
pub fn set_agent(state: &mut AppState, agent_id: String) {
    if state.catalog.agent(&agent_id).is_none() {
        log::warn!("Unbekannte Agenten-UUID ignoriert: {}", agent_id);
        return;
    }
    state.form.agent_id = Some(agent_id);
}

/// Setzt die gewählte Karte und lädt deren Kartenbild für die
/// Capture-Oberfläche. Ein fehlendes Bild blockiert die Auswahl nicht.
pub fn set_map(state: &mut AppState, map_id: String) {
    let Some(map) = state.catalog.game_map(&map_id) else {
        log::warn!("Unbekannte Karten-UUID ignoriert: {}", map_id);
        return;
    };

    let icon = map.display_icon.clone();
    state.form.map_id = Some(map_id);

    state.view.map_image = load_icon_image(&state.options, &icon);
    state.view.map_image_dirty = true;
}

/// Lädt das Kartenbild hinter einem Katalog-Icon-Pfad.
///
/// Wurzel-relative Pfade liegen lokal im Datenverzeichnis. Ein fehlendes
/// oder nicht dekodierbares Bild ist kein Fehler (Warn-Log, `None`).
pub fn load_icon_image(options: &StudioOptions, icon: &str) -> Option<Arc<MapImage>> {
    if icon.is_empty() {
        return None;
    }

    let local_path = if let Some(relative) = icon.strip_prefix('/') {
        Path::new(&options.data_dir).join(relative)
    } else {
        Path::new(icon).to_path_buf()
    };

    match MapImage::load_from_file(&local_path) {
        Ok(image) => Some(Arc::new(image)),
        Err(e) => {
            log::warn!(
                "Kartenbild nicht ladbar ({}), weiter ohne Bild: {:#}",
                resolve_asset_url(&options.asset_base_url, icon),
                e
            );
            None
        }
    }
}
