//! Handler für Katalog-Laden und Auswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::services::FixedPointBackend;

/// Lädt die Kataloge neu über das Backend.
pub fn load_catalogs(state: &mut AppState, backend: &dyn FixedPointBackend) -> anyhow::Result<()> {
    use_cases::catalog::load_catalogs(state, backend)
}

/// Setzt den gewählten Agenten.
pub fn set_agent(state: &mut AppState, agent_id: String) {
    use_cases::catalog::set_agent(state, agent_id);
}

/// Setzt die gewählte Karte und lädt ihr Kartenbild.
pub fn set_map(state: &mut AppState, map_id: String) {
    use_cases::catalog::set_map(state, map_id);
}
