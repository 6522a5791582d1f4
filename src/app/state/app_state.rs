//! Hauptzustand der Anwendung.

use std::sync::Arc;

use crate::app::CommandLog;
use crate::core::{Catalog, MapImage};
use crate::shared::StudioOptions;

use super::{CaptureState, CompositionForm, UiState};

/// View-bezogener Anwendungszustand.
#[derive(Default)]
pub struct ViewState {
    /// Kartenbild der gewählten Karte (None = nichts geladen)
    pub map_image: Option<Arc<MapImage>>,
    /// Signalisiert, dass das Kartenbild neu als Textur hochgeladen werden muss
    pub map_image_dirty: bool,
    /// Kartenbild der Detail-Ansicht (die Karte des angezeigten Datensatzes,
    /// unabhängig von der aktuellen Formular-Auswahl)
    pub detail_map_image: Option<Arc<MapImage>>,
    /// Signalisiert, dass das Detail-Kartenbild neu hochgeladen werden muss
    pub detail_map_dirty: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Kompositions-Formular (Titel, Auswahl, Slots, Punkte)
    pub form: CompositionForm,
    /// Zustand der zweiphasigen Punktauswahl
    pub capture: CaptureState,
    /// Indizierte Agenten-/Karten-Kataloge
    pub catalog: Catalog,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Radien, Backend-Pfade)
    pub options: StudioOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            form: CompositionForm::new(),
            capture: CaptureState::new(),
            catalog: Catalog::default(),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: StudioOptions::default(),
            should_exit: false,
        }
    }

    /// Anzahl der nicht-leeren Slots (für die Statuszeile).
    pub fn filled_step_count(&self) -> usize {
        self.form.non_empty_steps().count()
    }

    /// Anzeigename des gewählten Agenten, falls auflösbar.
    pub fn selected_agent_name(&self) -> Option<&str> {
        self.form
            .agent_id
            .as_deref()
            .and_then(|id| self.catalog.agent(id))
            .map(|a| a.display_name.as_str())
    }

    /// Anzeigename der gewählten Karte, falls auflösbar.
    pub fn selected_map_name(&self) -> Option<&str> {
        self.form
            .map_id
            .as_deref()
            .and_then(|id| self.catalog.game_map(id))
            .map(|m| m.display_name.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
