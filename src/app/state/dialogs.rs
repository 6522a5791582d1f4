//! UI-Zustand: Modale, Dialog-Flags und Statusmeldungen.

use crate::core::FixedPoint;

/// Statusmeldung der letzten abgeschlossenen Aktion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    /// Erfolgs-/Info-Meldung.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Fehlermeldung.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Ob das Karten-Capture-Modal sichtbar ist
    pub show_map_modal: bool,
    /// Slot, für den im nächsten Frame der Bild-Dateidialog öffnet
    pub pending_image_dialog_slot: Option<u32>,
    /// Statusmeldung der letzten Submission (ersetzt, nie gestapelt)
    pub status_message: Option<StatusMessage>,
    /// Zuletzt erfolgreich angelegter Fixed Point
    pub last_created: Option<FixedPoint>,
    /// Ob die Detail-Ansicht des letzten Fixed Points sichtbar ist
    pub show_detail: bool,
    /// Ob der Optionen-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
