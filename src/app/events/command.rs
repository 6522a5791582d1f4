use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{NormalizedPoint, PointKind};
use crate::shared::StudioOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kataloge über das Backend laden und indizieren
    LoadCatalogs,
    /// Agent setzen (validiert gegen den Katalog)
    SetAgent { agent_id: String },
    /// Karte setzen und deren Kartenbild laden
    SetMap { map_id: String },

    /// Capture-Sitzung für einen Punkt starten
    OpenCapture { kind: PointKind },
    /// Hover-Vorschau aktualisieren
    UpdateHover { point: NormalizedPoint },
    /// Hover-Vorschau löschen
    ClearHover,
    /// Punkt der aktiven Phase übernehmen
    CommitCapturePoint { point: NormalizedPoint },
    /// Capture-Sitzung abbrechen
    CancelCapture,
    /// Einzelnen Punkt löschen (ohne neue Sitzung)
    ClearPoint { kind: PointKind },

    /// Bild-Dateidialog für einen Slot anfordern
    RequestStepImageDialog { slot: u32 },
    /// Bild von der Platte lesen und im Slot vormerken
    StageImageFromPath { slot: u32, path: PathBuf },
    /// Bildbytes direkt im Slot vormerken (Drag-and-drop).
    /// Geteilter Puffer, damit der Eintrag im Command-Log billig bleibt.
    StageImageBytes {
        slot: u32,
        file_name: String,
        bytes: Arc<[u8]>,
    },
    /// Vorgemerktes Bild eines Slots entfernen
    ClearStepImage { slot: u32 },
    /// Drag-Hervorhebung eines Slots setzen
    SetStepDragActive { slot: u32, active: bool },

    /// Formular validieren, Bilder hochladen, Fixed Point anlegen
    SubmitForm,
    /// Formular auf den Leerzustand zurücksetzen
    ResetForm,

    /// Detail-Ansicht öffnen
    ShowDetail,
    /// Detail-Ansicht schließen
    CloseDetail,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: StudioOptions },
    /// Anwendung beenden
    RequestExit,
}
