use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{NormalizedPoint, PointKind};
use crate::shared::StudioOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Agenten-/Karten-Kataloge (neu) laden
    ReloadCatalogsRequested,
    /// Agent wurde im Formular gewählt
    AgentSelected { agent_id: String },
    /// Karte wurde im Formular gewählt
    MapSelected { map_id: String },

    /// Capture-Modal für einen Punkt öffnen
    OpenCaptureRequested { kind: PointKind },
    /// Pointer schwebt über der Capture-Oberfläche
    CaptureHoverMoved { point: NormalizedPoint },
    /// Pointer hat die Capture-Oberfläche verlassen
    CaptureHoverLeft,
    /// Klick auf die Capture-Oberfläche (bereits normalisiert)
    CapturePointCommitted { point: NormalizedPoint },
    /// Capture-Modal geschlossen ohne Commit
    CaptureCancelled,
    /// Einzelnen Punkt aus dem Formular löschen
    ClearPointRequested { kind: PointKind },

    /// Bild-Dateidialog für einen Slot öffnen
    StepImageDialogRequested { slot: u32 },
    /// Bilddatei wurde im Dialog gewählt
    StepImageFileSelected { slot: u32, path: PathBuf },
    /// Bildbytes wurden per Drag-and-drop auf einen Slot fallen gelassen.
    /// Der Puffer wird geteilt, nicht kopiert (Command-Log!).
    StepImageBytesDropped {
        slot: u32,
        file_name: String,
        bytes: Arc<[u8]>,
    },
    /// Vorgemerktes Bild eines Slots entfernen
    StepImageCleared { slot: u32 },
    /// Drag schwebt über einem Slot (nur visuelles Feedback)
    StepDragStateChanged { slot: u32, active: bool },

    /// Formular absenden
    SubmitRequested,
    /// Formular verwerfen (Leerzustand)
    CancelFormRequested,

    /// Detail-Ansicht des zuletzt angelegten Fixed Points öffnen
    ShowDetailRequested,
    /// Detail-Ansicht geschlossen
    DetailClosed,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (Anwendung + Persistenz)
    OptionsChanged { options: StudioOptions },
    /// Anwendung beenden
    ExitRequested,
}
