//! Zustand der zweiphasigen Punktauswahl (Startpunkt, dann Skill-Ziel).

use crate::core::{NormalizedPoint, PointKind};

/// Phasen der Capture-Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    /// Keine Sitzung aktiv
    #[default]
    Idle,
    /// Nächster Commit setzt den Startpunkt
    AwaitingOrigin,
    /// Nächster Commit setzt das Skill-Ziel
    AwaitingTarget,
    /// Sitzung abgeschlossen, Commits werden ignoriert
    Complete,
}

/// Capture-Zustand inkl. flüchtiger Hover-Vorschau.
#[derive(Debug, Clone, Default)]
pub struct CaptureState {
    /// Aktuelle Phase der Sitzung
    pub phase: CapturePhase,
    /// Hover-Vorschau, nur während aktiver Phasen gesetzt
    pub hover: Option<NormalizedPoint>,
}

impl CaptureState {
    /// Erstellt den Ruhezustand (keine Sitzung).
    pub fn new() -> Self {
        Self::default()
    }

    /// True, solange Commits angenommen werden.
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            CapturePhase::AwaitingOrigin | CapturePhase::AwaitingTarget
        )
    }

    /// Welcher Punkt beim nächsten Commit gesetzt würde.
    pub fn awaiting(&self) -> Option<PointKind> {
        match self.phase {
            CapturePhase::AwaitingOrigin => Some(PointKind::Origin),
            CapturePhase::AwaitingTarget => Some(PointKind::Target),
            CapturePhase::Idle | CapturePhase::Complete => None,
        }
    }
}
