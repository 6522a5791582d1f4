//! Zweiphasige Punktauswahl: Startpunkt, dann Skill-Ziel.

use crate::app::state::CapturePhase;
use crate::app::AppState;
use crate::core::{NormalizedPoint, PointKind};

/// Startet eine Capture-Sitzung für den angegebenen Punkt.
///
/// Bereits gesetzte Punkte bleiben erhalten; sie werden erst beim
/// Commit überschrieben.
pub fn open(state: &mut AppState, kind: PointKind) {
    state.capture.phase = match kind {
        PointKind::Origin => CapturePhase::AwaitingOrigin,
        PointKind::Target => CapturePhase::AwaitingTarget,
    };
    state.capture.hover = None;
    state.ui.show_map_modal = true;
}

/// Übernimmt einen Klickpunkt gemäß der aktiven Phase.
///
/// Nach dem Startpunkt rückt die Sitzung automatisch zum Skill-Ziel vor,
/// außer das Ziel ist bereits gesetzt. Commits außerhalb aktiver Phasen
/// werden ignoriert.
pub fn commit_point(state: &mut AppState, point: NormalizedPoint) {
    match state.capture.phase {
        CapturePhase::AwaitingOrigin => {
            state.form.annotation.set(PointKind::Origin, point);
            if state.form.annotation.target.is_some() {
                finish(state);
            } else {
                state.capture.phase = CapturePhase::AwaitingTarget;
                state.capture.hover = None;
            }
        }
        CapturePhase::AwaitingTarget => {
            state.form.annotation.set(PointKind::Target, point);
            finish(state);
        }
        CapturePhase::Idle | CapturePhase::Complete => {
            log::debug!("Commit ohne aktive Capture-Phase ignoriert");
        }
    }
}

/// Schließt die Sitzung ab und das Modal gleich mit.
fn finish(state: &mut AppState) {
    state.capture.phase = CapturePhase::Complete;
    state.capture.hover = None;
    state.ui.show_map_modal = false;
}

/// Bricht die Sitzung ab; gesetzte Punkte bleiben unverändert.
pub fn cancel(state: &mut AppState) {
    state.capture.phase = CapturePhase::Idle;
    state.capture.hover = None;
    state.ui.show_map_modal = false;
}

/// Löscht genau einen Punkt, ohne eine neue Sitzung zu eröffnen.
pub fn clear_point(state: &mut AppState, kind: PointKind) {
    state.form.annotation.clear(kind);
}

/// Aktualisiert die Hover-Vorschau (nur während aktiver Phasen).
pub fn update_hover(state: &mut AppState, point: NormalizedPoint) {
    if state.capture.is_active() {
        state.capture.hover = Some(point);
    }
}

/// Löscht die Hover-Vorschau (Pointer hat die Oberfläche verlassen).
pub fn clear_hover(state: &mut AppState) {
    state.capture.hover = None;
}
