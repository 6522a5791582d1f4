//! Handler für die zweiphasige Punktauswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{NormalizedPoint, PointKind};

/// Startet eine Capture-Sitzung.
pub fn open(state: &mut AppState, kind: PointKind) {
    use_cases::capture::open(state, kind);
}

/// Übernimmt einen Klickpunkt.
pub fn commit_point(state: &mut AppState, point: NormalizedPoint) {
    use_cases::capture::commit_point(state, point);
}

/// Bricht die Sitzung ab.
pub fn cancel(state: &mut AppState) {
    use_cases::capture::cancel(state);
}

/// Löscht einen einzelnen Punkt.
pub fn clear_point(state: &mut AppState, kind: PointKind) {
    use_cases::capture::clear_point(state, kind);
}

/// Aktualisiert die Hover-Vorschau.
pub fn update_hover(state: &mut AppState, point: NormalizedPoint) {
    use_cases::capture::update_hover(state, point);
}

/// Löscht die Hover-Vorschau.
pub fn clear_hover(state: &mut AppState) {
    use_cases::capture::clear_hover(state);
}
