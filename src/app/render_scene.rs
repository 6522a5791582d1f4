//! Builder für Annotations-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{FixedPoint, NormalizedPoint};
use crate::shared::{AnnotationScene, HoverPreview};

/// Baut die Annotations-Szene für das Formular und das Capture-Modal.
///
/// Die Hover-Vorschau trägt die Art des Punkts, der beim nächsten
/// Commit gesetzt würde; außerhalb aktiver Phasen gibt es keine.
pub fn build(state: &AppState) -> AnnotationScene {
    let hover = match (state.capture.awaiting(), state.capture.hover) {
        (Some(kind), Some(point)) => Some(HoverPreview { point, kind }),
        _ => None,
    };

    AnnotationScene::build(
        state.form.annotation.origin,
        state.form.annotation.target,
        hover,
    )
}

/// Baut die Szene für die Detail-Ansicht eines gespeicherten Fixed Points.
///
/// Die Positionen liegen im ersten Schritt des Datensatzes; ohne
/// gespeicherte Werte bleibt die Szene leer.
pub fn build_for_record(record: &FixedPoint) -> AnnotationScene {
    let first = record.steps.iter().find(|s| s.step_order == 1);

    let origin = first.and_then(|s| match (s.position_x, s.position_y) {
        (Some(x), Some(y)) => Some(NormalizedPoint::new(x, y)),
        _ => None,
    });
    let target = first.and_then(|s| match (s.skill_position_x, s.skill_position_y) {
        (Some(x), Some(y)) => Some(NormalizedPoint::new(x, y)),
        _ => None,
    });

    AnnotationScene::build(origin, target, None)
}
