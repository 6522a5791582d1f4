//! Submission: Validierung, sequenzielle Bild-Uploads, Anlage, Reset.

use crate::app::state::CaptureState;
use crate::app::AppState;
use crate::core::{CreateFixedPointRequest, CreateStepPayload, FixedPoint};
use crate::services::{CompositionError, FixedPointBackend};

/// Führt die komplette Submission aus.
///
/// Reihenfolge: Auswahl-Prüfung, Slot-Prüfung, dann pro nicht-leerem Slot
/// in Slot-Reihenfolge der Bild-Upload (erster Fehler bricht ab, bereits
/// hochgeladene Bilder bleiben bestehen), zuletzt die Anlage. Die
/// Annotationspunkte wandern in den Payload von Schritt 1. Erst nach
/// erfolgreicher Anlage wird das Formular zurückgesetzt.
///
/// Slot 1 ist Pflicht: die Annotationspunkte hängen an seinem Payload,
/// ein leerer Slot 1 würde gesetzte Punkte stillschweigend verwerfen.
pub fn submit_fixed_point(
    state: &mut AppState,
    backend: &dyn FixedPointBackend,
) -> Result<FixedPoint, CompositionError> {
    if !state.form.has_selection() {
        return Err(CompositionError::MissingSelection);
    }
    // Slot 1 leer deckt auch "alle Slots leer" ab
    let first_slot_filled = state.form.step(1).is_some_and(|s| !s.is_empty());
    if !first_slot_filled {
        return Err(CompositionError::NoSteps);
    }

    let mut steps: Vec<CreateStepPayload> = Vec::new();
    for draft in state.form.non_empty_steps() {
        let mut payload = CreateStepPayload::new(draft.order, draft.description.clone());

        if let Some(staged) = &draft.staged_image {
            let url = backend
                .upload_image(&staged.file_name, &staged.bytes)
                .map_err(|e| {
                    log::error!("Bild-Upload für Schritt {} fehlgeschlagen: {:#}", draft.order, e);
                    CompositionError::ImageUploadFailed(draft.order)
                })?;
            payload.image_url = Some(url);
        }

        if draft.order == 1 {
            payload.position_x = state.form.annotation.origin.map(|p| p.x);
            payload.position_y = state.form.annotation.origin.map(|p| p.y);
            payload.skill_position_x = state.form.annotation.target.map(|p| p.x);
            payload.skill_position_y = state.form.annotation.target.map(|p| p.y);
        }

        steps.push(payload);
    }

    // has_selection() hat beide IDs geprüft
    let request = CreateFixedPointRequest {
        title: state.form.title.trim().to_string(),
        character_id: state.form.agent_id.clone().unwrap_or_default(),
        map_id: state.form.map_id.clone().unwrap_or_default(),
        steps,
    };

    let record = backend
        .create_fixed_point(&request)
        .map_err(|e| CompositionError::CreateFailed(e.to_string()))?;

    state.form.reset();
    state.capture = CaptureState::new();

    log::info!("Fixed Point #{} erfolgreich angelegt", record.id);
    Ok(record)
}
