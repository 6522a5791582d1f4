//! Handler für die Formular-Submission.

use crate::app::state::StatusMessage;
use crate::app::use_cases;
use crate::app::AppState;
use crate::services::FixedPointBackend;

/// Führt die Submission aus und übersetzt das Ergebnis in die
/// Statusmeldung der UI.
///
/// Läuft bereits eine Submission, wird der erneute Submit ignoriert.
pub fn submit(state: &mut AppState, backend: &dyn FixedPointBackend) {
    if state.form.submission_in_flight {
        log::warn!("Submit ignoriert: Submission läuft bereits");
        return;
    }
    state.form.submission_in_flight = true;

    match use_cases::submission::submit_fixed_point(state, backend) {
        Ok(record) => {
            // submit_fixed_point hat das Formular bereits zurückgesetzt
            state.ui.status_message = Some(StatusMessage::info(format!(
                "Fixed Point #{} erfolgreich erstellt",
                record.id
            )));
            state.ui.last_created = Some(record);
        }
        Err(e) => {
            log::warn!("Submission fehlgeschlagen: {}", e);
            state.ui.status_message = Some(StatusMessage::error(e.to_string()));
            state.form.submission_in_flight = false;
        }
    }
}
