//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ReloadCatalogsRequested => vec![AppCommand::LoadCatalogs],
        AppIntent::AgentSelected { agent_id } => vec![AppCommand::SetAgent { agent_id }],
        AppIntent::MapSelected { map_id } => vec![AppCommand::SetMap { map_id }],

        AppIntent::OpenCaptureRequested { kind } => vec![AppCommand::OpenCapture { kind }],
        AppIntent::CaptureHoverMoved { point } => {
            // Hover-Updates außerhalb aktiver Phasen gar nicht erst ausführen
            if state.capture.is_active() {
                vec![AppCommand::UpdateHover { point }]
            } else {
                vec![]
            }
        }
        AppIntent::CaptureHoverLeft => vec![AppCommand::ClearHover],
        AppIntent::CapturePointCommitted { point } => {
            vec![AppCommand::CommitCapturePoint { point }]
        }
        AppIntent::CaptureCancelled => vec![AppCommand::CancelCapture],
        AppIntent::ClearPointRequested { kind } => vec![AppCommand::ClearPoint { kind }],

        AppIntent::StepImageDialogRequested { slot } => {
            vec![AppCommand::RequestStepImageDialog { slot }]
        }
        AppIntent::StepImageFileSelected { slot, path } => {
            vec![AppCommand::StageImageFromPath { slot, path }]
        }
        AppIntent::StepImageBytesDropped {
            slot,
            file_name,
            bytes,
        } => vec![AppCommand::StageImageBytes {
            slot,
            file_name,
            bytes,
        }],
        AppIntent::StepImageCleared { slot } => vec![AppCommand::ClearStepImage { slot }],
        AppIntent::StepDragStateChanged { slot, active } => {
            vec![AppCommand::SetStepDragActive { slot, active }]
        }

        AppIntent::SubmitRequested => vec![AppCommand::SubmitForm],
        AppIntent::CancelFormRequested => vec![AppCommand::ResetForm],

        AppIntent::ShowDetailRequested => vec![AppCommand::ShowDetail],
        AppIntent::DetailClosed => vec![AppCommand::CloseDetail],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        // Live-Anwendung: der Dialog bleibt offen
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::CapturePhase;
    use crate::core::NormalizedPoint;

    #[test]
    fn test_hover_outside_active_phase_maps_to_nothing() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::CaptureHoverMoved {
                point: NormalizedPoint::new(0.5, 0.5),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_hover_during_active_phase_maps_to_update() {
        let mut state = AppState::new();
        state.capture.phase = CapturePhase::AwaitingOrigin;

        let commands = map_intent_to_commands(
            &state,
            AppIntent::CaptureHoverMoved {
                point: NormalizedPoint::new(0.5, 0.5),
            },
        );
        assert!(matches!(commands.as_slice(), [AppCommand::UpdateHover { .. }]));
    }

    #[test]
    fn test_options_change_keeps_dialog_open() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::OptionsChanged {
                options: crate::shared::StudioOptions::default(),
            },
        );
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::ApplyOptions { .. }]
        ));
    }
}
