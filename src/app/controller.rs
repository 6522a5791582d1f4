//! Application Controller für zentrale Event-Verarbeitung.

use std::sync::Arc;

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::services::FixedPointBackend;
use crate::shared::AnnotationScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    backend: Arc<dyn FixedPointBackend>,
}

impl AppController {
    /// Erstellt einen neuen Controller über dem angegebenen Backend.
    pub fn new(backend: Arc<dyn FixedPointBackend>) -> Self {
        Self { backend }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kataloge & Auswahl ===
            AppCommand::LoadCatalogs => {
                handlers::catalog::load_catalogs(state, self.backend.as_ref())?
            }
            AppCommand::SetAgent { agent_id } => handlers::catalog::set_agent(state, agent_id),
            AppCommand::SetMap { map_id } => handlers::catalog::set_map(state, map_id),

            // === Punktauswahl ===
            AppCommand::OpenCapture { kind } => handlers::capture::open(state, kind),
            AppCommand::UpdateHover { point } => handlers::capture::update_hover(state, point),
            AppCommand::ClearHover => handlers::capture::clear_hover(state),
            AppCommand::CommitCapturePoint { point } => {
                handlers::capture::commit_point(state, point)
            }
            AppCommand::CancelCapture => handlers::capture::cancel(state),
            AppCommand::ClearPoint { kind } => handlers::capture::clear_point(state, kind),

            // === Bild-Staging ===
            AppCommand::RequestStepImageDialog { slot } => {
                handlers::staging::request_image_dialog(state, slot)
            }
            AppCommand::StageImageFromPath { slot, path } => {
                handlers::staging::stage_from_path(state, slot, path)?
            }
            AppCommand::StageImageBytes {
                slot,
                file_name,
                bytes,
            } => handlers::staging::stage_bytes(state, slot, file_name, bytes),
            AppCommand::ClearStepImage { slot } => handlers::staging::clear_image(state, slot),
            AppCommand::SetStepDragActive { slot, active } => {
                handlers::staging::set_drag_active(state, slot, active)
            }

            // === Submission & Formular ===
            AppCommand::SubmitForm => handlers::submission::submit(state, self.backend.as_ref()),
            AppCommand::ResetForm => handlers::form::reset(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::ShowDetail => handlers::dialog::show_detail(state),
            AppCommand::CloseDetail => handlers::dialog::close_detail(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Annotations-Szene aus dem aktuellen AppState.
    pub fn build_annotation_scene(&self, state: &AppState) -> AnnotationScene {
        render_scene::build(state)
    }
}
