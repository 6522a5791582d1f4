//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{
    AppState, CapturePhase, CaptureState, CompositionForm, StatusMessage, StepDraft, UiState,
    ViewState, STEP_SLOT_COUNT,
};
