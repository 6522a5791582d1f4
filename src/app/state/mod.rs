//! Application State — zentrale Datenhaltung.

mod app_state;
mod capture;
mod dialogs;
mod form;

pub use app_state::{AppState, ViewState};
pub use capture::{CapturePhase, CaptureState};
pub use dialogs::{StatusMessage, UiState};
pub use form::{
    AnnotationPair, CompositionForm, StagedImage, StepDraft, PREVIEW_MAX_EDGE, STEP_SLOT_COUNT,
};
