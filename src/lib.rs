//! Fixed Point Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod services;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CapturePhase, CaptureState, CompositionForm,
    StatusMessage, StepDraft, UiState, ViewState, STEP_SLOT_COUNT,
};
pub use core::{
    resolve_asset_url, to_normalized, Agent, Catalog, CreateFixedPointRequest, CreateStepPayload,
    FixedPoint, FixedPointStep, GameMap, MapImage, NormalizedPoint, PointKind, SurfaceRect,
};
pub use services::{CompositionError, FixedPointBackend, LocalBackend};
pub use shared::{AnnotationScene, StudioOptions};
