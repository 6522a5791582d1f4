//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod annotation_scene;
pub mod options;

pub use annotation_scene::{AnnotationScene, Connector, HoverPreview};
pub use options::StudioOptions;
