//! Backend-Schnittstelle und Fehlertypen der Submission.

pub mod local;

use std::fmt;

use crate::core::{Agent, CreateFixedPointRequest, FixedPoint, GameMap};

pub use local::LocalBackend;

/// Schnittstelle zum Fixed-Point-Dienst.
///
/// Alle Aufrufe sind synchron und geben `anyhow::Result` zurück; die
/// Submission übersetzt Fehler in `CompositionError`-Varianten.
pub trait FixedPointBackend {
    /// Lädt den Agenten-Katalog.
    fn fetch_agents(&self) -> anyhow::Result<Vec<Agent>>;

    /// Lädt den Karten-Katalog.
    fn fetch_maps(&self) -> anyhow::Result<Vec<GameMap>>;

    /// Lädt ein Bild hoch und liefert die erreichbare URL zurück.
    fn upload_image(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<String>;

    /// Legt einen Fixed Point an und liefert den gespeicherten Datensatz.
    fn create_fixed_point(&self, request: &CreateFixedPointRequest) -> anyhow::Result<FixedPoint>;
}

/// Fehlerbild der Submission, nach Abbruchursache unterscheidbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// Agent oder Karte fehlt.
    MissingSelection,
    /// Schritt 1 (Pflicht-Slot, trägt die Annotationspunkte) ist leer.
    NoSteps,
    /// Bild-Upload eines bestimmten Slots (1-basiert) schlug fehl.
    ImageUploadFailed(u32),
    /// Der Anlage-Aufruf schlug fehl; die Meldung wird unverändert gezeigt.
    CreateFailed(String),
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionError::MissingSelection => {
                write!(f, "Agent und Map müssen ausgewählt sein")
            }
            CompositionError::NoSteps => {
                write!(f, "Schritt 1 braucht Text oder ein Bild")
            }
            CompositionError::ImageUploadFailed(slot) => {
                write!(f, "Bild-Upload für Schritt {} fehlgeschlagen", slot)
            }
            CompositionError::CreateFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CompositionError {}
