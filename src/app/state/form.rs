//! Formular-Zustand: Titel, Auswahl, Schritt-Slots und Annotationspunkte.

use std::sync::Arc;

use image::RgbaImage;

use crate::core::{NormalizedPoint, PointKind};

/// Feste Anzahl der Schritt-Slots.
pub const STEP_SLOT_COUNT: u32 = 5;
/// Maximale Kantenlänge der Vorschau-Thumbnails in Pixeln.
pub const PREVIEW_MAX_EDGE: u32 = 320;

/// Ein in einem Slot vorgemerktes Bild. Die Bytes bleiben lokal,
/// bis die Submission sie hochlädt.
#[derive(Debug, Clone)]
pub struct StagedImage {
    /// Ursprünglicher Dateiname (für den Upload)
    pub file_name: String,
    /// Unveränderte Dateibytes, geteilt mit dem erzeugenden Event
    pub bytes: Arc<[u8]>,
    /// Dekodierte, verkleinerte Vorschau
    pub preview: RgbaImage,
}

/// Entwurf eines einzelnen Schritt-Slots.
#[derive(Debug, Clone)]
pub struct StepDraft {
    /// Slot-Nummer, 1-basiert
    pub order: u32,
    /// Beschreibungstext des Schritts
    pub description: String,
    /// Vorgemerktes Bild (höchstens eines pro Slot)
    pub staged_image: Option<StagedImage>,
    /// True, solange ein Drag über dem Slot schwebt (nur visuell)
    pub drag_active: bool,
    /// Zählt hoch bei jedem Bildwechsel, damit die Textur-Vorschau
    /// veraltete Uploads erkennt
    pub preview_version: u64,
}

impl StepDraft {
    /// Erstellt einen leeren Slot mit der angegebenen Nummer.
    pub fn new(order: u32) -> Self {
        Self {
            order,
            description: String::new(),
            staged_image: None,
            drag_active: false,
            preview_version: 0,
        }
    }

    /// Leer = weder Text (nach Trim) noch Bild. Leere Slots werden
    /// bei der Submission übersprungen.
    pub fn is_empty(&self) -> bool {
        self.description.trim().is_empty() && self.staged_image.is_none()
    }
}

/// Die beiden Annotationspunkte (beide optional, unabhängig löschbar).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnnotationPair {
    pub origin: Option<NormalizedPoint>,
    pub target: Option<NormalizedPoint>,
}

impl AnnotationPair {
    /// Punkt der angegebenen Art.
    pub fn get(&self, kind: PointKind) -> Option<NormalizedPoint> {
        match kind {
            PointKind::Origin => self.origin,
            PointKind::Target => self.target,
        }
    }

    /// Setzt den Punkt der angegebenen Art.
    pub fn set(&mut self, kind: PointKind, point: NormalizedPoint) {
        match kind {
            PointKind::Origin => self.origin = Some(point),
            PointKind::Target => self.target = Some(point),
        }
    }

    /// Löscht nur den Punkt der angegebenen Art.
    pub fn clear(&mut self, kind: PointKind) {
        match kind {
            PointKind::Origin => self.origin = None,
            PointKind::Target => self.target = None,
        }
    }
}

/// Gesamtes Kompositions-Formular.
#[derive(Debug, Clone)]
pub struct CompositionForm {
    /// Titel des Fixed Points (Pflichtfeld im Formular)
    pub title: String,
    /// UUID des gewählten Agenten
    pub agent_id: Option<String>,
    /// UUID der gewählten Karte
    pub map_id: Option<String>,
    /// Die fünf Schritt-Slots in fester Reihenfolge
    pub steps: Vec<StepDraft>,
    /// Annotationspunkte (werden mit Schritt 1 gespeichert)
    pub annotation: AnnotationPair,
    /// True, solange eine Submission läuft; weitere Submits werden ignoriert
    pub submission_in_flight: bool,
}

impl CompositionForm {
    /// Erstellt ein leeres Formular mit fünf leeren Slots.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            agent_id: None,
            map_id: None,
            steps: (1..=STEP_SLOT_COUNT).map(StepDraft::new).collect(),
            annotation: AnnotationPair::default(),
            submission_in_flight: false,
        }
    }

    /// Setzt das Formular vollständig auf den Leerzustand zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Slot per 1-basierter Nummer.
    pub fn step(&self, order: u32) -> Option<&StepDraft> {
        self.steps.iter().find(|s| s.order == order)
    }

    /// Slot per 1-basierter Nummer, mutierbar.
    pub fn step_mut(&mut self, order: u32) -> Option<&mut StepDraft> {
        self.steps.iter_mut().find(|s| s.order == order)
    }

    /// True, wenn Agent und Karte gewählt sind.
    pub fn has_selection(&self) -> bool {
        self.agent_id.is_some() && self.map_id.is_some()
    }

    /// Nicht-leere Slots in Slot-Reihenfolge.
    pub fn non_empty_steps(&self) -> impl Iterator<Item = &StepDraft> {
        self.steps.iter().filter(|s| !s.is_empty())
    }
}

impl Default for CompositionForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_detection_ignores_whitespace() {
        let mut draft = StepDraft::new(1);
        assert!(draft.is_empty());

        draft.description = "   \n ".to_string();
        assert!(draft.is_empty());

        draft.description = "Smoke auf A".to_string();
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_non_empty_steps_keep_slot_order() {
        let mut form = CompositionForm::new();
        form.step_mut(4).unwrap().description = "vier".to_string();
        form.step_mut(2).unwrap().description = "zwei".to_string();

        let orders: Vec<_> = form.non_empty_steps().map(|s| s.order).collect();
        assert_eq!(orders, vec![2, 4]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = CompositionForm::new();
        form.title = "Sova Pfeil".to_string();
        form.agent_id = Some("a-1".to_string());
        form.annotation.set(PointKind::Origin, NormalizedPoint::new(0.1, 0.2));
        form.step_mut(1).unwrap().description = "Schritt".to_string();
        form.submission_in_flight = true;

        form.reset();

        assert!(form.title.is_empty());
        assert!(form.agent_id.is_none());
        assert!(form.annotation.origin.is_none());
        assert!(form.steps.iter().all(|s| s.is_empty()));
        assert!(!form.submission_in_flight);
        assert_eq!(form.steps.len(), STEP_SLOT_COUNT as usize);
    }
}
