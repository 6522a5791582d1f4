//! Render-Szene der Karten-Annotation.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden. Alle Koordinaten sind
//! normalisiert; die Pixel-Abbildung passiert erst beim Malen.

use crate::core::{NormalizedPoint, PointKind};

/// Flüchtige Hover-Vorschau während einer aktiven Capture-Phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPreview {
    pub point: NormalizedPoint,
    pub kind: PointKind,
}

/// Richtungs-Connector vom Startpunkt zum Skill-Ziel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: NormalizedPoint,
    pub to: NormalizedPoint,
}

/// Vollständige Beschreibung dessen, was über dem Kartenbild zu malen ist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationScene {
    pub origin: Option<NormalizedPoint>,
    pub target: Option<NormalizedPoint>,
    pub hover: Option<HoverPreview>,
    pub connector: Option<Connector>,
}

impl AnnotationScene {
    /// Leitet die Szene aus den gesetzten Punkten ab.
    ///
    /// Der Connector existiert genau dann, wenn beide Punkte gesetzt sind.
    pub fn build(
        origin: Option<NormalizedPoint>,
        target: Option<NormalizedPoint>,
        hover: Option<HoverPreview>,
    ) -> Self {
        let connector = match (origin, target) {
            (Some(from), Some(to)) => Some(Connector { from, to }),
            _ => None,
        };

        Self {
            origin,
            target,
            hover,
            connector,
        }
    }

    /// True, wenn nichts zu malen ist.
    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.target.is_none() && self.hover.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_requires_both_points() {
        let origin = NormalizedPoint::new(0.2, 0.3);
        let target = NormalizedPoint::new(0.7, 0.8);

        assert!(AnnotationScene::build(Some(origin), None, None)
            .connector
            .is_none());
        assert!(AnnotationScene::build(None, Some(target), None)
            .connector
            .is_none());

        let scene = AnnotationScene::build(Some(origin), Some(target), None);
        let connector = scene.connector.expect("beide Punkte gesetzt");
        assert_eq!(connector.from, origin);
        assert_eq!(connector.to, target);
    }

    #[test]
    fn test_clearing_either_point_removes_connector() {
        let origin = NormalizedPoint::new(0.1, 0.1);
        let target = NormalizedPoint::new(0.9, 0.9);

        // Neuaufbau nach dem Löschen eines Punkts
        let after_clear = AnnotationScene::build(Some(origin), None, None);
        assert!(after_clear.connector.is_none());
        assert_eq!(after_clear.origin, Some(origin));
    }

    #[test]
    fn test_empty_scene() {
        assert!(AnnotationScene::default().is_empty());
        assert!(!AnnotationScene::build(Some(NormalizedPoint::new(0.5, 0.5)), None, None).is_empty());
    }
}
