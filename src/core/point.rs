//! Normalisierte Karten-Koordinaten und Umrechnung aus Pointer-Positionen.

use serde::{Deserialize, Serialize};

/// Position als Bruchteil der Oberflächen-Breite/-Höhe in [0,1],
/// unabhängig von Pixel-Auflösung und Darstellungsgröße.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontaler Anteil in [0,1]
    pub x: f32,
    /// Vertikaler Anteil in [0,1]
    pub y: f32,
}

impl NormalizedPoint {
    /// Erstellt einen neuen Punkt.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rückabbildung in Pixel-Koordinaten der aktuell gerenderten Fläche.
    ///
    /// Wird jeden Frame frisch ausgewertet, damit die Annotation unter
    /// beliebiger Skalierung (responsives Layout, Modal-Zoom) korrekt sitzt.
    pub fn to_pixels(&self, rendered_width: f32, rendered_height: f32) -> glam::Vec2 {
        glam::Vec2::new(self.x * rendered_width, self.y * rendered_height)
    }
}

/// Welcher der beiden Kartenpunkte gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Startpunkt des Agenten
    Origin,
    /// Einschlagpunkt des Skills
    Target,
}

/// Bounding-Box der Capture-Oberfläche zum Zeitpunkt des Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    /// Erstellt eine Bounding-Box.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Eine Fläche ohne Ausdehnung kann keine gültigen Punkte liefern
    /// (z.B. solange das Kartenbild noch nicht geladen ist).
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Rechnet eine Pointer-Position in einen `NormalizedPoint` um.
///
/// Kein Clamping: der Aufrufer garantiert, dass das Event innerhalb der
/// Oberfläche entstanden ist. Bei Null-Fläche kommt `None` zurück, damit
/// kein NaN in gespeicherte Punkte wandert.
pub fn to_normalized(
    pointer_x: f32,
    pointer_y: f32,
    surface: SurfaceRect,
) -> Option<NormalizedPoint> {
    if !surface.has_area() {
        return None;
    }

    Some(NormalizedPoint::new(
        (pointer_x - surface.left) / surface.width,
        (pointer_y - surface.top) / surface.height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_normalized_within_unit_square() {
        let surface = SurfaceRect::new(100.0, 50.0, 600.0, 400.0);

        // Raster von Pointer-Positionen innerhalb der Fläche
        for ix in 0..=10 {
            for iy in 0..=10 {
                let px = 100.0 + ix as f32 * 60.0;
                let py = 50.0 + iy as f32 * 40.0;
                let p = to_normalized(px, py, surface).expect("Fläche hat Ausdehnung");
                assert!((0.0..=1.0).contains(&p.x), "x außerhalb [0,1]: {}", p.x);
                assert!((0.0..=1.0).contains(&p.y), "y außerhalb [0,1]: {}", p.y);
            }
        }
    }

    #[test]
    fn test_to_normalized_exact_fractions() {
        let surface = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
        let p = to_normalized(64.0, 41.0, surface).unwrap();

        assert_relative_eq!(p.x, 0.32);
        assert_relative_eq!(p.y, 0.41);
    }

    #[test]
    fn test_zero_area_surface_yields_none() {
        // Vor dem Bild-Load kann die Bounding-Box kollabiert sein
        assert!(to_normalized(10.0, 10.0, SurfaceRect::new(0.0, 0.0, 0.0, 100.0)).is_none());
        assert!(to_normalized(10.0, 10.0, SurfaceRect::new(0.0, 0.0, 100.0, 0.0)).is_none());
        assert!(to_normalized(10.0, 10.0, SurfaceRect::new(5.0, 5.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_pixel_roundtrip_under_scaling() {
        let surface = SurfaceRect::new(0.0, 0.0, 500.0, 500.0);
        let p = to_normalized(125.0, 375.0, surface).unwrap();

        // Gleiche Fraktion, andere Rendergröße
        let px = p.to_pixels(1000.0, 2000.0);
        assert_relative_eq!(px.x, 250.0);
        assert_relative_eq!(px.y, 1500.0);
    }
}
