//! Zentrale Konfiguration für Fixed Point Studio.
//!
//! `StudioOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Marker-Rendering ───────────────────────────────────────────────

/// Radius der gesetzten Punkt-Marker in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 10.0;
/// Radius der Hover-Vorschau in Screen-Pixeln.
pub const HOVER_RADIUS_PX: f32 = 14.0;
/// Farbe des Startpunkts (RGBA: Valorant-Rot #ff4655).
pub const ORIGIN_COLOR: [f32; 4] = [1.0, 0.275, 0.333, 1.0];
/// Farbe des Skill-Ziels (RGBA: Cyan #00d4ff).
pub const TARGET_COLOR: [f32; 4] = [0.0, 0.831, 1.0, 1.0];

// ── Connector-Rendering ────────────────────────────────────────────

/// Farbe des Richtungs-Connectors (RGBA: Cyan, wie das Ziel).
pub const CONNECTOR_COLOR: [f32; 4] = [0.0, 0.831, 1.0, 1.0];
/// Strichlänge der gestrichelten Connector-Linie in Pixeln.
pub const CONNECTOR_DASH_PX: f32 = 8.0;
/// Lückenlänge der gestrichelten Connector-Linie in Pixeln.
pub const CONNECTOR_GAP_PX: f32 = 5.0;

// ── Capture-Oberfläche ─────────────────────────────────────────────

/// Anzahl der Gitter-Unterteilungen des Orientierungs-Rasters (10%-Abstand).
pub const GRID_DIVISIONS: u32 = 10;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Studio-Optionen.
/// Wird als `fixed_point_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius in Screen-Pixeln
    pub marker_radius_px: f32,
    /// Hover-Vorschau-Radius in Screen-Pixeln
    pub hover_radius_px: f32,
    /// Farbe des Startpunkts (RGBA)
    pub origin_color: [f32; 4],
    /// Farbe des Skill-Ziels (RGBA)
    pub target_color: [f32; 4],

    // ── Connector ───────────────────────────────────────────────
    /// Farbe des Richtungs-Connectors (RGBA)
    pub connector_color: [f32; 4],
    /// Strichlänge der gestrichelten Linie in Pixeln
    pub connector_dash_px: f32,
    /// Lückenlänge der gestrichelten Linie in Pixeln
    pub connector_gap_px: f32,

    // ── Capture-Oberfläche ──────────────────────────────────────
    /// Orientierungs-Raster über dem Kartenbild anzeigen
    pub show_grid_overlay: bool,
    /// Anzahl der Raster-Unterteilungen
    #[serde(default = "default_grid_divisions")]
    pub grid_divisions: u32,

    // ── Backend ─────────────────────────────────────────────────
    /// Basis-URL zur Auflösung wurzel-relativer Asset-Pfade
    pub asset_base_url: String,
    /// Datenverzeichnis des lokalen Backends
    pub data_dir: String,
}

impl Default for StudioOptions {
    fn default() -> Self {
        Self {
            marker_radius_px: MARKER_RADIUS_PX,
            hover_radius_px: HOVER_RADIUS_PX,
            origin_color: ORIGIN_COLOR,
            target_color: TARGET_COLOR,

            connector_color: CONNECTOR_COLOR,
            connector_dash_px: CONNECTOR_DASH_PX,
            connector_gap_px: CONNECTOR_GAP_PX,

            show_grid_overlay: true,
            grid_divisions: GRID_DIVISIONS,

            asset_base_url: "http://localhost:8000".to_string(),
            data_dir: "data".to_string(),
        }
    }
}

/// Serde-Default für `grid_divisions` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_grid_divisions() -> u32 {
    GRID_DIVISIONS
}

impl StudioOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fixed-point-studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fixed_point_studio.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = StudioOptions::default();
        opts.show_grid_overlay = false;
        opts.marker_radius_px = 12.5;
        opts.asset_base_url = "http://example.test".to_string();

        let toml_text = toml::to_string_pretty(&opts).expect("Serialisierung klappt");
        let restored: StudioOptions = toml::from_str(&toml_text).expect("Deserialisierung klappt");

        assert_eq!(restored, opts);
    }

    #[test]
    fn test_missing_grid_divisions_falls_back() {
        // Alte Optionen-Dateien ohne das Feld bleiben ladbar
        let toml_text = toml::to_string_pretty(&StudioOptions::default()).unwrap();
        let stripped: String = toml_text
            .lines()
            .filter(|l| !l.starts_with("grid_divisions"))
            .collect::<Vec<_>>()
            .join("\n");

        let restored: StudioOptions = toml::from_str(&stripped).unwrap();
        assert_eq!(restored.grid_divisions, GRID_DIVISIONS);
    }
}
