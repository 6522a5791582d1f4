//! Geladenes Kartenbild für die Capture-Oberfläche.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Dekodiertes Kartenbild.
#[derive(Debug, Clone)]
pub struct MapImage {
    pub image_data: RgbaImage,
}

impl MapImage {
    /// Lädt ein Kartenbild von der Platte und dekodiert es nach RGBA.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let image_data = image::open(path)
            .with_context(|| format!("Kartenbild konnte nicht geladen werden: {:?}", path))?
            .to_rgba8();

        log::info!(
            "Kartenbild geladen: {:?} ({}x{})",
            path,
            image_data.width(),
            image_data.height()
        );

        Ok(Self { image_data })
    }
}
