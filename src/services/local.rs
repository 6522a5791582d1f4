//! Platten-gestütztes Backend für den Betrieb ohne entfernten Dienst.
//!
//! Kataloge kommen aus `<data_dir>/agents.json` bzw. `maps.json` (mit
//! eingebetteten Standard-Katalogen als Fallback), Uploads landen unter
//! `<data_dir>/uploads/`, angelegte Fixed Points werden an
//! `<data_dir>/fixed_points.json` angehängt.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::{
    Agent, CreateFixedPointRequest, FixedPoint, FixedPointStep, GameMap,
};
use crate::services::FixedPointBackend;

/// Eingebetteter Standard-Agenten-Katalog.
const DEFAULT_AGENTS_JSON: &str = include_str!("../../data/agents.json");
/// Eingebetteter Standard-Karten-Katalog.
const DEFAULT_MAPS_JSON: &str = include_str!("../../data/maps.json");

/// Lokale Backend-Implementierung auf dem Dateisystem.
pub struct LocalBackend {
    data_dir: PathBuf,
    upload_counter: Mutex<u32>,
}

impl LocalBackend {
    /// Erstellt ein Backend über dem angegebenen Datenverzeichnis.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            upload_counter: Mutex::new(0),
        }
    }

    fn records_path(&self) -> PathBuf {
        self.data_dir.join("fixed_points.json")
    }

    /// Liest alle bisher angelegten Fixed Points (leere Liste, wenn
    /// noch keine Datei existiert).
    fn load_records(&self) -> Result<Vec<FixedPoint>> {
        let path = self.records_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Fixed-Points-Datei nicht lesbar: {:?}", path))?;
        let records = serde_json::from_str(&content)
            .with_context(|| format!("Fixed-Points-Datei fehlerhaft: {:?}", path))?;
        Ok(records)
    }

    fn save_records(&self, records: &[FixedPoint]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Datenverzeichnis nicht anlegbar: {:?}", self.data_dir))?;
        let content = serde_json::to_string_pretty(records)?;
        fs::write(self.records_path(), content)?;
        Ok(())
    }

    /// Liest einen Katalog aus `<data_dir>/<file_name>`, fällt sonst auf
    /// den eingebetteten Standard zurück.
    fn load_catalog_json(&self, file_name: &str, fallback: &str) -> Result<String> {
        let path = self.data_dir.join(file_name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::info!("Katalog geladen aus: {:?}", path);
                Ok(content)
            }
            Err(_) => {
                log::info!("Kein {:?}, verwende eingebetteten Katalog", path);
                Ok(fallback.to_string())
            }
        }
    }

    /// Entfernt Pfad-Anteile und Sonderzeichen aus Dateinamen.
    fn sanitize_file_name(name: &str) -> String {
        let base = Path::new(name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bild".to_string());

        base.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    fn unix_timestamp() -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().to_string())
            .unwrap_or_default()
    }

    /// Nächster Upload-Index. Beim ersten Upload einer Instanz wird der
    /// Zähler aus den bereits gespeicherten Dateien gesetzt, damit neue
    /// Sitzungen keine alten Uploads überschreiben.
    fn next_upload_index(&self, uploads_dir: &Path) -> Result<u32> {
        let mut guard = self
            .upload_counter
            .lock()
            .map_err(|_| anyhow::anyhow!("Upload-Zähler vergiftet"))?;
        if *guard == 0 {
            *guard = Self::highest_stored_index(uploads_dir);
        }
        *guard += 1;
        Ok(*guard)
    }

    /// Höchster Index-Präfix (`NNNN_…`) unter den gespeicherten Uploads.
    fn highest_stored_index(uploads_dir: &Path) -> u32 {
        let Ok(entries) = fs::read_dir(uploads_dir) else {
            return 0;
        };

        entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                name.split('_').next()?.parse::<u32>().ok()
            })
            .max()
            .unwrap_or(0)
    }
}

impl FixedPointBackend for LocalBackend {
    fn fetch_agents(&self) -> Result<Vec<Agent>> {
        let json = self.load_catalog_json("agents.json", DEFAULT_AGENTS_JSON)?;
        serde_json::from_str(&json).context("Agenten-Katalog fehlerhaft")
    }

    fn fetch_maps(&self) -> Result<Vec<GameMap>> {
        let json = self.load_catalog_json("maps.json", DEFAULT_MAPS_JSON)?;
        serde_json::from_str(&json).context("Karten-Katalog fehlerhaft")
    }

    fn upload_image(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let uploads_dir = self.data_dir.join("uploads");
        fs::create_dir_all(&uploads_dir)
            .with_context(|| format!("Upload-Verzeichnis nicht anlegbar: {:?}", uploads_dir))?;

        let counter = self.next_upload_index(&uploads_dir)?;
        let stored_name = format!("{:04}_{}", counter, Self::sanitize_file_name(file_name));
        let target = uploads_dir.join(&stored_name);
        fs::write(&target, bytes)
            .with_context(|| format!("Upload nicht speicherbar: {:?}", target))?;

        log::info!("Bild hochgeladen: {:?} ({} Bytes)", target, bytes.len());
        Ok(format!("/uploads/{}", stored_name))
    }

    fn create_fixed_point(&self, request: &CreateFixedPointRequest) -> Result<FixedPoint> {
        let mut records = self.load_records()?;
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created_at = Self::unix_timestamp();

        let steps = request
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| FixedPointStep {
                id: id * 100 + i as u64 + 1,
                fixed_point_id: id,
                step_order: step.step_order,
                image_url: step.image_url.clone(),
                description: step.description.clone(),
                position_x: step.position_x,
                position_y: step.position_y,
                skill_position_x: step.skill_position_x,
                skill_position_y: step.skill_position_y,
                created_at: created_at.clone(),
            })
            .collect();

        let record = FixedPoint {
            id,
            title: request.title.clone(),
            character_id: request.character_id.clone(),
            map_id: request.map_id.clone(),
            created_at,
            steps,
        };

        records.push(record.clone());
        self.save_records(&records)?;

        log::info!(
            "Fixed Point #{} angelegt ({} Schritte)",
            record.id,
            record.steps.len()
        );
        Ok(record)
    }
}
