//! Datensätze und Wire-Payloads für Fixed Points (Lineups).

use serde::{Deserialize, Serialize};

/// Ein persistierter Schritt eines Fixed Points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedPointStep {
    pub id: u64,
    pub fixed_point_id: u64,
    pub step_order: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position_x: Option<f32>,
    #[serde(default)]
    pub position_y: Option<f32>,
    #[serde(default)]
    pub skill_position_x: Option<f32>,
    #[serde(default)]
    pub skill_position_y: Option<f32>,
    #[serde(default)]
    pub created_at: String,
}

/// Ein persistierter Fixed Point samt seiner Schritte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedPoint {
    pub id: u64,
    pub title: String,
    pub character_id: String,
    pub map_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub steps: Vec<FixedPointStep>,
}

/// Schritt-Payload für das Anlegen. Optionale Felder werden beim
/// Serialisieren weggelassen statt als null übertragen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStepPayload {
    pub step_order: u32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_position_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_position_y: Option<f32>,
}

impl CreateStepPayload {
    /// Payload ohne Bild und ohne Positionen.
    pub fn new(step_order: u32, description: String) -> Self {
        Self {
            step_order,
            description,
            image_url: None,
            position_x: None,
            position_y: None,
            skill_position_x: None,
            skill_position_y: None,
        }
    }
}

/// Gesamter Anlage-Payload eines Fixed Points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFixedPointRequest {
    pub title: String,
    pub character_id: String,
    pub map_id: String,
    pub steps: Vec<CreateStepPayload>,
}
