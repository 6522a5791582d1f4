//! Karten-Katalogdaten im Schema des entfernten Dienstes.

use serde::{Deserialize, Serialize};

/// Eine Spielkarte, identifiziert über ihre UUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    pub uuid: String,
    pub display_name: String,
    #[serde(default)]
    pub coordinates: String,
    #[serde(default)]
    pub display_icon: String,
    #[serde(default)]
    pub splash: String,
}
