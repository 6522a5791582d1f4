//! Agenten-Katalogdaten im Schema des entfernten Dienstes.

use serde::{Deserialize, Serialize};

/// Rolle eines Agenten (Initiator, Controller, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRole {
    pub uuid: String,
    pub display_name: String,
}

/// Ein spielbarer Agent, identifiziert über seine UUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub uuid: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_icon: String,
    #[serde(default)]
    pub role: Option<AgentRole>,
}

impl Agent {
    /// Anzeigename der Rolle, falls vorhanden.
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.display_name.as_str())
    }
}
