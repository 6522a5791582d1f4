//! Indizierter Zugriff auf Agenten- und Karten-Kataloge.

use indexmap::IndexMap;

use crate::core::agent::Agent;
use crate::core::game_map::GameMap;

/// Einmal beim Laden der Kataloge aufgebauter Index (UUID -> Datensatz).
///
/// Die Einfügereihenfolge bleibt erhalten, damit Auswahl-Listen
/// deterministisch in Katalog-Reihenfolge rendern.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    agents: IndexMap<String, Agent>,
    maps: IndexMap<String, GameMap>,
}

impl Catalog {
    /// Baut den Index aus den geladenen Collections.
    pub fn from_collections(agents: Vec<Agent>, maps: Vec<GameMap>) -> Self {
        let agents = agents
            .into_iter()
            .map(|a| (a.uuid.clone(), a))
            .collect::<IndexMap<_, _>>();
        let maps = maps
            .into_iter()
            .map(|m| (m.uuid.clone(), m))
            .collect::<IndexMap<_, _>>();

        log::info!(
            "Katalog aufgebaut: {} Agenten, {} Karten",
            agents.len(),
            maps.len()
        );

        Self { agents, maps }
    }

    /// Agent per UUID, O(1).
    pub fn agent(&self, uuid: &str) -> Option<&Agent> {
        self.agents.get(uuid)
    }

    /// Karte per UUID, O(1).
    pub fn game_map(&self, uuid: &str) -> Option<&GameMap> {
        self.maps.get(uuid)
    }

    /// Alle Agenten in Katalog-Reihenfolge.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// Alle Karten in Katalog-Reihenfolge.
    pub fn maps(&self) -> impl Iterator<Item = &GameMap> {
        self.maps.values()
    }

    /// True, sobald beide Kataloge Einträge haben.
    pub fn is_loaded(&self) -> bool {
        !self.agents.is_empty() && !self.maps.is_empty()
    }
}
