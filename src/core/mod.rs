//! Reine Datenstrukturen und Koordinaten-Logik ohne UI-Abhängigkeiten.

pub mod agent;
pub mod asset_url;
pub mod catalog;
pub mod fixed_point;
pub mod game_map;
pub mod map_image;
pub mod point;

pub use agent::{Agent, AgentRole};
pub use asset_url::resolve_asset_url;
pub use catalog::Catalog;
pub use fixed_point::{CreateFixedPointRequest, CreateStepPayload, FixedPoint, FixedPointStep};
pub use game_map::GameMap;
pub use map_image::MapImage;
pub use point::{to_normalized, NormalizedPoint, PointKind, SurfaceRect};
