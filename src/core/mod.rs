//! Core types: entity records, the entity arena, players, zones, config.
//!
//! Everything here is input material for the tracker: records and tags are
//! produced upstream (event capture), the tracker only annotates and reads
//! them.

pub mod arena;
pub mod config;
pub mod entity;
pub mod player;
pub mod zone;

pub use arena::EntityArena;
pub use config::TrackerConfig;
pub use entity::{CardEntity, EntityId, GAME_ENTITY};
pub use player::PlayerId;
pub use zone::{CardOrigin, CardType, Zone};
