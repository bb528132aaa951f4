//! # deck-tracker
//!
//! A card game match-state tracker: reconstructs best-effort knowledge of a
//! player's card collection from the incomplete zone-transition events an
//! ongoing match reveals.
//!
//! ## Design Principles
//!
//! 1. **Observation, not simulation**: the tracker never advances game
//!    state. It annotates entity records as transitions are reported and
//!    derives display lists from whatever has been revealed so far.
//!
//! 2. **Total operations**: event handlers accept malformed input as-is and
//!    derivations are pure functions of current state. Nothing here fails
//!    in a way a caller must handle; unknown catalog ids silently drop out.
//!
//! 3. **Explicit collaborators**: the entity corpus, catalog, decklist, and
//!    display flags are passed into every derivation call, so each one is
//!    testable in isolation with synthetic inputs.
//!
//! ## Architecture
//!
//! - **Event handlers** mutate annotation flags on entity records handed in
//!   by the event source, one call per zone/visibility transition.
//!
//! - **Derivations** are pull-based snapshots: filter the corpus, group
//!   display-equivalent observations, resolve through the catalog, count.
//!
//! - **Reconciliation** diffs a known decklist against observed departures
//!   to answer "what is still in this deck".
//!
//! ## Modules
//!
//! - `core`: entity records, the entity arena, players, zones, config
//! - `catalog`: static card definitions and the lookup seam
//! - `deck`: authoritative decklist input
//! - `tracker`: the aggregator - handlers, grouping, derivations, policy

pub mod catalog;
pub mod core;
pub mod deck;
pub mod tracker;

// Re-export commonly used types
pub use crate::core::{
    CardEntity, CardOrigin, CardType, EntityArena, EntityId, PlayerId, TrackerConfig, Zone,
    GAME_ENTITY,
};

pub use crate::catalog::{CardCatalog, CardId, CardInfo, Catalog};

pub use crate::deck::{Decklist, DecklistEntry};

pub use crate::tracker::{
    group_by_key, sort_by_cost_then_name, CardEntry, DeckState, GroupKey, PlayerTracker,
    PredictedCard, PredictionList,
};
