//! The card-state aggregator.
//!
//! ## Key Types
//!
//! - `PlayerTracker`: per-side event handlers, counters, predictions
//! - `GroupKey` / `group_by_key`: display-equivalence grouping
//! - `PredictedCard` / `PredictionList`: partial-reveal deck predictions
//! - `CardEntry`: counted, annotated display output
//! - `DeckState`: decklist reconciliation result
//!
//! Event handlers live in `player`; the pure derivations are split across
//! `derive` (single views), `reconcile` (decklist diffing), and `list`
//! (display selection policy).

pub mod derive;
pub mod entry;
pub mod key;
pub mod list;
pub mod player;
pub mod prediction;
pub mod reconcile;

pub use entry::{sort_by_cost_then_name, CardEntry};
pub use key::{group_by_key, GroupKey};
pub use player::PlayerTracker;
pub use prediction::{PredictedCard, PredictionList};
pub use reconcile::DeckState;
