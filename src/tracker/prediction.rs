//! Deck-location predictions from partial reveals.
//!
//! A joust-like effect reveals a card's identity without moving it, which
//! tells us the card resides in the deck as of that turn. Predictions are
//! best-effort: a later corroborating transition (draw, play, discard)
//! resolves them, and ones that never corroborate simply stay visible as
//! "predicted" entries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::CardId;

/// One "this card is believed to be in the deck as of this turn" record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedCard {
    pub card_id: CardId,
    pub turn: u32,
}

impl PredictedCard {
    /// Create a new prediction.
    #[must_use]
    pub const fn new(card_id: CardId, turn: u32) -> Self {
        Self { card_id, turn }
    }
}

/// Ordered collection of outstanding predictions.
///
/// Not enforced as a set: duplicates for one card id are tolerated and
/// resolved independently, one per resolution call. When several
/// predictions share a card id at different turns, `resolve` removes the
/// first record whose turn is at or before the resolving turn, which can
/// pick the wrong occurrence - an accepted approximation under incomplete
/// information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionList {
    predictions: SmallVec<[PredictedCard; 4]>,
}

impl PredictionList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `card_id` is believed to be in the deck as of `turn`.
    ///
    /// If a prediction for the same card id already exists its turn is
    /// bumped; otherwise a new record is appended.
    pub fn upsert(&mut self, card_id: CardId, turn: u32) {
        match self.predictions.iter_mut().find(|p| p.card_id == card_id) {
            Some(existing) => existing.turn = turn,
            None => self.predictions.push(PredictedCard::new(card_id, turn)),
        }
    }

    /// Resolve a prediction for `card_id` corroborated at `turn`.
    ///
    /// Removes and returns the first record with a matching card id whose
    /// recorded turn is at or before `turn`; `None` (and no removal) if
    /// nothing matches. At most one record is removed per call.
    pub fn resolve(&mut self, card_id: CardId, turn: u32) -> Option<PredictedCard> {
        let pos = self
            .predictions
            .iter()
            .position(|p| p.card_id == card_id && turn >= p.turn)?;
        Some(self.predictions.remove(pos))
    }

    /// Resolve a prediction for `card_id` regardless of its recorded turn.
    pub fn resolve_any_turn(&mut self, card_id: CardId) -> Option<PredictedCard> {
        self.resolve(card_id, u32::MAX)
    }

    /// Outstanding predictions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PredictedCard> {
        self.predictions.iter()
    }

    /// Number of outstanding predictions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Is the list empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Drop all predictions.
    pub fn clear(&mut self) {
        self.predictions.clear();
    }
}
