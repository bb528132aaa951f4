//! Display card entries.
//!
//! `CardEntry` is what the derivations hand to the display layer: one
//! counted, annotated card per equivalence group, already resolved through
//! the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, CardInfo};

/// One counted card in a display list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Catalog id.
    pub id: CardId,

    /// Card name, from the catalog.
    pub name: String,

    /// Mana cost, from the catalog.
    pub cost: u32,

    /// Number of collapsed observations.
    pub count: u32,

    /// Positionally known in the deck but not otherwise revealed.
    pub jousted: bool,

    /// Did not originate from the starting decklist.
    pub created: bool,

    /// Left the deck or hand without being played.
    pub discarded: bool,

    /// The same card is currently visible in hand.
    pub highlight_in_hand: bool,

    /// Styled as discarded in the rendered list.
    pub highlight_discarded: bool,
}

impl CardEntry {
    /// Create an entry for one copy of a card, all annotations clear.
    #[must_use]
    pub fn from_info(info: &CardInfo) -> Self {
        Self {
            id: info.id,
            name: info.name.clone(),
            cost: info.cost,
            count: 1,
            jousted: false,
            created: false,
            discarded: false,
            highlight_in_hand: false,
            highlight_discarded: false,
        }
    }

    /// Set the count (builder).
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// Standard display ordering: ascending cost, then name.
///
/// Applied by the display layer after a derivation; the derivations
/// themselves only guarantee first-seen group order.
pub fn sort_by_cost_then_name(entries: &mut [CardEntry]) {
    entries.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.name.cmp(&b.name)));
}
