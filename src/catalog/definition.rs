//! Card definitions - static display data.
//!
//! `CardInfo` holds the unchanging, catalog-side properties of a card:
//! name, cost, type. Per-match state lives on
//! [`CardEntity`](crate::core::CardEntity); counted display output lives on
//! [`CardEntry`](crate::tracker::CardEntry).

use serde::{Deserialize, Serialize};

use crate::core::CardType;

/// Unique identifier for a card definition.
///
/// Identifies the catalog entry ("the card"), not a specific entity in a
/// match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static display data for one card.
///
/// ## Example
///
/// ```
/// use deck_tracker::catalog::{CardId, CardInfo};
/// use deck_tracker::core::CardType;
///
/// let bolt = CardInfo::new(CardId::new(1), "Arcane Bolt", 2, CardType::Spell);
/// assert_eq!(bolt.cost, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Catalog identifier.
    pub id: CardId,

    /// Card name for display.
    pub name: String,

    /// Mana cost for display sorting.
    pub cost: u32,

    /// Card type.
    pub card_type: CardType,
}

impl CardInfo {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, cost: u32, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            card_type,
        }
    }
}
