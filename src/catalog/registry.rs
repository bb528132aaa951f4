//! Card catalog lookup.
//!
//! The derivations resolve card ids through the [`Catalog`] trait. Lookup
//! is fallible by design: an unknown id silently drops the affected group
//! from the output list, it is never an error.

use rustc_hash::FxHashMap;

use super::definition::{CardId, CardInfo};
use crate::core::CardType;

/// Fallible card lookup capability.
///
/// Injected into every derivation so they can be tested against synthetic
/// catalogs.
pub trait Catalog {
    /// Look up a card definition. `None` for unknown ids.
    fn lookup(&self, id: CardId) -> Option<&CardInfo>;
}

/// In-memory catalog of card definitions.
///
/// ## Example
///
/// ```
/// use deck_tracker::catalog::{Catalog, CardCatalog, CardId, CardInfo};
/// use deck_tracker::core::CardType;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardInfo::new(CardId::new(1), "Arcane Bolt", 2, CardType::Spell));
///
/// assert!(catalog.lookup(CardId::new(1)).is_some());
/// assert!(catalog.lookup(CardId::new(99)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardInfo>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition, replacing any previous entry for the id.
    pub fn register(&mut self, card: CardInfo) {
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned id. Returns the assigned id.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        cost: u32,
        card_type: CardType,
    ) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        self.register(CardInfo::new(id, name, cost, card_type));
        id
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the catalog empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardInfo> {
        self.cards.values()
    }
}

impl Catalog for CardCatalog {
    fn lookup(&self, id: CardId) -> Option<&CardInfo> {
        self.cards.get(&id)
    }
}
