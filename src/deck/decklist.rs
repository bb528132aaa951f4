//! Authoritative decklists.
//!
//! A `Decklist` is the known original composition of a deck, supplied by
//! the game context when available (typically the local player's own saved
//! deck). The reconciliation derivation diffs it against observed
//! departures; for a side with no known decklist there is simply no
//! `Decklist` to pass.

use serde::{Deserialize, Serialize};

use crate::catalog::CardId;

/// One decklist line: a card and how many copies the deck started with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecklistEntry {
    pub card_id: CardId,
    pub count: u32,
}

/// Ordered list of (card id, copy count) pairs.
///
/// ## Example
///
/// ```
/// use deck_tracker::catalog::CardId;
/// use deck_tracker::deck::Decklist;
///
/// let mut deck = Decklist::new();
/// deck.push(CardId::new(1), 2);
/// deck.push(CardId::new(2), 1);
///
/// assert_eq!(deck.card_count(), 3);
/// assert_eq!(deck.expand_copies().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decklist {
    entries: Vec<DecklistEntry>,
}

impl Decklist {
    /// Create an empty decklist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decklist line.
    pub fn push(&mut self, card_id: CardId, count: u32) {
        self.entries.push(DecklistEntry { card_id, count });
    }

    /// Total number of copies across all lines.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the decklist empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Does the decklist contain at least one copy of `card_id`?
    #[must_use]
    pub fn contains(&self, card_id: CardId) -> bool {
        self.entries
            .iter()
            .any(|e| e.card_id == card_id && e.count > 0)
    }

    /// Iterate over decklist lines in list order.
    pub fn iter(&self) -> impl Iterator<Item = &DecklistEntry> {
        self.entries.iter()
    }

    /// Expand into one `CardId` per copy, preserving list order.
    ///
    /// This is "what should be in the deck if nothing had left it" - the
    /// multiset the reconciliation removes observed departures from.
    #[must_use]
    pub fn expand_copies(&self) -> Vec<CardId> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.card_id).take(e.count as usize))
            .collect()
    }
}

impl FromIterator<(CardId, u32)> for Decklist {
    fn from_iter<I: IntoIterator<Item = (CardId, u32)>>(iter: I) -> Self {
        let mut deck = Self::new();
        for (card_id, count) in iter {
            deck.push(card_id, count);
        }
        deck
    }
}
