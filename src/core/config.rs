//! Display configuration.
//!
//! The tracker itself has no settings storage; the hosting application owns
//! user preferences and passes a `TrackerConfig` into the derivation calls
//! whose output they shape. Event handlers ignore everything here except
//! `verbose`, which selects the diagnostic trace level.

use serde::{Deserialize, Serialize};

/// Boolean display-policy flags consumed by the card-list derivations.
///
/// ## Example
///
/// ```
/// use deck_tracker::core::TrackerConfig;
///
/// let config = TrackerConfig::new()
///     .show_player_get(true)
///     .remove_cards_from_deck(true);
///
/// assert!(config.show_player_get);
/// assert!(!config.highlight_cards_in_hand);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Include cards the player received mid-game in their card list.
    pub show_player_get: bool,

    /// Drop cards from the list once they have left the deck, instead of
    /// keeping them visible with a zero-style marker.
    pub remove_cards_from_deck: bool,

    /// When departed cards are dropped, re-add deck cards currently visible
    /// in hand as highlighted entries.
    pub highlight_cards_in_hand: bool,

    /// Style departed cards that were discarded rather than drawn/played.
    pub highlight_discarded: bool,

    /// Include opponent cards that were created in their deck or hand.
    pub show_opponent_created: bool,

    /// Emit full entity records in handler diagnostics.
    pub verbose: bool,
}

impl TrackerConfig {
    /// Create a config with every flag off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `show_player_get` (builder).
    #[must_use]
    pub fn show_player_get(mut self, value: bool) -> Self {
        self.show_player_get = value;
        self
    }

    /// Set `remove_cards_from_deck` (builder).
    #[must_use]
    pub fn remove_cards_from_deck(mut self, value: bool) -> Self {
        self.remove_cards_from_deck = value;
        self
    }

    /// Set `highlight_cards_in_hand` (builder).
    #[must_use]
    pub fn highlight_cards_in_hand(mut self, value: bool) -> Self {
        self.highlight_cards_in_hand = value;
        self
    }

    /// Set `highlight_discarded` (builder).
    #[must_use]
    pub fn highlight_discarded(mut self, value: bool) -> Self {
        self.highlight_discarded = value;
        self
    }

    /// Set `show_opponent_created` (builder).
    #[must_use]
    pub fn show_opponent_created(mut self, value: bool) -> Self {
        self.show_opponent_created = value;
        self
    }

    /// Set `verbose` (builder).
    #[must_use]
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_all_off() {
        let config = TrackerConfig::default();
        assert!(!config.show_player_get);
        assert!(!config.remove_cards_from_deck);
        assert!(!config.highlight_cards_in_hand);
        assert!(!config.highlight_discarded);
        assert!(!config.show_opponent_created);
        assert!(!config.verbose);
    }

    #[test]
    fn test_builder() {
        let config = TrackerConfig::new()
            .highlight_cards_in_hand(true)
            .highlight_discarded(true);
        assert!(config.highlight_cards_in_hand);
        assert!(config.highlight_discarded);
        assert!(!config.remove_cards_from_deck);
    }
}
