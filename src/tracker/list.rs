//! Card-list selection policy.
//!
//! Composes the individual derivations into the single "current card list
//! to display" for a side, branching purely on the display-policy flags
//! and on whether an authoritative decklist is known. Evaluated fresh on
//! every request.

use crate::catalog::Catalog;
use crate::core::{CardOrigin, EntityArena, TrackerConfig};
use crate::deck::Decklist;
use crate::tracker::entry::CardEntry;
use crate::tracker::key::group_by_key;
use crate::tracker::player::PlayerTracker;

impl PlayerTracker {
    /// Card list for a limited-information opponent.
    ///
    /// Keeps everything revealed that plausibly tells the user something:
    /// cards the game manufactured for the opponent, cards that originated
    /// with the opponent (created ones only when configured and created via
    /// deck or hand), and whatever currently sits in their hand or deck.
    /// Created cards parked in set-aside are transient effect residue and
    /// stay out. Predicted cards are appended as-is.
    pub fn opponent_card_list(
        &self,
        entities: &EntityArena,
        catalog: &dyn Catalog,
        config: &TrackerConfig,
    ) -> Vec<CardEntry> {
        let groups = group_by_key(
            entities.iter().filter(|e| {
                if e.created && e.is_in_set_aside() {
                    return false;
                }
                if !e.has_card_id() || !e.is_playable_card() {
                    return false;
                }
                if e.is_game_created() {
                    return true;
                }
                let created_shown = !e.created
                    || (config.show_opponent_created
                        && matches!(e.origin, CardOrigin::Deck | CardOrigin::Hand));
                if created_shown && e.original_controller == self.id {
                    return true;
                }
                e.is_in_hand() || e.is_in_deck()
            }),
            |e| self.display_key(e),
        );
        let mut list = self.entries_from_groups(groups, catalog);
        list.extend(self.predicted_cards_in_deck(catalog));
        list
    }

    /// The current card list to display for this side.
    ///
    /// Without an authoritative decklist the list is assembled from
    /// revealed, known-in-deck, and predicted cards; with one, from the
    /// reconciled deck state, with departed cards kept, dropped, or
    /// replaced by hand highlights per the display flags.
    pub fn player_card_list(
        &self,
        entities: &EntityArena,
        decklist: Option<&Decklist>,
        catalog: &dyn Catalog,
        config: &TrackerConfig,
    ) -> Vec<CardEntry> {
        let created_in_hand = if config.show_player_get {
            self.created_cards_in_hand(entities, catalog)
        } else {
            Vec::new()
        };

        let Some(decklist) = decklist else {
            let mut list = self.revealed_cards(entities, catalog);
            list.extend(created_in_hand);
            list.extend(self.known_cards_in_deck(entities, catalog));
            list.extend(self.predicted_cards_in_deck(catalog));
            return list;
        };

        let state = self.deck_state(entities, decklist, catalog);
        let mut list = state.remaining;

        if !config.remove_cards_from_deck {
            let mut departed: Vec<CardEntry> = state
                .removed
                .into_iter()
                .filter(|removed| list.iter().all(|kept| kept.id != removed.id))
                .collect();
            for entry in &mut departed {
                entry.highlight_discarded = config.highlight_discarded && entry.discarded;
            }
            list.extend(departed);
        } else if config.highlight_cards_in_hand {
            let highlighted = self.highlighted_cards_in_hand(entities, &list, decklist, catalog);
            list.extend(highlighted);
        }

        list.extend(created_in_hand);
        list
    }

    /// Decklist cards that are gone from the remaining-in-deck list but
    /// visible in this side's hand, as zero-count highlighted entries.
    fn highlighted_cards_in_hand(
        &self,
        entities: &EntityArena,
        in_deck: &[CardEntry],
        decklist: &Decklist,
        catalog: &dyn Catalog,
    ) -> Vec<CardEntry> {
        let id = self.id;
        decklist
            .iter()
            .filter(|line| in_deck.iter().all(|entry| entry.id != line.card_id))
            .filter(|line| {
                entities
                    .iter()
                    .any(|e| e.is_in_hand() && e.is_controlled_by(id) && e.card_id == Some(line.card_id))
            })
            .filter_map(|line| {
                let info = catalog.lookup(line.card_id)?;
                let mut entry = CardEntry::from_info(info);
                entry.count = 0;
                entry.highlight_in_hand = true;
                Some(entry)
            })
            .collect()
    }
}
