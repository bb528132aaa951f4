//! Deck-state reconciliation.
//!
//! The one place where a complete, authoritative decklist is cross-checked
//! against observed departures. The decklist is expanded into one slot per
//! copy; every revealed entity that no longer counts as a deck resident
//! consumes one matching slot; whatever survives is "remaining", the
//! consumed slots are "removed". Created and stolen cards sitting in the
//! deck are reported alongside the remaining originals since the deck
//! physically contains them.
//!
//! The result is recomputed in full on every call - never cached, never
//! mutated by the caller.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, Catalog};
use crate::core::{CardEntity, EntityArena};
use crate::deck::Decklist;
use crate::tracker::entry::CardEntry;
use crate::tracker::key::{group_by_key, GroupKey};
use crate::tracker::player::PlayerTracker;

/// Reconciled deck view: what is still in the deck, what has left it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    /// Cards still counted as deck residents (created/stolen in-deck cards
    /// first, then the surviving original copies).
    pub remaining: Vec<CardEntry>,

    /// Original copies that have observably left the deck.
    pub removed: Vec<CardEntry>,
}

/// Count card ids in first-seen order.
fn group_counts(ids: impl IntoIterator<Item = CardId>) -> Vec<(CardId, u32)> {
    let mut order: Vec<(CardId, u32)> = Vec::new();
    for id in ids {
        match order.iter_mut().find(|(c, _)| *c == id) {
            Some((_, count)) => *count += 1,
            None => order.push((id, 1)),
        }
    }
    order
}

impl PlayerTracker {
    /// A revealed entity that no longer counts as a resident of this
    /// player's original deck: known, not created, playable, originally
    /// this player's, and either out of the deck or stolen out of this
    /// player's control.
    fn is_revealed_departure(&self, entity: &CardEntity) -> bool {
        !entity.created
            && entity.has_card_id()
            && entity.is_playable_card()
            && (!entity.is_in_deck() || entity.is_stolen())
            && entity.original_controller == self.id
    }

    /// Reconcile the authoritative decklist against observed departures.
    pub fn deck_state(
        &self,
        entities: &EntityArena,
        decklist: &Decklist,
        catalog: &dyn Catalog,
    ) -> DeckState {
        let id = self.id;
        let hand_ids: FxHashSet<CardId> = entities
            .iter()
            .filter(|e| e.is_in_hand() && e.is_controlled_by(id))
            .filter_map(|e| e.card_id)
            .collect();

        // Created/stolen cards physically in the deck right now.
        let created_groups = group_by_key(
            entities.iter().filter(move |e| {
                e.is_in_deck() && e.is_controlled_by(id) && (e.created || e.is_stolen())
            }),
            |e| {
                let mut key = GroupKey::of_card(e.card_id?);
                key.created = e.created || e.is_stolen();
                Some(key)
            },
        );
        let mut remaining: Vec<CardEntry> = created_groups
            .into_iter()
            .filter_map(|(key, members)| {
                let info = catalog.lookup(key.card_id)?;
                let mut entry = CardEntry::from_info(info);
                entry.count = members.len() as u32;
                entry.created = key.created;
                entry.highlight_in_hand = hand_ids.contains(&key.card_id);
                Some(entry)
            })
            .collect();

        // What should be in the deck if nothing had left it: one slot per
        // decklist copy.
        let mut original: Vec<CardId> = decklist.expand_copies();

        // Each observed departure consumes one matching slot.
        let mut removed_ids: Vec<(CardId, bool)> = Vec::new();
        for entity in entities.iter().filter(|e| self.is_revealed_departure(e)) {
            let Some(card_id) = entity.card_id else { continue };
            if let Some(pos) = original.iter().position(|&slot| slot == card_id) {
                original.remove(pos);
            }
            if !entity.is_stolen() || entity.original_controller == id {
                removed_ids.push((card_id, entity.discarded));
            }
        }

        for (card_id, count) in group_counts(original) {
            let Some(info) = catalog.lookup(card_id) else { continue };
            let mut entry = CardEntry::from_info(info);
            entry.count = count;
            entry.highlight_in_hand = hand_ids.contains(&card_id);
            remaining.push(entry);
        }

        let mut removed: Vec<CardEntry> = Vec::new();
        for (card_id, count) in group_counts(removed_ids.iter().map(|(id, _)| *id)) {
            let Some(info) = catalog.lookup(card_id) else { continue };
            let mut entry = CardEntry::from_info(info);
            entry.count = count;
            entry.discarded = removed_ids
                .iter()
                .any(|&(id, discarded)| id == card_id && discarded);
            entry.highlight_in_hand = hand_ids.contains(&card_id);
            removed.push(entry);
        }

        DeckState { remaining, removed }
    }
}
