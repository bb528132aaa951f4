//! Pull-based card-list derivations.
//!
//! Every operation here is a pure snapshot: it reads the entity corpus and
//! the tracker's prediction list, filters and groups observations, resolves
//! groups through the catalog (silently dropping unknown ids), and returns
//! a fresh list. Nothing is cached and nothing is mutated - calling a
//! derivation twice without an intervening event yields identical output.
//!
//! The corpus is handed in explicitly (together with the catalog and, where
//! needed, decklist and config) so each derivation is testable against
//! synthetic inputs.

use crate::catalog::Catalog;
use crate::core::{CardEntity, EntityArena};
use crate::tracker::entry::CardEntry;
use crate::tracker::key::{group_by_key, GroupKey};
use crate::tracker::player::PlayerTracker;

impl PlayerTracker {
    /// Display key for one observation.
    ///
    /// `hidden` means "not visible on a public zone" (in hand or in deck),
    /// and a card stolen from the other side counts as created for display,
    /// since it did not come from this player's decklist.
    pub(super) fn display_key(&self, entity: &CardEntity) -> Option<GroupKey> {
        let card_id = entity.card_id?;
        Some(GroupKey {
            card_id,
            hidden: entity.is_in_hand() || entity.is_in_deck(),
            created: entity.created
                || (entity.is_stolen() && entity.original_controller != self.id),
            discarded: entity.discarded,
            stolen: entity.is_stolen(),
            in_hand: entity.is_in_hand(),
        })
    }

    /// Resolve display-keyed groups into counted entries.
    pub(super) fn entries_from_groups<'a>(
        &self,
        groups: Vec<(GroupKey, Vec<&'a CardEntity>)>,
        catalog: &dyn Catalog,
    ) -> Vec<CardEntry> {
        groups
            .into_iter()
            .filter_map(|(key, members)| {
                let info = catalog.lookup(key.card_id)?;
                let mut entry = CardEntry::from_info(info);
                entry.count = members.len() as u32;
                entry.jousted = key.hidden;
                entry.created = key.created;
                entry.discarded = key.discarded;
                Some(entry)
            })
            .collect()
    }

    /// Revealed cards for display.
    ///
    /// Non-created minions, spells, and weapons that have left the deck,
    /// plus in-deck cards this player originally owned but lost to a steal.
    pub fn revealed_cards(&self, entities: &EntityArena, catalog: &dyn Catalog) -> Vec<CardEntry> {
        let groups = group_by_key(
            entities.iter().filter(|e| {
                !e.created
                    && e.is_playable_card()
                    && (!e.is_in_deck() || (e.is_stolen() && e.original_controller == self.id))
            }),
            |e| self.display_key(e),
        );
        self.entries_from_groups(groups, catalog)
    }

    /// Revealed cards strictly outside the deck.
    ///
    /// The count behind hand/board/graveyard display. Unlike
    /// [`revealed_cards`](Self::revealed_cards) this never includes in-deck
    /// observations, and stolen cards only count when this player
    /// originally owned them.
    pub fn out_of_deck_cards(
        &self,
        entities: &EntityArena,
        catalog: &dyn Catalog,
    ) -> Vec<CardEntry> {
        let groups = group_by_key(
            entities.iter().filter(|e| {
                !e.created
                    && e.is_playable_card()
                    && !e.is_in_deck()
                    && (!e.is_stolen() || e.original_controller == self.id)
            }),
            |e| self.display_key(e),
        );
        self.entries_from_groups(groups, catalog)
    }

    /// Cards known to currently sit in this side's deck.
    pub fn known_cards_in_deck(
        &self,
        entities: &EntityArena,
        catalog: &dyn Catalog,
    ) -> Vec<CardEntry> {
        let id = self.id;
        let groups = group_by_key(
            entities
                .iter()
                .filter(move |e| e.is_in_deck() && e.is_controlled_by(id)),
            |e| {
                let mut key = GroupKey::of_card(e.card_id?);
                key.created = e.created || e.is_stolen();
                Some(key)
            },
        );
        groups
            .into_iter()
            .filter_map(|(key, members)| {
                let info = catalog.lookup(key.card_id)?;
                let mut entry = CardEntry::from_info(info);
                entry.count = members.len() as u32;
                entry.jousted = true;
                entry.created = key.created;
                Some(entry)
            })
            .collect()
    }

    /// Cards predicted (via partial reveals) to sit in the deck.
    ///
    /// One entry per prediction, deliberately without dedup across
    /// identical card ids: the prediction list itself tolerates duplicates.
    pub fn predicted_cards_in_deck(&self, catalog: &dyn Catalog) -> Vec<CardEntry> {
        self.predictions()
            .iter()
            .filter_map(|p| {
                let info = catalog.lookup(p.card_id)?;
                let mut entry = CardEntry::from_info(info);
                entry.jousted = true;
                Some(entry)
            })
            .collect()
    }

    /// Created or stolen cards currently in this side's hand.
    ///
    /// Grouped solely by card id - flag differences between copies do not
    /// split the count for the hand highlight.
    pub fn created_cards_in_hand(
        &self,
        entities: &EntityArena,
        catalog: &dyn Catalog,
    ) -> Vec<CardEntry> {
        let id = self.id;
        let groups = group_by_key(
            entities.iter().filter(move |e| {
                e.is_in_hand() && e.is_controlled_by(id) && (e.created || e.is_stolen())
            }),
            |e| e.card_id.map(GroupKey::of_card),
        );
        groups
            .into_iter()
            .filter_map(|(key, members)| {
                let info = catalog.lookup(key.card_id)?;
                let mut entry = CardEntry::from_info(info);
                entry.count = members.len() as u32;
                entry.created = true;
                entry.highlight_in_hand = true;
                Some(entry)
            })
            .collect()
    }
}
