//! Entity arena - the per-match corpus of card entity records.
//!
//! The arena is owned by the game context, not by the tracker. During event
//! handling the tracker is handed `&mut CardEntity` references into it;
//! during derivations it reads the whole corpus through `&EntityArena`.
//! The contract is single-writer: no mutation may interleave with a
//! derivation call.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::entity::{CardEntity, EntityId};
use super::player::PlayerId;

/// Arena of entity records addressed by stable entity ids.
///
/// ## Example
///
/// ```
/// use deck_tracker::core::{CardEntity, EntityArena, EntityId, PlayerId, Zone};
///
/// let mut arena = EntityArena::new();
/// arena.insert(CardEntity::new(EntityId::new(4)).in_zone(Zone::Hand).controlled_by(PlayerId::new(1)));
///
/// assert_eq!(arena.len(), 1);
/// assert_eq!(arena.controlled_by(PlayerId::new(1)).count(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EntityArena {
    entities: FxHashMap<EntityId, CardEntity>,
}

impl EntityArena {
    /// Create a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, keyed by its entity id.
    pub fn insert(&mut self, entity: CardEntity) {
        self.entities.insert(entity.id, entity);
    }

    /// Get a record by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&CardEntity> {
        self.entities.get(&id)
    }

    /// Get a mutable record by id.
    ///
    /// This is the reference handed to the tracker's event handlers.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut CardEntity> {
        self.entities.get_mut(&id)
    }

    /// Get a mutable record by id, creating an empty one if absent.
    pub fn get_or_insert(&mut self, id: EntityId) -> &mut CardEntity {
        self.entities.entry(id).or_insert_with(|| CardEntity::new(id))
    }

    /// Remove a record.
    pub fn remove(&mut self, id: EntityId) -> Option<CardEntity> {
        self.entities.remove(&id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Is the arena empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all records.
    pub fn iter(&self) -> impl Iterator<Item = &CardEntity> {
        self.entities.values()
    }

    /// Iterate over records currently controlled by `player`.
    pub fn controlled_by(&self, player: PlayerId) -> impl Iterator<Item = &CardEntity> {
        self.entities
            .values()
            .filter(move |e| e.is_controlled_by(player))
    }
}

impl FromIterator<CardEntity> for EntityArena {
    fn from_iter<I: IntoIterator<Item = CardEntity>>(iter: I) -> Self {
        let mut arena = Self::new();
        for entity in iter {
            arena.insert(entity);
        }
        arena
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Zone;

    #[test]
    fn test_insert_and_get() {
        let mut arena = EntityArena::new();
        arena.insert(CardEntity::new(EntityId::new(4)).in_zone(Zone::Deck));

        assert_eq!(arena.len(), 1);
        assert!(arena.get(EntityId::new(4)).is_some());
        assert!(arena.get(EntityId::new(5)).is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut arena = EntityArena::new();
        arena.insert(CardEntity::new(EntityId::new(4)).in_zone(Zone::Deck));
        arena.insert(CardEntity::new(EntityId::new(4)).in_zone(Zone::Hand));

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(EntityId::new(4)).unwrap().zone, Zone::Hand);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut arena = EntityArena::new();
        arena.insert(CardEntity::new(EntityId::new(4)));

        arena.get_mut(EntityId::new(4)).unwrap().turn = 3;
        assert_eq!(arena.get(EntityId::new(4)).unwrap().turn, 3);
    }

    #[test]
    fn test_get_or_insert() {
        let mut arena = EntityArena::new();
        arena.get_or_insert(EntityId::new(7)).turn = 2;

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(EntityId::new(7)).unwrap().turn, 2);
    }

    #[test]
    fn test_controlled_by_filter() {
        let arena: EntityArena = [
            CardEntity::new(EntityId::new(4)).controlled_by(PlayerId::new(1)),
            CardEntity::new(EntityId::new(5)).controlled_by(PlayerId::new(2)),
            CardEntity::new(EntityId::new(6)).controlled_by(PlayerId::new(1)),
        ]
        .into_iter()
        .collect();

        assert_eq!(arena.controlled_by(PlayerId::new(1)).count(), 2);
        assert_eq!(arena.controlled_by(PlayerId::new(2)).count(), 1);
    }
}
