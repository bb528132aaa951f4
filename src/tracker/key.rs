//! Equivalence keys and observation grouping.
//!
//! Multiple physical entities with identical display-relevant state must
//! collapse into one counted card entry. The key is an explicit composite
//! value with structural equality - two observations are display-equivalent
//! iff their keys are equal. Raw entity ids are deliberately absent from
//! the key.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::CardId;
use crate::core::CardEntity;

/// Display-equivalence key for one card observation.
///
/// Each derivation decides how to fill the flag fields (e.g. `hidden` may
/// mean "in hand or in deck" rather than the raw annotation); the key only
/// provides the grouping identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub card_id: CardId,
    pub hidden: bool,
    pub created: bool,
    pub discarded: bool,
    pub stolen: bool,
    pub in_hand: bool,
}

impl GroupKey {
    /// Key with every flag clear - the "group solely by card id" case.
    #[must_use]
    pub fn of_card(card_id: CardId) -> Self {
        Self {
            card_id,
            hidden: false,
            created: false,
            discarded: false,
            stolen: false,
            in_hand: false,
        }
    }
}

/// Partition observations into groups sharing an equivalence key.
///
/// `key_of` builds the key for one entity; returning `None` (typically for
/// entities without a known card id) skips the entity. Groups come back in
/// first-seen order of each key's first occurrence, with the original
/// members preserved per group so callers can recover representative
/// entities.
///
/// ## Example
///
/// ```
/// use deck_tracker::core::{CardEntity, EntityId};
/// use deck_tracker::catalog::CardId;
/// use deck_tracker::tracker::{group_by_key, GroupKey};
///
/// let a = CardEntity::new(EntityId::new(4)).with_card(CardId::new(1));
/// let b = CardEntity::new(EntityId::new(5)).with_card(CardId::new(1));
/// let groups = group_by_key([&a, &b], |e| e.card_id.map(GroupKey::of_card));
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].1.len(), 2);
/// ```
pub fn group_by_key<'a, I, F>(entities: I, key_of: F) -> Vec<(GroupKey, Vec<&'a CardEntity>)>
where
    I: IntoIterator<Item = &'a CardEntity>,
    F: Fn(&CardEntity) -> Option<GroupKey>,
{
    let mut index: FxHashMap<GroupKey, usize> = FxHashMap::default();
    let mut groups: Vec<(GroupKey, Vec<&'a CardEntity>)> = Vec::new();

    for entity in entities {
        let Some(key) = key_of(entity) else { continue };
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(entity),
            None => {
                index.insert(key, groups.len());
                groups.push((key, vec![entity]));
            }
        }
    }

    groups
}
