//! Entity records - per-match card state observations.
//!
//! Every card observed during a match is one `CardEntity`, identified by a
//! stable `EntityId` assigned by the game. The record combines identity
//! (card id, controller), descriptive tags decoded upstream (zone, type,
//! death trigger, creator), and the annotation flags this crate's event
//! handlers write (`created`, `discarded`, `hidden`, `mulliganed`,
//! `returned`, last transition `turn`).
//!
//! ## Ownership
//!
//! Entity records live in the [`EntityArena`](crate::core::EntityArena)
//! owned by the game context. The tracker mutates annotation fields on
//! records it is handed a `&mut` to during event handling; everything else
//! reads by id.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::zone::{CardOrigin, CardType, Zone};
use crate::catalog::CardId;

/// Unique identifier for a game entity.
///
/// Assigned by the game, stable for the lifetime of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// The match-level game entity.
///
/// A card whose `creator` equals this id was manufactured by the game
/// directly for a player rather than by another card, which makes it
/// unconditionally visible in the opponent card list.
pub const GAME_ENTITY: EntityId = EntityId(1);

impl EntityId {
    /// Create a new entity ID.
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

impl Default for EntityId {
    fn default() -> Self {
        Self(0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// A single card entity observed during a match.
///
/// ## Example
///
/// ```
/// use deck_tracker::core::{CardEntity, EntityId, PlayerId, Zone, CardType};
/// use deck_tracker::catalog::CardId;
///
/// let entity = CardEntity::new(EntityId::new(4))
///     .with_card(CardId::new(101))
///     .of_type(CardType::Minion)
///     .in_zone(Zone::Hand)
///     .controlled_by(PlayerId::new(1));
///
/// assert!(entity.is_in_hand());
/// assert!(entity.is_playable_card());
/// assert!(!entity.is_stolen());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntity {
    /// Stable game-assigned entity id.
    pub id: EntityId,

    /// Catalog id of the card, when known. Hidden cards have `None`.
    pub card_id: Option<CardId>,

    /// Current controller.
    pub controller: PlayerId,

    /// Controller the entity started the match with.
    pub original_controller: PlayerId,

    /// Current zone, decoded upstream from zone tags.
    pub zone: Zone,

    /// Card type, decoded upstream from type tags.
    pub card_type: CardType,

    /// Whether the card carries a death trigger tag.
    pub has_deathrattle: bool,

    /// Entity that created this one, when reported.
    pub creator: Option<EntityId>,

    /// Zone a created entity first materialized in.
    pub origin: CardOrigin,

    // --- annotation flags, written by the tracker's event handlers ---
    /// Did not originate from the starting decklist.
    pub created: bool,

    /// Left the deck or hand without being played.
    pub discarded: bool,

    /// Drawn by the opponent without a reveal.
    pub hidden: bool,

    /// Drawn during the mulligan deal (opponent side).
    pub mulliganed: bool,

    /// Bounced from the board back to hand or deck.
    pub returned: bool,

    /// Turn of the most recent transition recorded by the tracker.
    pub turn: u32,
}

impl CardEntity {
    /// Create an empty record for an entity id. All tags start unknown.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set the card id (builder).
    #[must_use]
    pub fn with_card(mut self, card_id: CardId) -> Self {
        self.card_id = Some(card_id);
        self
    }

    /// Set the current zone (builder).
    #[must_use]
    pub fn in_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Set the card type (builder).
    #[must_use]
    pub fn of_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    /// Set controller and, if not yet recorded, the original controller
    /// (builder).
    #[must_use]
    pub fn controlled_by(mut self, controller: PlayerId) -> Self {
        self.controller = controller;
        if !self.original_controller.is_set() {
            self.original_controller = controller;
        }
        self
    }

    /// Set the original controller explicitly (builder).
    #[must_use]
    pub fn originally_controlled_by(mut self, controller: PlayerId) -> Self {
        self.original_controller = controller;
        self
    }

    /// Set the creator entity (builder).
    #[must_use]
    pub fn created_by(mut self, creator: EntityId) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Mark the card as carrying a death trigger (builder).
    #[must_use]
    pub fn with_deathrattle(mut self) -> Self {
        self.has_deathrattle = true;
        self
    }

    /// Does this record have a known card id?
    #[must_use]
    pub fn has_card_id(&self) -> bool {
        self.card_id.is_some()
    }

    /// Current controller differs from the original one.
    ///
    /// Not a stored flag: recomputed from the controller tags so that a
    /// card returned to its original owner stops counting as stolen.
    #[must_use]
    pub fn is_stolen(&self) -> bool {
        self.original_controller.is_set() && self.original_controller != self.controller
    }

    /// Minion, spell, or weapon - the card types that show up in card lists.
    #[must_use]
    pub fn is_playable_card(&self) -> bool {
        matches!(
            self.card_type,
            CardType::Minion | CardType::Spell | CardType::Weapon
        )
    }

    /// Was this entity created by the game itself for a player?
    #[must_use]
    pub fn is_game_created(&self) -> bool {
        self.creator == Some(GAME_ENTITY)
    }

    /// Is the entity currently in the deck?
    #[must_use]
    pub fn is_in_deck(&self) -> bool {
        self.zone == Zone::Deck
    }

    /// Is the entity currently in hand?
    #[must_use]
    pub fn is_in_hand(&self) -> bool {
        self.zone == Zone::Hand
    }

    /// Is the entity currently on the board?
    #[must_use]
    pub fn is_in_play(&self) -> bool {
        self.zone == Zone::Play
    }

    /// Is the entity currently in the graveyard?
    #[must_use]
    pub fn is_in_graveyard(&self) -> bool {
        self.zone == Zone::Graveyard
    }

    /// Is the entity currently in a secret slot?
    #[must_use]
    pub fn is_in_secret(&self) -> bool {
        self.zone == Zone::Secret
    }

    /// Is the entity currently set aside?
    #[must_use]
    pub fn is_in_set_aside(&self) -> bool {
        self.zone == Zone::SetAside
    }

    /// Is the entity controlled by `player`?
    #[must_use]
    pub fn is_controlled_by(&self, player: PlayerId) -> bool {
        self.controller == player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id() {
        let id = EntityId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Entity(42)");
        assert_eq!(EntityId::from(7), EntityId::new(7));
    }

    #[test]
    fn test_new_entity_starts_unknown() {
        let e = CardEntity::new(EntityId::new(4));
        assert_eq!(e.id, EntityId::new(4));
        assert!(e.card_id.is_none());
        assert_eq!(e.zone, Zone::Unknown);
        assert_eq!(e.card_type, CardType::Unknown);
        assert!(!e.created && !e.discarded && !e.hidden);
        assert_eq!(e.turn, 0);
    }

    #[test]
    fn test_builder_chain() {
        let e = CardEntity::new(EntityId::new(4))
            .with_card(CardId::new(9))
            .in_zone(Zone::Deck)
            .of_type(CardType::Spell)
            .controlled_by(PlayerId::new(2));

        assert_eq!(e.card_id, Some(CardId::new(9)));
        assert!(e.is_in_deck());
        assert!(e.is_playable_card());
        assert_eq!(e.original_controller, PlayerId::new(2));
    }

    #[test]
    fn test_stolen_is_computed() {
        let mut e = CardEntity::new(EntityId::new(4)).controlled_by(PlayerId::new(1));
        assert!(!e.is_stolen());

        e.controller = PlayerId::new(2);
        assert!(e.is_stolen());

        // Returned to the original owner: no longer stolen.
        e.controller = PlayerId::new(1);
        assert!(!e.is_stolen());
    }

    #[test]
    fn test_stolen_requires_original_controller() {
        let mut e = CardEntity::new(EntityId::new(4));
        e.controller = PlayerId::new(2);
        // Original controller never observed: cannot be stolen.
        assert!(!e.is_stolen());
    }

    #[test]
    fn test_playable_card_types() {
        let mut e = CardEntity::new(EntityId::new(4));
        for (ty, playable) in [
            (CardType::Minion, true),
            (CardType::Spell, true),
            (CardType::Weapon, true),
            (CardType::HeroPower, false),
            (CardType::Token, false),
            (CardType::Unknown, false),
        ] {
            e.card_type = ty;
            assert_eq!(e.is_playable_card(), playable, "{:?}", ty);
        }
    }

    #[test]
    fn test_game_created() {
        let e = CardEntity::new(EntityId::new(4)).created_by(GAME_ENTITY);
        assert!(e.is_game_created());

        let e = CardEntity::new(EntityId::new(4)).created_by(EntityId::new(30));
        assert!(!e.is_game_created());
    }

    #[test]
    fn test_serialization() {
        let e = CardEntity::new(EntityId::new(4))
            .with_card(CardId::new(9))
            .in_zone(Zone::Hand)
            .controlled_by(PlayerId::new(1));
        let json = serde_json::to_string(&e).unwrap();
        let back: CardEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
