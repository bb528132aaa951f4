//! Per-side match state: the player tracker.
//!
//! One `PlayerTracker` exists per match side (local player and opponent).
//! The event source calls one handler per zone/visibility transition, in
//! event order, handing in a mutable entity record and the current turn.
//! Handlers are fire-and-forget: they stamp the transition turn, flip
//! annotation flags per the transition table, and maintain the prediction
//! list and play counters. Malformed input is applied literally - this
//! layer never rejects an event.
//!
//! Derivations over the accumulated state live in the sibling modules
//! (`derive`, `reconcile`, `list`); they are pure and pull-based.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CardEntity, CardOrigin, CardType, PlayerId};
use crate::tracker::prediction::PredictionList;

/// Card-state aggregator for one side of a match.
///
/// ## Example
///
/// ```
/// use deck_tracker::core::{CardEntity, CardType, EntityId, PlayerId, Zone};
/// use deck_tracker::catalog::CardId;
/// use deck_tracker::tracker::PlayerTracker;
///
/// let mut player = PlayerTracker::local();
/// player.id = PlayerId::new(1);
///
/// let mut entity = CardEntity::new(EntityId::new(4))
///     .with_card(CardId::new(1))
///     .of_type(CardType::Spell)
///     .in_zone(Zone::Play)
///     .controlled_by(PlayerId::new(1));
///
/// player.play(&mut entity, 3);
/// assert_eq!(player.spells_played_count, 1);
/// assert_eq!(entity.turn, 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerTracker {
    is_local: bool,

    /// Game-assigned player id.
    pub id: PlayerId,

    /// Player name, once observed.
    pub name: Option<String>,

    /// Hero class, once observed.
    pub hero_class: Option<String>,

    /// Spells played this match (secrets included).
    pub spells_played_count: u32,

    /// Death-triggered minions that hit the graveyard this match.
    pub deathrattles_played_count: u32,

    /// Hero power activations this match.
    pub hero_power_count: u32,

    /// Fatigue damage taken so far.
    pub fatigue: u32,

    /// Whether cards drawn so far are consistent with the known decklist.
    /// Maintained by the game context; reset to `true`.
    pub drawn_matches_deck: bool,

    predictions: PredictionList,

    verbose: bool,
}

impl PlayerTracker {
    /// Create a tracker for one side.
    #[must_use]
    pub fn new(is_local: bool) -> Self {
        Self {
            is_local,
            id: PlayerId::UNSET,
            name: None,
            hero_class: None,
            spells_played_count: 0,
            deathrattles_played_count: 0,
            hero_power_count: 0,
            fatigue: 0,
            drawn_matches_deck: true,
            predictions: PredictionList::new(),
            verbose: false,
        }
    }

    /// Tracker for the local player's side.
    #[must_use]
    pub fn local() -> Self {
        Self::new(true)
    }

    /// Tracker for the opponent's side.
    #[must_use]
    pub fn opponent() -> Self {
        Self::new(false)
    }

    /// Is this the local player's side?
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.is_local
    }

    /// Outstanding deck-location predictions.
    #[must_use]
    pub fn predictions(&self) -> &PredictionList {
        &self.predictions
    }

    /// Mirror the Config verbosity flag for handler diagnostics.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Clear match-scoped state at a mulligan/new-match boundary.
    ///
    /// Identity-derived fields, counters, and predictions reset; the
    /// local/opponent flag (and the verbosity mirror) survive.
    pub fn reset(&mut self) {
        self.id = PlayerId::UNSET;
        self.name = None;
        self.hero_class = None;
        self.spells_played_count = 0;
        self.deathrattles_played_count = 0;
        self.hero_power_count = 0;
        self.fatigue = 0;
        self.drawn_matches_deck = true;
        self.predictions.clear();
    }

    fn log_transition(&self, op: &str, entity: &CardEntity) {
        if self.verbose {
            debug!(player = self.id.raw(), op, entity = ?entity, "zone transition");
        } else {
            trace!(player = self.id.raw(), op, entity = %entity.id, "zone transition");
        }
    }

    // === Event handlers ===
    //
    // Every handler stamps `entity.turn` with the transition turn as its
    // final entity write.

    /// A card entered the deck.
    ///
    /// A previously discarded card re-entering the deck is un-discarded and
    /// counts as an original card again; any other card appearing in the
    /// deck after turn 1 did not start there.
    pub fn create_in_deck(&mut self, entity: &mut CardEntity, turn: u32) {
        if entity.discarded {
            entity.discarded = false;
            entity.created = false;
        } else {
            entity.created = entity.created || turn > 1;
        }
        entity.origin = CardOrigin::Deck;
        entity.turn = turn;
        self.log_transition("create_in_deck", entity);
    }

    /// A card was created directly into the hand.
    pub fn create_in_hand(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.created = true;
        entity.origin = CardOrigin::Hand;
        entity.turn = turn;
        self.log_transition("create_in_hand", entity);
    }

    /// A card was created in the set-aside zone.
    pub fn create_in_set_aside(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.origin = CardOrigin::SetAside;
        entity.turn = turn;
        self.log_transition("create_in_set_aside", entity);
    }

    /// A card returned from the board to the deck.
    pub fn board_to_deck(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.returned = true;
        entity.turn = turn;
        self.log_transition("board_to_deck", entity);
    }

    /// A card was played from hand or board.
    ///
    /// For the opponent a play corroborates a deck-location prediction made
    /// at or before the entity's previously recorded turn.
    pub fn play(&mut self, entity: &mut CardEntity, turn: u32) {
        if !self.is_local {
            if let Some(card_id) = entity.card_id {
                self.predictions.resolve(card_id, entity.turn);
            }
        }
        match entity.card_type {
            CardType::Token => entity.created = true,
            CardType::Spell => self.spells_played_count += 1,
            _ => {}
        }
        entity.turn = turn;
        self.log_transition("play", entity);
    }

    /// A card was discarded from the hand.
    pub fn hand_discard(&mut self, entity: &mut CardEntity, turn: u32) {
        if !self.is_local {
            if let Some(card_id) = entity.card_id {
                self.predictions.resolve(card_id, entity.turn);
            }
        }
        entity.discarded = true;
        entity.turn = turn;
        self.log_transition("hand_discard", entity);
    }

    /// A secret was played straight from the deck.
    pub fn secret_played_from_deck(&mut self, entity: &mut CardEntity, turn: u32) {
        if let Some(card_id) = entity.card_id {
            self.predictions.resolve_any_turn(card_id);
        }
        entity.turn = turn;
        self.log_transition("secret_played_from_deck", entity);
    }

    /// A secret was played from the hand.
    pub fn secret_played_from_hand(&mut self, entity: &mut CardEntity, turn: u32) {
        self.spells_played_count += 1;
        entity.turn = turn;
        self.log_transition("secret_played_from_hand", entity);
    }

    /// A card was shuffled back during the mulligan.
    pub fn mulligan(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.turn = turn;
        self.log_transition("mulligan", entity);
    }

    /// A card was drawn.
    ///
    /// `mulligan_dealing` is the game-context "mulligan deal in progress"
    /// flag: opponent cards drawn during the deal are marked `mulliganed`
    /// rather than `hidden`, since they may yet be returned.
    pub fn draw(&mut self, entity: &mut CardEntity, turn: u32, mulligan_dealing: bool) {
        if self.is_local {
            if let Some(card_id) = entity.card_id {
                self.predictions.resolve_any_turn(card_id);
            }
        } else if mulligan_dealing {
            entity.mulliganed = true;
        } else {
            entity.hidden = true;
        }
        entity.turn = turn;
        self.log_transition("draw", entity);
    }

    /// A card left the deck without being drawn or played.
    ///
    /// No prediction check here: this is the path by which cards whose
    /// deck presence was only inferred leave the deck.
    pub fn remove_from_deck(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.discarded = true;
        entity.turn = turn;
        self.log_transition("remove_from_deck", entity);
    }

    /// A card was removed from play.
    pub fn remove_from_play(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.turn = turn;
        self.log_transition("remove_from_play", entity);
    }

    /// A card was discarded straight from the deck (milled).
    pub fn deck_discard(&mut self, entity: &mut CardEntity, turn: u32) {
        if let Some(card_id) = entity.card_id {
            self.predictions.resolve_any_turn(card_id);
        }
        entity.discarded = true;
        entity.turn = turn;
        self.log_transition("deck_discard", entity);
    }

    /// A card moved from the deck straight onto the board.
    pub fn deck_to_play(&mut self, entity: &mut CardEntity, turn: u32) {
        if let Some(card_id) = entity.card_id {
            self.predictions.resolve_any_turn(card_id);
        }
        entity.turn = turn;
        self.log_transition("deck_to_play", entity);
    }

    /// A card went from the board to the graveyard.
    pub fn play_to_graveyard(&mut self, entity: &mut CardEntity, turn: u32) {
        if entity.card_type == CardType::Minion && entity.has_deathrattle {
            self.deathrattles_played_count += 1;
        }
        entity.turn = turn;
        self.log_transition("play_to_graveyard", entity);
    }

    /// A joust-like effect revealed a card without moving it.
    ///
    /// Upserts a deck-location prediction: the card is believed to be in
    /// the deck as of this turn.
    pub fn joust_reveal(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.turn = turn;
        if let Some(card_id) = entity.card_id {
            self.predictions.upsert(card_id, turn);
        }
        self.log_transition("joust_reveal", entity);
    }

    /// A card was created directly on the board.
    pub fn create_in_play(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.created = true;
        entity.origin = CardOrigin::Play;
        entity.turn = turn;
        self.log_transition("create_in_play", entity);
    }

    /// A card was created directly into a secret slot.
    pub fn create_in_secret(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.created = true;
        entity.origin = CardOrigin::Secret;
        entity.turn = turn;
        self.log_transition("create_in_secret", entity);
    }

    /// This side's card was stolen by the opponent.
    ///
    /// The stolen state itself is computed from the controller tags; the
    /// transition only needs a turn stamp.
    pub fn stolen_by_opponent(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.turn = turn;
        self.log_transition("stolen_by_opponent", entity);
    }

    /// This side stole a card from the opponent.
    pub fn stolen_from_opponent(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.turn = turn;
        self.log_transition("stolen_from_opponent", entity);
    }

    /// A card returned from the board to the hand.
    pub fn board_to_hand(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.returned = true;
        entity.turn = turn;
        self.log_transition("board_to_hand", entity);
    }

    /// A secret triggered and resolved.
    pub fn secret_triggered(&mut self, entity: &mut CardEntity, turn: u32) {
        entity.turn = turn;
        self.log_transition("secret_triggered", entity);
    }

    /// The hero power was used.
    pub fn hero_power(&mut self, turn: u32) {
        self.hero_power_count += 1;
        trace!(player = self.id.raw(), turn, "hero power");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;
    use crate::core::{EntityId, Zone};

    fn entity(card: u32) -> CardEntity {
        CardEntity::new(EntityId::new(4))
            .with_card(CardId::new(card))
            .controlled_by(PlayerId::new(2))
    }

    #[test]
    fn test_create_in_deck_turn_one_is_original() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1);

        player.create_in_deck(&mut e, 1);
        assert!(!e.created);
        assert_eq!(e.turn, 1);
    }

    #[test]
    fn test_create_in_deck_later_is_created() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1);

        player.create_in_deck(&mut e, 4);
        assert!(e.created);
    }

    #[test]
    fn test_create_in_deck_undiscards() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1);

        player.hand_discard(&mut e, 2);
        assert!(e.discarded);

        // Re-entering the deck clears both flags, even after turn 1.
        player.create_in_deck(&mut e, 3);
        assert!(!e.discarded);
        assert!(!e.created);
    }

    #[test]
    fn test_play_token_sets_created() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1).of_type(CardType::Token);

        player.play(&mut e, 2);
        assert!(e.created);
        assert_eq!(player.spells_played_count, 0);
    }

    #[test]
    fn test_play_spell_counts() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1).of_type(CardType::Spell);

        player.play(&mut e, 2);
        player.play(&mut e, 3);
        assert_eq!(player.spells_played_count, 2);
        assert!(!e.created);
    }

    #[test]
    fn test_play_resolves_opponent_prediction() {
        let mut player = PlayerTracker::opponent();
        let mut e = entity(1);

        player.joust_reveal(&mut e, 2);
        assert_eq!(player.predictions().len(), 1);

        // Drawn later (hidden draw does not carry the card id), then the
        // reveal corroborates on play: prediction resolved.
        e.turn = 4;
        player.play(&mut e, 5);
        assert!(player.predictions().is_empty());
    }

    #[test]
    fn test_play_prediction_uses_previously_recorded_turn() {
        let mut player = PlayerTracker::opponent();
        let mut revealed = entity(1);
        player.joust_reveal(&mut revealed, 3);

        // A second copy played with an older recorded turn cannot resolve
        // the turn-3 prediction.
        let mut older = entity(1);
        older.turn = 1;
        player.play(&mut older, 5);
        assert_eq!(player.predictions().len(), 1);
    }

    #[test]
    fn test_local_play_leaves_predictions() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1);

        player.joust_reveal(&mut e, 2);
        e.turn = 4;
        player.play(&mut e, 5);
        assert_eq!(player.predictions().len(), 1);
    }

    #[test]
    fn test_draw_marks_opponent_cards() {
        let mut player = PlayerTracker::opponent();

        let mut dealt = entity(1);
        player.draw(&mut dealt, 0, true);
        assert!(dealt.mulliganed);
        assert!(!dealt.hidden);

        let mut drawn = entity(2);
        player.draw(&mut drawn, 3, false);
        assert!(drawn.hidden);
        assert!(!drawn.mulliganed);
    }

    #[test]
    fn test_local_draw_resolves_prediction() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1);

        player.joust_reveal(&mut e, 6);
        // Any-turn resolution: the draw corroborates even though its turn
        // is before the prediction's.
        player.draw(&mut e, 2, false);
        assert!(player.predictions().is_empty());
        assert!(!e.hidden);
    }

    #[test]
    fn test_remove_from_deck_keeps_predictions() {
        let mut player = PlayerTracker::opponent();
        let mut e = entity(1);

        player.joust_reveal(&mut e, 2);
        player.remove_from_deck(&mut e, 3);

        assert!(e.discarded);
        // Inferred cards leave the deck through this path, so the
        // prediction must not be consumed by it.
        assert_eq!(player.predictions().len(), 1);
    }

    #[test]
    fn test_deck_discard_resolves_prediction() {
        let mut player = PlayerTracker::opponent();
        let mut e = entity(1);

        player.joust_reveal(&mut e, 5);
        player.deck_discard(&mut e, 2);

        assert!(e.discarded);
        assert!(player.predictions().is_empty());
    }

    #[test]
    fn test_joust_reveal_bumps_turn() {
        let mut player = PlayerTracker::opponent();
        let mut e = entity(1);

        player.joust_reveal(&mut e, 2);
        player.joust_reveal(&mut e, 5);

        assert_eq!(player.predictions().len(), 1);
        assert_eq!(player.predictions().iter().next().unwrap().turn, 5);
    }

    #[test]
    fn test_graveyard_counts_deathrattles() {
        let mut player = PlayerTracker::local();

        let mut plain = entity(1).of_type(CardType::Minion);
        player.play_to_graveyard(&mut plain, 3);
        assert_eq!(player.deathrattles_played_count, 0);

        let mut rattler = entity(2).of_type(CardType::Minion).with_deathrattle();
        player.play_to_graveyard(&mut rattler, 4);
        assert_eq!(player.deathrattles_played_count, 1);

        // Death-triggered spells do not count.
        let mut spell = entity(3).of_type(CardType::Spell).with_deathrattle();
        player.play_to_graveyard(&mut spell, 5);
        assert_eq!(player.deathrattles_played_count, 1);
    }

    #[test]
    fn test_hero_power_increments_only_counter() {
        let mut player = PlayerTracker::local();
        player.hero_power(2);
        player.hero_power(3);
        assert_eq!(player.hero_power_count, 2);
        assert_eq!(player.spells_played_count, 0);
        assert!(player.predictions().is_empty());
    }

    #[test]
    fn test_returned_flags() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1);

        player.board_to_hand(&mut e, 3);
        assert!(e.returned);

        let mut e2 = entity(2);
        player.board_to_deck(&mut e2, 3);
        assert!(e2.returned);
    }

    #[test]
    fn test_turn_stamp_on_every_handler() {
        let mut player = PlayerTracker::local();
        let mut e = entity(1).in_zone(Zone::Secret);

        player.secret_triggered(&mut e, 7);
        assert_eq!(e.turn, 7);

        player.remove_from_play(&mut e, 9);
        assert_eq!(e.turn, 9);
    }

    #[test]
    fn test_reset_keeps_side() {
        let mut player = PlayerTracker::opponent();
        player.id = PlayerId::new(2);
        player.name = Some("Opponent".into());
        player.spells_played_count = 3;
        player.fatigue = 2;
        let mut e = entity(1);
        player.joust_reveal(&mut e, 2);

        player.reset();

        assert!(!player.is_local());
        assert_eq!(player.id, PlayerId::UNSET);
        assert!(player.name.is_none());
        assert_eq!(player.spells_played_count, 0);
        assert_eq!(player.fatigue, 0);
        assert!(player.drawn_matches_deck);
        assert!(player.predictions().is_empty());
    }
}
