//! Zones and card types.
//!
//! Both enums mirror what the event source reports: the tracker never
//! computes a zone itself, it only reads zone tags that were decoded
//! upstream. `Zone::Unknown` and `CardType::Unknown` cover entities whose
//! tags have not been observed yet.

use serde::{Deserialize, Serialize};

/// Location of a card entity during a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Zone tag not observed yet.
    #[default]
    Unknown,
    /// The player's deck (face down, order hidden).
    Deck,
    /// The player's hand.
    Hand,
    /// The board / battlefield.
    Play,
    /// The graveyard.
    Graveyard,
    /// The secret / trap slots.
    Secret,
    /// Set-aside holding zone used by transient effects.
    SetAside,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Unknown => "unknown",
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Play => "play",
            Zone::Graveyard => "graveyard",
            Zone::Secret => "secret",
            Zone::SetAside => "set-aside",
        };
        f.write_str(name)
    }
}

/// Card type as reported by the event source.
///
/// `Token` is its own variant: the play handler must treat tokens and
/// spells as mutually exclusive, so they never share a variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Type tag not observed yet.
    #[default]
    Unknown,
    Minion,
    Spell,
    Weapon,
    HeroPower,
    Token,
}

/// The zone a created entity first materialized in.
///
/// Written by the `create_in_*` handlers, read by the opponent card-list
/// rule that optionally shows cards created in deck or hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardOrigin {
    /// Not created, or creation zone not observed.
    #[default]
    Unknown,
    Deck,
    Hand,
    Play,
    Secret,
    SetAside,
}
