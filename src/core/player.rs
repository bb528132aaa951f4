//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe wrapper around the game-assigned controller id. The game
//! numbers real players from 1; `0` is reserved for "not set", which is
//! what entity records carry before their controller tags are observed.

use serde::{Deserialize, Serialize};

/// Game-assigned player/controller identifier.
///
/// ```
/// use deck_tracker::core::PlayerId;
///
/// let local = PlayerId::new(1);
/// assert!(local.is_set());
/// assert!(!PlayerId::UNSET.is_set());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The reserved "no controller observed" id.
    pub const UNSET: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw game-assigned id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check whether this id refers to an actual player.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
