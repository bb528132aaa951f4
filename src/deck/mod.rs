//! Authoritative decklist input from the game context.

pub mod decklist;

pub use decklist::{Decklist, DecklistEntry};
