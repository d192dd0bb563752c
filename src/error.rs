//! Error types for game operations.

use thiserror::Error;

use crate::outcome::Side;

/// The comparator was invoked without two cards in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compare cards: one or both cards are missing")]
pub struct InvalidComparison;

/// Errors that can occur while dealing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// At least one player is required.
    #[error("invalid player count {players}: at least one player is required")]
    InvalidPlayerCount {
        /// The rejected player count.
        players: usize,
    },
}

/// Errors that can occur when resolving a round directly on two decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A deck had no card to commit.
    #[error("{0} deck is empty")]
    EmptyDeck(Side),
}

/// Illegal state transitions on a game session.
///
/// A rejected command leaves the session untouched, so presentation code may
/// treat any of these as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The session has not been started.
    #[error("illegal state transition: game has not started")]
    NotStarted,
    /// A battle is already in flight.
    #[error("illegal state transition: a battle is in progress")]
    BattlePending,
    /// There are no cards in play to resolve.
    #[error("illegal state transition: no battle is pending")]
    NoBattlePending,
    /// There is no revealed battle to clear.
    #[error("illegal state transition: nothing to clear")]
    NothingRevealed,
    /// The game is over.
    #[error("illegal state transition: game is over")]
    GameOver,
}
