//! Game state types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::outcome::{RoundOutcome, Side};
use crate::war::Battle;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// No decks have been dealt yet.
    NotStarted,
    /// Rounds are being played.
    InProgress(RoundState),
    /// A deck ran out.
    GameOver {
        /// The side left holding cards, or `None` if both decks are empty.
        winner: Option<Side>,
        /// The final battle, until the table is cleared.
        revealed: Option<Battle>,
    },
}

impl GameState {
    /// Returns whether the game has been started.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }

    /// Returns whether a battle is in flight, blocking new draws.
    #[must_use]
    pub const fn is_battle_pending(&self) -> bool {
        matches!(
            self,
            Self::InProgress(RoundState::BattlePending(_) | RoundState::Revealed { .. })
        )
    }
}

/// Progress through a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundState {
    /// Waiting for the next draw.
    Idle,
    /// Cards are on the table and have not been compared.
    BattlePending(Battle),
    /// Cards were compared and the outcome is on display.
    Revealed {
        /// The compared cards.
        battle: Battle,
        /// What the comparison decided.
        outcome: RoundOutcome,
    },
}

/// Round, war, and win tallies for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundStats {
    /// Accepted draws, including war continuations.
    pub rounds: u32,
    /// Ties that started or extended a war.
    pub wars: u32,
    /// Battles won by the player.
    pub player_wins: u32,
    /// Battles won by the opponent.
    pub opponent_wins: u32,
}

impl RoundStats {
    /// Returns the win count for `side`.
    #[must_use]
    pub const fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_wins,
            Side::Opponent => self.opponent_wins,
        }
    }

    pub(crate) const fn record_win(&mut self, side: Side) {
        match side {
            Side::Player => self.player_wins += 1,
            Side::Opponent => self.opponent_wins += 1,
        }
    }
}
