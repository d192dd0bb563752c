//! Read model handed to the presentation layer.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::outcome::{RoundOutcome, Side, leader};
use crate::war::{Battle, WarPile};

use super::state::{GameState, RoundState, RoundStats};

/// Card lead above which a side is said to dominate.
const STRONG_LEAD: usize = 10;
/// Card lead above which a side is said to be ahead.
const CLEAR_LEAD: usize = 5;

/// Everything a renderer needs, copied out of the game at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// The full game state.
    pub state: GameState,
    /// Cards in the player's deck.
    pub player_cards: usize,
    /// Cards in the opponent's deck.
    pub opponent_cards: usize,
    /// Cards drawn and waiting to be compared.
    pub in_play: Option<Battle>,
    /// Cards already compared and still on display.
    pub revealed: Option<Battle>,
    /// Outcome of the revealed battle.
    pub outcome: Option<RoundOutcome>,
    /// Whether a war is underway.
    pub war_active: bool,
    /// Cards in the war pile.
    pub war_pile: usize,
    /// Whether new draws are blocked by a battle in flight.
    pub battle_pending: bool,
    /// Round, war, and win tallies.
    pub stats: RoundStats,
    /// Whether the game has been started.
    pub started: bool,
    /// Whether the game is over.
    pub game_over: bool,
    /// The winner, once the game is over.
    pub winner: Option<Side>,
}

impl Snapshot {
    pub(crate) fn new(
        state: GameState,
        player: &Deck,
        opponent: &Deck,
        pile: &WarPile,
        stats: RoundStats,
    ) -> Self {
        let (in_play, revealed, outcome, winner) = match state {
            GameState::NotStarted | GameState::InProgress(RoundState::Idle) => {
                (None, None, None, None)
            }
            GameState::InProgress(RoundState::BattlePending(battle)) => {
                (Some(battle), None, None, None)
            }
            GameState::InProgress(RoundState::Revealed { battle, outcome }) => {
                (None, Some(battle), Some(outcome), None)
            }
            GameState::GameOver { winner, revealed } => (
                None,
                revealed,
                revealed.and(winner).map(RoundOutcome::Won),
                winner,
            ),
        };

        Self {
            state,
            player_cards: player.len(),
            opponent_cards: opponent.len(),
            in_play,
            revealed,
            outcome,
            war_active: !pile.is_empty(),
            war_pile: pile.len(),
            battle_pending: state.is_battle_pending(),
            stats,
            started: state.is_started(),
            game_over: state.is_over(),
            winner,
        }
    }

    /// Returns the number of cards drawn but not yet compared.
    #[must_use]
    pub const fn cards_in_play(&self) -> usize {
        match self.in_play {
            Some(_) => 2,
            None => 0,
        }
    }

    /// Returns every card accounted for: both decks, the war pile, and cards in play.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.player_cards + self.opponent_cards + self.war_pile + self.cards_in_play()
    }

    /// Returns the share of deck cards held by the player, between 0 and 1.
    ///
    /// Returns 0.5 when neither deck holds a card.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn win_probability(&self) -> f64 {
        let total = self.player_cards + self.opponent_cards;
        if total == 0 {
            return 0.5;
        }
        self.player_cards as f64 / total as f64
    }

    /// Summarizes who is ahead. Returns `None` before the game starts.
    #[must_use]
    pub const fn standing(&self) -> Option<Standing> {
        if !self.started {
            return None;
        }
        if self.player_cards == 0 {
            return Some(Standing::Won(Side::Opponent));
        }
        if self.opponent_cards == 0 {
            return Some(Standing::Won(Side::Player));
        }

        let margin = self.player_cards.abs_diff(self.opponent_cards);
        let leader = match leader(self.player_cards, self.opponent_cards) {
            Some(side) => side,
            None => return Some(Standing::Close),
        };

        Some(if margin > STRONG_LEAD {
            Standing::StrongLead { leader, margin }
        } else if margin > CLEAR_LEAD {
            Standing::Ahead { leader, margin }
        } else {
            Standing::Close
        })
    }
}

/// Who is winning, for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Standing {
    /// One side holds every card.
    Won(Side),
    /// One side leads by more than ten cards.
    StrongLead {
        /// The leading side.
        leader: Side,
        /// Card difference between the decks.
        margin: usize,
    },
    /// One side leads by more than five cards.
    Ahead {
        /// The leading side.
        leader: Side,
        /// Card difference between the decks.
        margin: usize,
    },
    /// Neither side leads by more than five cards.
    Close,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won(side) => write!(f, "{side} wins the game"),
            Self::StrongLead { leader, margin } => {
                write!(f, "{leader} has a strong lead of {margin} cards")
            }
            Self::Ahead { leader, margin } => write!(f, "{leader} is ahead by {margin} cards"),
            Self::Close => f.write_str("the game is close"),
        }
    }
}
