//! Card comparison and round outcome types.

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::InvalidComparison;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The human player (first deck).
    Player,
    /// The opponent (second deck).
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Opponent => "opponent",
        })
    }
}

/// Result of comparing two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Comparison {
    /// The first card has the higher rank.
    FirstWins,
    /// The second card has the higher rank.
    SecondWins,
    /// Both cards share a rank.
    Tie,
}

impl Comparison {
    /// Compares two cards by numeric rank. Suits are ignored.
    #[must_use]
    pub fn of(first: Card, second: Card) -> Self {
        match first.numeric_rank().cmp(&second.numeric_rank()) {
            Ordering::Greater => Self::FirstWins,
            Ordering::Less => Self::SecondWins,
            Ordering::Equal => Self::Tie,
        }
    }

    /// Maps the comparison onto sides, with the player as the first card.
    ///
    /// Returns `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::FirstWins => Some(Side::Player),
            Self::SecondWins => Some(Side::Opponent),
            Self::Tie => None,
        }
    }
}

/// Compares two cards that may be missing.
///
/// # Errors
///
/// Returns [`InvalidComparison`] if either card is `None`.
///
/// # Example
///
/// ```
/// use warrs::{Card, Comparison, Rank, Suit, compare};
///
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// let two = Card::new(Suit::Hearts, Rank::Two);
/// assert_eq!(compare(Some(ace), Some(two)), Ok(Comparison::FirstWins));
/// assert!(compare(Some(ace), None).is_err());
/// ```
pub fn compare(first: Option<Card>, second: Option<Card>) -> Result<Comparison, InvalidComparison> {
    match (first, second) {
        (Some(first), Some(second)) => Ok(Comparison::of(first, second)),
        _ => Err(InvalidComparison),
    }
}

/// Outcome of a resolved battle as shown to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundOutcome {
    /// One side won the battle and collected the contested cards.
    Won(Side),
    /// The battle tied and a war is pending.
    War,
}

impl From<Comparison> for RoundOutcome {
    fn from(comparison: Comparison) -> Self {
        comparison.winner().map_or(Self::War, Self::Won)
    }
}

/// Returns the side holding more cards, or `None` when the counts match.
#[must_use]
pub const fn leader(player_cards: usize, opponent_cards: usize) -> Option<Side> {
    if player_cards > opponent_cards {
        Some(Side::Player)
    } else if opponent_cards > player_cards {
        Some(Side::Opponent)
    } else {
        None
    }
}
