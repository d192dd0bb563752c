//! Round resolution, including nested wars and deck exhaustion.
//!
//! A round starts with each side turning over its top card. Equal ranks start
//! a war: both cards go to the war pile, each side adds one face-down card,
//! and the next face-up pair is compared. This repeats until one side wins
//! the whole pile, or until a side can no longer supply two cards, in which
//! case the side holding more cards takes everything.

use alloc::vec::Vec;
use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ResolveError;
use crate::outcome::{Comparison, Side};

/// Cards each side must hold to continue a war (one face down, one face up).
pub const WAR_STAKE: usize = 2;

/// The pair of face-up cards being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Battle {
    /// The player's face-up card.
    pub player: Card,
    /// The opponent's face-up card.
    pub opponent: Card,
}

impl Battle {
    /// Creates a battle from the two face-up cards.
    #[must_use]
    pub const fn new(player: Card, opponent: Card) -> Self {
        Self { player, opponent }
    }

    /// Compares the two cards, player first.
    #[must_use]
    pub fn comparison(&self) -> Comparison {
        Comparison::of(self.player, self.opponent)
    }

    /// Returns the cards, player first.
    #[must_use]
    pub const fn cards(&self) -> [Card; 2] {
        [self.player, self.opponent]
    }

    /// Returns the card committed by `side`.
    #[must_use]
    pub const fn card(&self, side: Side) -> Card {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Cards held back while a tie is unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarPile {
    cards: Vec<Card>,
}

impl WarPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards in the order they were committed.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Adds both cards of a tied battle to the pile.
    pub fn push_battle(&mut self, battle: Battle) {
        self.cards.extend(battle.cards());
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the pile onto the bottom of `deck`.
    pub(crate) fn pay_out(&mut self, deck: &mut Deck) {
        deck.add_to_bottom(self.cards.drain(..));
    }
}

/// Summary of a round resolved by [`resolve_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// The side that collected the contested cards.
    pub winner: Side,
    /// Number of ties encountered during the round.
    pub wars: usize,
    /// Cards moved into the winner's deck.
    pub cards_won: usize,
    /// Whether the round ended because a side could not continue a war.
    pub exhausted: bool,
}

/// Returns whether both decks can commit a face-down and a face-up card.
#[must_use]
pub fn can_continue_war(player: &Deck, opponent: &Deck) -> bool {
    player.len() >= WAR_STAKE && opponent.len() >= WAR_STAKE
}

/// Draws the top card of each deck. Draws nothing unless both decks have a card.
pub(crate) fn draw_battle(player: &mut Deck, opponent: &mut Deck) -> Option<Battle> {
    if player.is_empty() || opponent.is_empty() {
        return None;
    }
    let player_card = player.draw()?;
    let opponent_card = opponent.draw()?;
    Some(Battle::new(player_card, opponent_card))
}

/// Moves one face-down card per side onto the pile and draws the next face-up pair.
///
/// Leaves every deck and the pile untouched when either deck is short.
pub(crate) fn commit_war(
    player: &mut Deck,
    opponent: &mut Deck,
    pile: &mut WarPile,
) -> Option<Battle> {
    if !can_continue_war(player, opponent) {
        return None;
    }
    let player_down = player.draw()?;
    let opponent_down = opponent.draw()?;
    pile.push(player_down);
    pile.push(opponent_down);
    draw_battle(player, opponent)
}

/// Gives the battle cards, then the pile, to the winner.
pub(crate) fn award(
    winner: Side,
    battle: Battle,
    player: &mut Deck,
    opponent: &mut Deck,
    pile: &mut WarPile,
) -> usize {
    let won = pile.len() + battle.cards().len();
    let deck = match winner {
        Side::Player => player,
        Side::Opponent => opponent,
    };
    deck.add_to_bottom(battle.cards());
    pile.pay_out(deck);
    won
}

/// Ends a war that cannot continue.
///
/// The side with strictly more cards takes the other deck and the pile; on
/// equal counts the opponent takes them. Returns the winner and the number
/// of cards it received.
pub(crate) fn exhaust(player: &mut Deck, opponent: &mut Deck, pile: &mut WarPile) -> (Side, usize) {
    let (winner, winning, losing) = if player.len() > opponent.len() {
        (Side::Player, player, opponent)
    } else {
        (Side::Opponent, opponent, player)
    };
    let won = losing.len() + pile.len();
    winning.absorb(losing);
    pile.pay_out(winning);
    (winner, won)
}

/// Resolves one full round between two decks, fighting any wars to the end.
///
/// Both decks are updated in place; the war pile is always empty afterwards.
///
/// # Errors
///
/// Returns an error without touching either deck if one of them is empty.
///
/// # Example
///
/// ```
/// use warrs::{Card, Deck, Rank, Side, Suit, resolve_round};
///
/// let mut player = Deck::from([Card::new(Suit::Spades, Rank::King)]);
/// let mut opponent = Deck::from([Card::new(Suit::Hearts, Rank::Four)]);
///
/// let report = resolve_round(&mut player, &mut opponent).unwrap();
/// assert_eq!(report.winner, Side::Player);
/// assert_eq!(player.len(), 2);
/// assert!(opponent.is_empty());
/// ```
pub fn resolve_round(player: &mut Deck, opponent: &mut Deck) -> Result<RoundReport, ResolveError> {
    if player.is_empty() {
        return Err(ResolveError::EmptyDeck(Side::Player));
    }
    if opponent.is_empty() {
        return Err(ResolveError::EmptyDeck(Side::Opponent));
    }

    let mut pile = WarPile::new();
    let mut wars = 0;
    let Some(mut battle) = draw_battle(player, opponent) else {
        return Err(ResolveError::EmptyDeck(Side::Player));
    };

    loop {
        if let Some(winner) = battle.comparison().winner() {
            let cards_won = award(winner, battle, player, opponent, &mut pile);
            return Ok(RoundReport {
                winner,
                wars,
                cards_won,
                exhausted: false,
            });
        }

        wars += 1;
        log::debug!("war #{wars}: {} vs {}", battle.player, battle.opponent);
        pile.push_battle(battle);

        match commit_war(player, opponent, &mut pile) {
            Some(next) => battle = next,
            None => {
                let (winner, cards_won) = exhaust(player, opponent, &mut pile);
                return Ok(RoundReport {
                    winner,
                    wars,
                    cards_won,
                    exhausted: true,
                });
            }
        }
    }
}
