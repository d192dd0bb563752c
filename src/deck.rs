//! Decks and deck utilities.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered pile of cards.
///
/// The front of the deck is its top: cards are drawn from the front and won
/// cards are added to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the next card to be drawn.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Adds cards to the bottom of the deck, in order.
    pub fn add_to_bottom<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Moves every card of `other` to the bottom of this deck, leaving `other` empty.
    pub fn absorb(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the cards from top to bottom.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl<const N: usize> From<[Card; N]> for Deck {
    fn from(cards: [Card; N]) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Builds an unshuffled 52-card deck, suit-major and rank-minor.
#[must_use]
pub fn build_standard_deck() -> Deck {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    Deck::from(cards)
}

/// Returns a shuffled copy of `deck`. The input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Deck {
    let mut cards = deck.to_vec();
    cards.shuffle(rng);
    Deck::from(cards)
}

/// Splits a deck into two halves. On an odd count the first half gets the extra card.
#[must_use]
pub fn split_in_half(deck: &Deck) -> (Deck, Deck) {
    let middle = deck.len().div_ceil(2);
    let first = deck.iter().take(middle).copied().collect();
    let second = deck.iter().skip(middle).copied().collect();
    (first, second)
}

/// Deals the deck one card at a time from the top into `players` hands.
///
/// # Errors
///
/// Returns an error if `players` is zero.
pub fn deal(deck: &Deck, players: usize) -> Result<Vec<Deck>, DealError> {
    if players == 0 {
        return Err(DealError::InvalidPlayerCount { players });
    }

    let mut hands = alloc::vec![Deck::new(); players];
    for (index, card) in deck.iter().enumerate() {
        hands[index % players].add_to_bottom([*card]);
    }

    Ok(hands)
}

/// Concatenates decks in order into a single deck.
#[must_use]
pub fn merge<'a, I: IntoIterator<Item = &'a Deck>>(decks: I) -> Deck {
    decks
        .into_iter()
        .flat_map(|deck| deck.iter().copied())
        .collect()
}
