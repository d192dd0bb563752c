//! A headless engine for the card game War with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals two decks and plays rounds
//! through a small state machine: draw, resolve, clear. Ties start a war,
//! which continues on the next draw until one side takes the whole pile or
//! runs out of cards. Rendering and animation are left to the caller, which
//! reads [`Snapshot`]s and paces rounds with a [`Pacer`].
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, Immediate};
//!
//! let game = Game::new(GameOptions::default().with_pacing_ms(0), 42);
//! game.start();
//! game.play_to_end(&Immediate, 100).unwrap();
//! assert_eq!(game.snapshot().total_cards(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod outcome;
pub mod pacing;
pub mod war;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, build_standard_deck, deal, merge, shuffle, split_in_half};
pub use error::{DealError, InvalidComparison, ResolveError, TransitionError};
pub use game::{Draw, Game, GameState, RoundState, RoundStats, Snapshot, Standing};
pub use options::GameOptions;
pub use outcome::{Comparison, RoundOutcome, Side, compare};
#[cfg(feature = "std")]
pub use pacing::Sleep;
pub use pacing::{Immediate, Pacer};
pub use war::{Battle, RoundReport, WarPile, resolve_round};
