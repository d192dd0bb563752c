//! Game session and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::{Deck, build_standard_deck, shuffle, split_in_half};
use crate::options::GameOptions;
use crate::outcome::{Side, leader};
use crate::sync::Lock;
use crate::war::WarPile;

mod round;
pub mod snapshot;
pub mod state;

pub use round::Draw;
pub use snapshot::{Snapshot, Standing};
pub use state::{GameState, RoundState, RoundStats};

/// Everything a session mutates, kept behind a single lock.
struct Session {
    player: Deck,
    opponent: Deck,
    pile: WarPile,
    state: GameState,
    stats: RoundStats,
    rng: ChaCha8Rng,
}

impl Session {
    fn reset(&mut self, player: Deck, opponent: Deck) {
        self.state = if player.is_empty() || opponent.is_empty() {
            GameState::GameOver {
                winner: leader(player.len(), opponent.len()),
                revealed: None,
            }
        } else {
            GameState::InProgress(RoundState::Idle)
        };
        self.player = player;
        self.opponent = opponent;
        self.pile = WarPile::new();
        self.stats = RoundStats::default();
    }
}

/// A game of War between the player and the opponent.
///
/// The game owns both decks, the war pile, and the round tallies. Every
/// command takes `&self` and applies its transition atomically, so the game
/// can be shared with timer callbacks in a presentation layer.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    session: Lock<Session>,
}

impl Game {
    /// Creates a new, not yet started game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            session: Lock::new(Session {
                player: Deck::new(),
                opponent: Deck::new(),
                pile: WarPile::new(),
                state: GameState::NotStarted,
                stats: RoundStats::default(),
                rng: ChaCha8Rng::seed_from_u64(seed),
            }),
        }
    }

    /// Shuffles a fresh 52-card deck and splits it between the two sides.
    ///
    /// Any previous state, including a battle in flight, is discarded.
    pub fn start(&self) {
        let (player, opponent) = self.session.with(|session| {
            let deck = shuffle(&build_standard_deck(), &mut session.rng);
            let (player, opponent) = split_in_half(&deck);
            session.reset(player, opponent);
            (session.player.len(), session.opponent.len())
        });
        log::info!("new game: {player} vs {opponent} cards");
    }

    /// Starts over with a freshly shuffled deck. Equivalent to [`Game::start`].
    pub fn restart(&self) {
        self.start();
    }

    /// Starts the game with the given decks instead of a shuffled split.
    ///
    /// If either deck is empty the game is immediately over.
    pub fn start_with_decks(&self, player: Deck, opponent: Deck) {
        log::info!(
            "new game with fixed decks: {} vs {} cards",
            player.len(),
            opponent.len()
        );
        self.session.with(|session| session.reset(player, opponent));
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.session.with(|session| session.state)
    }

    /// Returns the round, war, and win tallies.
    pub fn stats(&self) -> RoundStats {
        self.session.with(|session| session.stats)
    }

    /// Returns the number of cards in the given side's deck.
    pub fn cards_remaining(&self, side: Side) -> usize {
        self.session.with(|session| match side {
            Side::Player => session.player.len(),
            Side::Opponent => session.opponent.len(),
        })
    }

    /// Returns a copy of the given side's deck, top card first.
    pub fn deck(&self, side: Side) -> Deck {
        self.session.with(|session| match side {
            Side::Player => session.player.clone(),
            Side::Opponent => session.opponent.clone(),
        })
    }

    /// Returns a copy of the war pile.
    pub fn war_pile(&self) -> WarPile {
        self.session.with(|session| session.pile.clone())
    }

    /// Returns whether a war is waiting to be continued or fought.
    pub fn is_war_active(&self) -> bool {
        self.session.with(|session| !session.pile.is_empty())
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state() {
            GameState::GameOver { winner, .. } => winner,
            _ => None,
        }
    }

    /// Returns a read-only view of the whole game for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.session.with(|session| {
            Snapshot::new(
                session.state,
                &session.player,
                &session.opponent,
                &session.pile,
                session.stats,
            )
        })
    }
}
