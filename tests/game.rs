//! Game session integration tests.

use std::cell::Cell;
use std::time::Duration;

use warrs::{
    Battle, Card, DECK_SIZE, Deck, Draw, Game, GameOptions, GameState, Immediate, Rank,
    RoundOutcome, RoundState, RoundStats, Side, Standing, Suit, TransitionError,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_with(player: &[Card], opponent: &[Card]) -> Game {
    let game = Game::new(GameOptions::default().with_pacing_ms(0), 1);
    game.start_with_decks(Deck::from(player.to_vec()), Deck::from(opponent.to_vec()));
    game
}

#[test]
fn new_game_is_not_started() {
    let game = Game::new(GameOptions::default(), 3);
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.draw_round(), Err(TransitionError::NotStarted));
    assert_eq!(game.resolve(), Err(TransitionError::NotStarted));
    assert_eq!(game.clear_table(), Err(TransitionError::NotStarted));

    let snapshot = game.snapshot();
    assert!(!snapshot.started);
    assert_eq!(snapshot.standing(), None);
}

#[test]
fn start_deals_26_each() {
    let game = Game::new(GameOptions::default(), 42);
    game.start();

    assert_eq!(game.state(), GameState::InProgress(RoundState::Idle));
    assert_eq!(game.cards_remaining(Side::Player), 26);
    assert_eq!(game.cards_remaining(Side::Opponent), 26);
    assert_eq!(game.stats(), RoundStats::default());
    assert!(!game.is_war_active());
    assert_eq!(game.snapshot().total_cards(), DECK_SIZE);
}

#[test]
fn same_seed_deals_same_decks() {
    let first = Game::new(GameOptions::default(), 2024);
    let second = Game::new(GameOptions::default(), 2024);
    first.start();
    second.start();

    assert_eq!(first.deck(Side::Player), second.deck(Side::Player));
    assert_eq!(first.deck(Side::Opponent), second.deck(Side::Opponent));
}

#[test]
fn ace_against_two_and_three_ends_with_player_win() {
    let ace = card(Suit::Spades, Rank::Ace);
    let two = card(Suit::Hearts, Rank::Two);
    let three = card(Suit::Hearts, Rank::Three);
    let game = game_with(&[ace], &[two, three]);

    assert_eq!(game.draw_round(), Ok(Draw::Battle(Battle::new(ace, two))));
    assert_eq!(game.resolve(), Ok(RoundOutcome::Won(Side::Player)));
    assert_eq!(game.deck(Side::Player).to_vec(), vec![ace, two]);
    assert_eq!(game.deck(Side::Opponent).to_vec(), vec![three]);
    game.clear_table().unwrap();

    assert_eq!(game.draw_round(), Ok(Draw::Battle(Battle::new(ace, three))));
    assert_eq!(game.resolve(), Ok(RoundOutcome::Won(Side::Player)));
    assert_eq!(game.deck(Side::Player).to_vec(), vec![two, ace, three]);
    assert!(game.deck(Side::Opponent).is_empty());

    assert_eq!(
        game.state(),
        GameState::GameOver {
            winner: Some(Side::Player),
            revealed: Some(Battle::new(ace, three)),
        }
    );
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.draw_round(), Err(TransitionError::GameOver));

    let stats = game.stats();
    assert_eq!(stats.rounds, 2);
    assert_eq!(stats.player_wins, 2);
    assert_eq!(stats.opponent_wins, 0);
    assert_eq!(stats.wars, 0);

    let snapshot = game.snapshot();
    assert!(snapshot.game_over);
    assert_eq!(snapshot.outcome, Some(RoundOutcome::Won(Side::Player)));
    assert_eq!(snapshot.standing(), Some(Standing::Won(Side::Player)));

    game.clear_table().unwrap();
    assert_eq!(game.clear_table(), Err(TransitionError::NothingRevealed));
    assert_eq!(game.snapshot().revealed, None);
}

#[test]
fn second_draw_is_rejected_while_battle_pending() {
    let game = game_with(
        &[card(Suit::Hearts, Rank::King), card(Suit::Hearts, Rank::Four)],
        &[card(Suit::Clubs, Rank::Ten), card(Suit::Clubs, Rank::Five)],
    );

    game.draw_round().unwrap();
    let pending = game.snapshot();

    assert_eq!(game.draw_round(), Err(TransitionError::BattlePending));
    assert_eq!(game.snapshot(), pending);
    assert_eq!(game.stats().rounds, 1);
    assert_eq!(game.cards_remaining(Side::Player), 1);
    assert_eq!(game.cards_remaining(Side::Opponent), 1);

    game.resolve().unwrap();
    assert_eq!(game.draw_round(), Err(TransitionError::BattlePending));
    assert_eq!(game.resolve(), Err(TransitionError::NoBattlePending));

    game.clear_table().unwrap();
    assert!(game.draw_round().is_ok());
    assert_eq!(game.stats().rounds, 2);
}

#[test]
fn clear_table_before_resolve_is_rejected() {
    let game = game_with(
        &[card(Suit::Hearts, Rank::King)],
        &[card(Suit::Clubs, Rank::Ten)],
    );

    assert_eq!(game.clear_table(), Err(TransitionError::NothingRevealed));
    game.draw_round().unwrap();
    assert_eq!(game.clear_table(), Err(TransitionError::BattlePending));
}

#[test]
fn tie_starts_war_and_next_draw_continues_it() {
    let game = game_with(
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::King),
            card(Suit::Diamonds, Rank::Two),
        ],
        &[
            card(Suit::Spades, Rank::Five),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Hearts, Rank::Seven),
        ],
    );

    game.draw_round().unwrap();
    assert_eq!(game.resolve(), Ok(RoundOutcome::War));

    let snapshot = game.snapshot();
    assert!(snapshot.war_active);
    assert_eq!(snapshot.war_pile, 2);
    assert_eq!(snapshot.outcome, Some(RoundOutcome::War));
    assert!(snapshot.battle_pending);
    assert_eq!(snapshot.total_cards(), 8);
    assert_eq!(game.stats().wars, 1);

    game.clear_table().unwrap();
    let draw = game.draw_round().unwrap();
    assert_eq!(
        draw,
        Draw::Battle(Battle::new(
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::Four),
        ))
    );

    let snapshot = game.snapshot();
    assert_eq!(snapshot.war_pile, 4);
    assert_eq!(snapshot.cards_in_play(), 2);
    assert_eq!(snapshot.total_cards(), 8);

    assert_eq!(game.resolve(), Ok(RoundOutcome::Won(Side::Player)));
    assert!(!game.is_war_active());
    assert_eq!(
        game.deck(Side::Player).to_vec(),
        vec![
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Three),
        ]
    );
    assert_eq!(
        game.deck(Side::Opponent).to_vec(),
        vec![card(Suit::Hearts, Rank::Seven)]
    );

    let stats = game.stats();
    assert_eq!(stats.rounds, 2);
    assert_eq!(stats.wars, 1);
    assert_eq!(stats.player_wins, 1);
}

#[test]
fn war_without_enough_cards_ends_the_game() {
    let game = game_with(
        &[card(Suit::Hearts, Rank::Eight)],
        &[
            card(Suit::Spades, Rank::Eight),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Clubs, Rank::Five),
        ],
    );

    game.draw_round().unwrap();
    assert_eq!(game.resolve(), Ok(RoundOutcome::War));
    assert!(!game.state().is_over());
    game.clear_table().unwrap();

    assert_eq!(
        game.draw_round(),
        Ok(Draw::Exhausted {
            winner: Side::Opponent,
            cards_won: 2,
        })
    );
    assert_eq!(
        game.state(),
        GameState::GameOver {
            winner: Some(Side::Opponent),
            revealed: None,
        }
    );
    assert_eq!(game.cards_remaining(Side::Player), 0);
    assert_eq!(game.cards_remaining(Side::Opponent), 6);
    assert!(!game.is_war_active());
    assert_eq!(game.stats().opponent_wins, 1);
    assert_eq!(game.stats().rounds, 2);
}

#[test]
fn restart_discards_pending_battle() {
    let game = Game::new(GameOptions::default(), 9);
    game.start();
    game.draw_round().unwrap();
    assert!(game.state().is_battle_pending());

    game.restart();
    assert_eq!(game.state(), GameState::InProgress(RoundState::Idle));
    assert_eq!(game.cards_remaining(Side::Player), 26);
    assert_eq!(game.cards_remaining(Side::Opponent), 26);
    assert_eq!(game.stats(), RoundStats::default());
    assert_eq!(game.resolve(), Err(TransitionError::NoBattlePending));
}

#[test]
fn restart_after_game_over() {
    let game = game_with(
        &[card(Suit::Hearts, Rank::Ace)],
        &[card(Suit::Clubs, Rank::Two)],
    );
    game.play_round(&Immediate).unwrap();
    assert!(game.state().is_over());

    game.restart();
    let snapshot = game.snapshot();
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.player_cards, 26);
    assert_eq!(snapshot.opponent_cards, 26);
    assert_eq!(snapshot.stats, RoundStats::default());
}

#[test]
fn empty_injected_deck_is_game_over() {
    let game = game_with(&[], &[card(Suit::Clubs, Rank::Two)]);
    assert_eq!(game.winner(), Some(Side::Opponent));
    assert_eq!(game.draw_round(), Err(TransitionError::GameOver));

    let game = game_with(&[], &[]);
    assert!(game.state().is_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn play_round_pauses_with_configured_delay() {
    let game = Game::new(GameOptions::default().with_pacing_ms(250), 5);
    game.start();

    let pauses = Cell::new(0);
    let pacer = |delay: Duration| {
        assert_eq!(delay, Duration::from_millis(250));
        pauses.set(pauses.get() + 1);
    };

    game.play_round(&pacer).unwrap();
    assert_eq!(pauses.get(), 2);
    assert_eq!(game.stats().rounds, 1);
    assert!(!game.state().is_battle_pending());
}

#[test]
fn play_to_end_respects_round_limit() {
    let game = Game::new(GameOptions::default().with_pacing_ms(0), 11);
    game.start();

    let played = game.play_to_end(&Immediate, 10).unwrap();
    assert_eq!(played, 10);
    assert_eq!(game.stats().rounds, 10);
    assert_eq!(game.snapshot().total_cards(), DECK_SIZE);
}

#[test]
fn play_to_end_stops_at_game_over() {
    let game = game_with(
        &[card(Suit::Hearts, Rank::Ace), card(Suit::Hearts, Rank::King)],
        &[card(Suit::Clubs, Rank::Two), card(Suit::Clubs, Rank::Three)],
    );

    let played = game.play_to_end(&Immediate, 100).unwrap();
    assert_eq!(played, 2);
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.cards_remaining(Side::Player), 4);
}

#[test]
fn snapshot_standing_and_probability() {
    let mut player = vec![card(Suit::Hearts, Rank::Ace); 20];
    player.push(card(Suit::Spades, Rank::King));
    let opponent = vec![card(Suit::Clubs, Rank::Two); 4];
    let game = game_with(&player, &opponent);

    let snapshot = game.snapshot();
    assert_eq!(
        snapshot.standing(),
        Some(Standing::StrongLead {
            leader: Side::Player,
            margin: 17,
        })
    );
    assert!((snapshot.win_probability() - 21.0 / 25.0).abs() < f64::EPSILON);
    assert_eq!(
        snapshot.standing().map(|standing| standing.to_string()),
        Some("player has a strong lead of 17 cards".to_string())
    );

    let game = game_with(
        &[card(Suit::Hearts, Rank::Ace); 3],
        &[card(Suit::Clubs, Rank::Two); 9],
    );
    assert_eq!(
        game.snapshot().standing(),
        Some(Standing::Ahead {
            leader: Side::Opponent,
            margin: 6,
        })
    );

    let game = game_with(
        &[card(Suit::Hearts, Rank::Ace); 4],
        &[card(Suit::Clubs, Rank::Two); 4],
    );
    assert_eq!(game.snapshot().standing(), Some(Standing::Close));
    assert!((game.snapshot().win_probability() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn options_builder_sets_pacing() {
    let options = GameOptions::default();
    assert_eq!(options.pacing_ms, 1000);

    let options = options.with_pacing_ms(40);
    assert_eq!(options.pacing(), Duration::from_millis(40));
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serializes_for_presentation() {
    let game = game_with(
        &[card(Suit::Hearts, Rank::Ten)],
        &[card(Suit::Spades, Rank::Jack)],
    );
    game.draw_round().unwrap();

    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(value["player_cards"], 0);
    assert_eq!(value["battle_pending"], true);
    assert_eq!(value["in_play"]["player"]["suit"], "hearts");
    assert_eq!(value["in_play"]["opponent"]["rank"], "Jack");
}
