//! CLI War example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{
    Battle, Card, Draw, Game, GameOptions, Immediate, Pacer, RoundOutcome, Side, Sleep, Snapshot,
    Suit,
};

/// Round cap for auto-play, since some deals never finish.
const AUTO_PLAY_LIMIT: usize = 5000;

fn main() {
    env_logger::init();
    println!("War CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_pacing_ms(400);
    let game = Game::new(options, seed);
    game.start();

    loop {
        let snapshot = game.snapshot();
        print_status(&snapshot);

        if snapshot.game_over {
            match snapshot.winner {
                Some(side) => println!("Game over: {} wins.", side_label(side)),
                None => println!("Game over: no cards left."),
            }
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.restart();
                    continue;
                }
                _ => break,
            }
        }

        let prompt = if snapshot.war_active {
            "[Enter] continue the war, [a]uto, [r]estart, [q]uit: "
        } else {
            "[Enter] draw, [a]uto, [r]estart, [q]uit: "
        };

        match prompt_line(prompt).as_str() {
            "" | "d" | "draw" => play_one(&game, &Sleep),
            "a" | "auto" => match game.play_to_end(&Immediate, AUTO_PLAY_LIMIT) {
                Ok(played) => println!("Auto-played {played} rounds."),
                Err(err) => println!("Auto-play error: {err}"),
            },
            "r" | "restart" => {
                game.restart();
                println!("Reshuffled and dealt a new game.");
            }
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown command."),
        }
    }
}

fn play_one<P: Pacer>(game: &Game, pacer: &P) {
    let delay = game.options.pacing();

    let battle = match game.draw_round() {
        Ok(Draw::Battle(battle)) => battle,
        Ok(Draw::Exhausted { winner, cards_won }) => {
            println!(
                "{} cannot continue the war. {} takes {cards_won} cards!",
                side_label(winner.other()),
                side_label(winner)
            );
            return;
        }
        Err(err) => {
            println!("Draw error: {err}");
            return;
        }
    };

    print_battle(&battle);
    pacer.pause(delay);

    match game.resolve() {
        Ok(RoundOutcome::Won(side)) => println!("{} wins the battle.", side_label(side)),
        Ok(RoundOutcome::War) => println!("{}", colorize("WAR!", "33")),
        Err(err) => println!("Resolve error: {err}"),
    }
    pacer.pause(delay);

    if let Err(err) = game.clear_table() {
        println!("Clear error: {err}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_status(snapshot: &Snapshot) {
    let stats = snapshot.stats;
    println!(
        "\nRound {} | You: {} cards ({} wins) | Computer: {} cards ({} wins) | Wars: {}",
        stats.rounds,
        snapshot.player_cards,
        stats.player_wins,
        snapshot.opponent_cards,
        stats.opponent_wins,
        stats.wars
    );
    if snapshot.war_active {
        println!("War pile: {} cards", snapshot.war_pile);
    }
    if let Some(standing) = snapshot.standing() {
        println!(
            "Status: {standing} (your share {:.0}%)",
            snapshot.win_probability() * 100.0
        );
    }
}

fn print_battle(battle: &Battle) {
    println!(
        "You: {}   vs   Computer: {}",
        format_card(&battle.player),
        format_card(&battle.opponent)
    );
}

const fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "You",
        Side::Opponent => "Computer",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
