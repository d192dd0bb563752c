use crate::error::TransitionError;
use crate::outcome::{RoundOutcome, Side, leader};
use crate::pacing::Pacer;
use crate::war::{Battle, award, commit_war, draw_battle, exhaust};

use super::{Game, GameState, RoundState, Session};

/// What happened when cards were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Two face-up cards are on the table awaiting [`Game::resolve`].
    Battle(Battle),
    /// A war could not continue; `winner` took every remaining card.
    Exhausted {
        /// The side that took the cards.
        winner: Side,
        /// Number of cards it received.
        cards_won: usize,
    },
}

fn reject<T>(error: TransitionError) -> Result<T, TransitionError> {
    log::trace!("rejected: {error}");
    Err(error)
}

impl Session {
    fn finish(&mut self, revealed: Option<Battle>) {
        let winner = leader(self.player.len(), self.opponent.len());
        self.state = GameState::GameOver { winner, revealed };
        match winner {
            Some(side) => log::info!(
                "game over after {} rounds: {side} wins with {} cards",
                self.stats.rounds,
                self.player.len() + self.opponent.len()
            ),
            None => log::info!("game over after {} rounds: no cards left", self.stats.rounds),
        }
    }

    fn draw(&mut self) -> Result<Draw, TransitionError> {
        match self.state {
            GameState::NotStarted => return reject(TransitionError::NotStarted),
            GameState::GameOver { .. } => return reject(TransitionError::GameOver),
            GameState::InProgress(RoundState::BattlePending(_) | RoundState::Revealed { .. }) => {
                return reject(TransitionError::BattlePending);
            }
            GameState::InProgress(RoundState::Idle) => {}
        }

        self.stats.rounds += 1;
        let contested = !self.pile.is_empty();
        let battle = if contested {
            commit_war(&mut self.player, &mut self.opponent, &mut self.pile)
        } else {
            draw_battle(&mut self.player, &mut self.opponent)
        };

        if let Some(battle) = battle {
            log::debug!(
                "round {}: {} vs {}{}",
                self.stats.rounds,
                battle.player,
                battle.opponent,
                if contested { " (war)" } else { "" }
            );
            self.state = GameState::InProgress(RoundState::BattlePending(battle));
            return Ok(Draw::Battle(battle));
        }

        let (winner, cards_won) = exhaust(&mut self.player, &mut self.opponent, &mut self.pile);
        if contested {
            self.stats.record_win(winner);
        }
        log::debug!(
            "round {}: war cannot continue, {winner} takes {cards_won} cards",
            self.stats.rounds
        );
        self.finish(None);
        Ok(Draw::Exhausted { winner, cards_won })
    }

    fn resolve(&mut self) -> Result<RoundOutcome, TransitionError> {
        let battle = match self.state {
            GameState::InProgress(RoundState::BattlePending(battle)) => battle,
            GameState::NotStarted => return reject(TransitionError::NotStarted),
            GameState::GameOver { .. } => return reject(TransitionError::GameOver),
            GameState::InProgress(_) => return reject(TransitionError::NoBattlePending),
        };

        let outcome = RoundOutcome::from(battle.comparison());
        match outcome {
            RoundOutcome::Won(winner) => {
                let won = award(
                    winner,
                    battle,
                    &mut self.player,
                    &mut self.opponent,
                    &mut self.pile,
                );
                self.stats.record_win(winner);
                log::debug!("{winner} wins {won} cards");

                if self.player.is_empty() || self.opponent.is_empty() {
                    self.finish(Some(battle));
                    return Ok(outcome);
                }
            }
            RoundOutcome::War => {
                self.stats.wars += 1;
                self.pile.push_battle(battle);
                log::debug!("war! {} cards at stake", self.pile.len());
            }
        }

        self.state = GameState::InProgress(RoundState::Revealed { battle, outcome });
        Ok(outcome)
    }

    fn clear_table(&mut self) -> Result<(), TransitionError> {
        match self.state {
            GameState::InProgress(RoundState::Revealed { .. }) => {
                self.state = GameState::InProgress(RoundState::Idle);
                Ok(())
            }
            GameState::GameOver {
                winner,
                revealed: Some(_),
            } => {
                self.state = GameState::GameOver {
                    winner,
                    revealed: None,
                };
                Ok(())
            }
            GameState::NotStarted => reject(TransitionError::NotStarted),
            GameState::InProgress(RoundState::BattlePending(_)) => {
                reject(TransitionError::BattlePending)
            }
            GameState::InProgress(RoundState::Idle) | GameState::GameOver { .. } => {
                reject(TransitionError::NothingRevealed)
            }
        }
    }
}

impl Game {
    /// Draws the next pair of face-up cards.
    ///
    /// Outside a war this is the top card of each deck. During a war each
    /// side first puts one card face down on the war pile. If a side cannot
    /// supply both cards, the war ends at once and the side with more cards
    /// takes everything, which ends the game.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if the game has not
    /// started, is over, or already has a battle in flight.
    pub fn draw_round(&self) -> Result<Draw, TransitionError> {
        self.session.with(Session::draw)
    }

    /// Compares the cards in play and settles the battle.
    ///
    /// A decisive battle gives both cards and the war pile to the winner. A tie
    /// moves both cards to the war pile. The cards stay on display until
    /// [`Game::clear_table`].
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if no battle is pending.
    pub fn resolve(&self) -> Result<RoundOutcome, TransitionError> {
        self.session.with(Session::resolve)
    }

    /// Removes the revealed battle from the table, allowing the next draw.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the game unchanged, if nothing is revealed.
    pub fn clear_table(&self) -> Result<(), TransitionError> {
        self.session.with(Session::clear_table)
    }

    /// Plays one round: draw, pause, resolve, pause, clear.
    ///
    /// The pauses last [`GameOptions::pacing`](crate::GameOptions::pacing) and
    /// are performed by `pacer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw is rejected, or if the game was restarted
    /// during a pause.
    pub fn play_round<P: Pacer + ?Sized>(&self, pacer: &P) -> Result<RoundOutcome, TransitionError> {
        let delay = self.options.pacing();

        if let Draw::Exhausted { winner, .. } = self.draw_round()? {
            return Ok(RoundOutcome::Won(winner));
        }
        pacer.pause(delay);
        let outcome = self.resolve()?;
        pacer.pause(delay);
        self.clear_table()?;

        Ok(outcome)
    }

    /// Plays rounds until the game is over or `round_limit` rounds were played.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is rejected.
    pub fn play_to_end<P: Pacer + ?Sized>(
        &self,
        pacer: &P,
        round_limit: usize,
    ) -> Result<usize, TransitionError> {
        let mut played = 0;
        while played < round_limit && !self.state().is_over() {
            self.play_round(pacer)?;
            played += 1;
        }
        Ok(played)
    }
}
