//! Change notifications for presentation layers.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealError, PlayError};
use crate::result::{PassOutcome, PlayOutcome};

use super::Game;

/// Receives a read-only view of the game after every accepted transition.
///
/// Rejected plays and passes are not reported.
pub trait StateObserver {
    /// Called after the game state changed.
    fn on_state_changed(&mut self, game: &Game);

    /// Called once when a player empties their hand.
    fn on_game_over(&mut self, winner: usize) {
        let _ = winner;
    }
}

impl<F: FnMut(&Game)> StateObserver for F {
    fn on_state_changed(&mut self, game: &Game) {
        self(game);
    }
}

/// A [`Game`] paired with an observer that is notified of each change.
///
/// # Example
///
/// ```
/// use doudizhu::{Game, GameOptions, ObservedGame};
///
/// let mut renders = 0;
/// let mut table = ObservedGame::new(Game::new(GameOptions::default(), 7), |_: &Game| {
///     renders += 1;
/// });
/// table.start().unwrap();
/// drop(table);
/// assert_eq!(renders, 1);
/// ```
pub struct ObservedGame<O> {
    game: Game,
    observer: O,
}

impl<O: StateObserver> ObservedGame<O> {
    /// Wraps a game with an observer.
    pub const fn new(game: Game, observer: O) -> Self {
        Self { game, observer }
    }

    /// Returns the wrapped game.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the observer.
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Splits the pair back into the game and the observer.
    pub fn into_parts(self) -> (Game, O) {
        (self.game, self.observer)
    }

    fn notify(&mut self) {
        self.observer.on_state_changed(&self.game);
    }

    /// Starts the game, see [`Game::start`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::start`].
    pub fn start(&mut self) -> Result<(), DealError> {
        self.game.start()?;
        self.notify();
        Ok(())
    }

    /// Starts the game with a fixed deck, see [`Game::start_with_deck`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::start_with_deck`].
    pub fn start_with_deck(&mut self, cards: Vec<Card>) -> Result<(), DealError> {
        self.game.start_with_deck(cards)?;
        self.notify();
        Ok(())
    }

    /// Toggles a card in the selection, see [`Game::select`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::select`].
    pub fn select(&mut self, card: Card) -> Result<bool, PlayError> {
        let selected = self.game.select(card)?;
        self.notify();
        Ok(selected)
    }

    /// Clears the selection, see [`Game::clear_selection`].
    pub fn clear_selection(&mut self) {
        self.game.clear_selection();
        self.notify();
    }

    /// Plays cards, see [`Game::play`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::play`].
    pub fn play(&mut self, cards: &[Card]) -> Result<PlayOutcome, PlayError> {
        let outcome = self.game.play(cards)?;
        self.after_play(&outcome);
        Ok(outcome)
    }

    /// Plays the selected cards, see [`Game::play_selected`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::play_selected`].
    pub fn play_selected(&mut self) -> Result<PlayOutcome, PlayError> {
        let outcome = self.game.play_selected()?;
        self.after_play(&outcome);
        Ok(outcome)
    }

    /// Passes, see [`Game::pass`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::pass`].
    pub fn pass(&mut self) -> Result<PassOutcome, PlayError> {
        let outcome = self.game.pass()?;
        self.notify();
        Ok(outcome)
    }

    fn after_play(&mut self, outcome: &PlayOutcome) {
        self.notify();
        if let Some(winner) = outcome.winner {
            self.observer.on_game_over(winner);
        }
    }
}
