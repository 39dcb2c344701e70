use tracing::{debug, info};

use crate::card::Card;
use crate::deck::PLAYER_COUNT;
use crate::error::PlayError;
use crate::pattern::{self, Combination};
use crate::result::{PassOutcome, Play, PlayOutcome};

use super::{Game, GameState, next_player};

impl Game {
    fn ensure_in_progress(&self) -> Result<(), PlayError> {
        match self.state {
            GameState::WaitingToStart => Err(PlayError::NotStarted),
            GameState::Finished { .. } => Err(PlayError::GameOver),
            GameState::InProgress => Ok(()),
        }
    }

    /// Checks whether the current player may play `cards` without changing
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, no cards are given,
    /// a card is given twice or is not held by the current player, the cards
    /// form no recognized combination, or the combination does not beat the
    /// last play.
    pub fn check_play(&self, cards: &[Card]) -> Result<Combination, PlayError> {
        self.ensure_in_progress()?;

        if cards.is_empty() {
            return Err(PlayError::Empty);
        }

        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(PlayError::DuplicateCard(*card));
            }
        }

        if let Some(card) = self.hands[self.current_player].find_missing(cards) {
            return Err(PlayError::CardNotInHand(card));
        }

        let previous = self.last_played.as_ref().map(|play| &play.combination);
        pattern::check_play(cards, previous, &self.options)
    }

    /// Returns whether the current player may play `cards`.
    pub fn can_play(&self, cards: &[Card]) -> bool {
        self.check_play(cards).is_ok()
    }

    /// Plays cards for the current player.
    ///
    /// On success the cards leave the player's hand, become the play to beat,
    /// and the turn moves to the next player. A player who empties their hand
    /// wins and ends the game.
    ///
    /// # Errors
    ///
    /// Returns the reason from [`Game::check_play`]. A rejected play leaves
    /// the game untouched.
    pub fn play(&mut self, cards: &[Card]) -> Result<PlayOutcome, PlayError> {
        let combination = self.check_play(cards).inspect_err(|err| {
            debug!(player = self.current_player, %err, "play rejected");
        })?;

        let player = self.current_player;
        let hand = &mut self.hands[player];
        hand.remove_cards(cards);
        let cards_left = hand.len();

        let play = Play {
            player,
            cards: cards.to_vec(),
            combination,
        };

        self.last_played = Some(play.clone());
        self.last_player = Some(player);
        self.passes = 0;
        self.selected.clear();
        self.current_player = next_player(player);

        debug!(
            player,
            kind = combination.kind.name(),
            length = combination.length,
            cards_left,
            "play accepted"
        );

        let winner = (cards_left == 0).then_some(player);
        if let Some(winner) = winner {
            self.state = GameState::Finished { winner };
            info!(winner, "game over");
        }

        Ok(PlayOutcome {
            play,
            cards_left,
            next_player: self.current_player,
            winner,
        })
    }

    /// Plays the current player's selected cards.
    ///
    /// The selection is kept if the play is rejected.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::play`].
    pub fn play_selected(&mut self) -> Result<PlayOutcome, PlayError> {
        let cards = self.selected.clone();
        self.play(&cards)
    }

    /// Passes the turn without playing.
    ///
    /// When both other players pass in a row, the trick is over and the
    /// player who made the last play leads again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or the current player
    /// leads the trick.
    pub fn pass(&mut self) -> Result<PassOutcome, PlayError> {
        self.ensure_in_progress()?;

        if self.last_played.is_none() {
            return Err(PlayError::CannotPassLead);
        }

        let player = self.current_player;
        self.passes += 1;
        self.selected.clear();
        self.current_player = next_player(player);

        let trick_over = self.passes >= PLAYER_COUNT - 1;
        if trick_over {
            self.last_played = None;
            self.passes = 0;
            debug!(leader = self.current_player, "trick over");
        } else {
            debug!(player, "pass");
        }

        Ok(PassOutcome {
            player,
            next_player: self.current_player,
            trick_over,
        })
    }

    /// Toggles a card in the current player's selection.
    ///
    /// Returns `true` if the card is now selected, `false` if it was
    /// deselected.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or the current player
    /// does not hold the card.
    pub fn select(&mut self, card: Card) -> Result<bool, PlayError> {
        self.ensure_in_progress()?;

        if !self.hands[self.current_player].contains(&card) {
            return Err(PlayError::CardNotInHand(card));
        }

        if let Some(index) = self.selected.iter().position(|c| *c == card) {
            self.selected.remove(index);
            Ok(false)
        } else {
            self.selected.push(card);
            Ok(true)
        }
    }

    /// Clears the current player's selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
