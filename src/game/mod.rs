//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::Card;
use crate::deck::{self, Deal, PLAYER_COUNT};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Play;

mod actions;
pub mod observer;
pub mod state;

pub use observer::{ObservedGame, StateObserver};
pub use state::GameState;

/// Returns the player seated after `player`.
const fn next_player(player: usize) -> usize {
    (player + 1) % PLAYER_COUNT
}

/// A three-player Dou Dizhu game that deals the deck and referees plays.
///
/// The game owns the deck, the three hands, and the trick on the table. Use
/// [`GameOptions`] to configure the rules.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Player hands, in seat order.
    pub hands: [Hand; PLAYER_COUNT],
    /// The deck in the order it was (or will be) dealt.
    deck: Vec<Card>,
    /// Cards held aside after dealing.
    bonus: Vec<Card>,
    /// Current game state.
    state: GameState,
    /// Player whose turn it is.
    current_player: usize,
    /// Combination to beat, `None` when the trick is open.
    last_played: Option<Play>,
    /// Player who made the most recent play.
    last_player: Option<usize>,
    /// Cards the current player has selected.
    selected: Vec<Card>,
    /// Consecutive passes since the last play.
    passes: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use doudizhu::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.start().unwrap();
    /// assert_eq!(game.state(), GameState::InProgress);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            hands: core::array::from_fn(|_| Hand::new()),
            deck: deck::standard_deck(),
            bonus: Vec::new(),
            state: GameState::WaitingToStart,
            current_player: options.first_player % PLAYER_COUNT,
            last_played: None,
            last_player: None,
            selected: Vec::new(),
            passes: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the deck and deals it.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt.
    pub fn start(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingToStart {
            return Err(DealError::InvalidState);
        }

        let mut cards = deck::standard_deck();
        deck::shuffle(&mut cards, &mut self.rng);
        self.deal_from(cards)
    }

    /// Deals the given deck as is, without shuffling.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt, or the deck is
    /// not exactly one full deck.
    pub fn start_with_deck(&mut self, cards: Vec<Card>) -> Result<(), DealError> {
        if self.state != GameState::WaitingToStart {
            return Err(DealError::InvalidState);
        }

        self.deal_from(cards)
    }

    fn deal_from(&mut self, cards: Vec<Card>) -> Result<(), DealError> {
        let Deal { hands, bonus } = deck::deal(&cards)?;

        self.hands = hands.map(Hand::from_cards);
        self.bonus = bonus.to_vec();
        self.deck = cards;
        self.current_player = self.options.first_player % PLAYER_COUNT;
        self.state = GameState::InProgress;

        info!(first_player = self.current_player, "cards dealt");

        Ok(())
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose turn it is.
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the hand of the specified player.
    ///
    /// Returns `None` if the index is not a seat at the table.
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns the cards held aside after dealing (empty before the deal).
    pub fn bonus_cards(&self) -> &[Card] {
        &self.bonus
    }

    /// Returns the deck in dealing order.
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the play to beat, or `None` if the current player leads.
    pub const fn last_played(&self) -> Option<&Play> {
        self.last_played.as_ref()
    }

    /// Returns the player who made the most recent play.
    pub const fn last_player(&self) -> Option<usize> {
        self.last_player
    }

    /// Returns the cards the current player has selected.
    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    /// Returns the winner, if the game is over.
    pub const fn winner(&self) -> Option<usize> {
        self.state.winner()
    }
}
