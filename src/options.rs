//! Game configuration options.

/// Configuration options for a Dou Dizhu game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use doudizhu::GameOptions;
///
/// let options = GameOptions::default()
///     .with_min_sequence_len(6)
///     .with_two_in_sequence(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Minimum number of cards in a sequence.
    pub min_sequence_len: usize,
    /// Whether a 2 may extend a sequence directly above the Ace.
    pub two_in_sequence: bool,
    /// Whether the two jokers together form a rocket that beats everything.
    pub rocket: bool,
    /// Player who makes the first play (0..3).
    pub first_player: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_sequence_len: 5,
            two_in_sequence: true,
            rocket: false,
            first_player: 0,
        }
    }
}

impl GameOptions {
    /// Sets the minimum sequence length.
    ///
    /// Values below 2 are treated as 2 when classifying.
    ///
    /// # Example
    ///
    /// ```
    /// use doudizhu::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_sequence_len(6);
    /// assert_eq!(options.min_sequence_len, 6);
    /// ```
    #[must_use]
    pub const fn with_min_sequence_len(mut self, len: usize) -> Self {
        self.min_sequence_len = len;
        self
    }

    /// Sets whether a 2 may appear at the top of a sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use doudizhu::GameOptions;
    ///
    /// let options = GameOptions::default().with_two_in_sequence(false);
    /// assert_eq!(options.two_in_sequence, false);
    /// ```
    #[must_use]
    pub const fn with_two_in_sequence(mut self, allowed: bool) -> Self {
        self.two_in_sequence = allowed;
        self
    }

    /// Sets whether the joker pair is recognized as a rocket.
    ///
    /// # Example
    ///
    /// ```
    /// use doudizhu::GameOptions;
    ///
    /// let options = GameOptions::default().with_rocket(true);
    /// assert_eq!(options.rocket, true);
    /// ```
    #[must_use]
    pub const fn with_rocket(mut self, enabled: bool) -> Self {
        self.rocket = enabled;
        self
    }

    /// Sets the player who opens the game.
    ///
    /// The index is taken modulo the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use doudizhu::GameOptions;
    ///
    /// let options = GameOptions::default().with_first_player(2);
    /// assert_eq!(options.first_player, 2);
    /// ```
    #[must_use]
    pub const fn with_first_player(mut self, player: usize) -> Self {
        self.first_player = player;
        self
    }
}
