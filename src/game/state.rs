//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards have not been dealt yet.
    WaitingToStart,
    /// Players take turns playing or passing.
    InProgress,
    /// A player emptied their hand.
    Finished {
        /// The player who won.
        winner: usize,
    },
}

impl GameState {
    /// Returns the winner, if the game is finished.
    #[must_use]
    pub const fn winner(self) -> Option<usize> {
        match self {
            Self::Finished { winner } => Some(winner),
            Self::WaitingToStart | Self::InProgress => None,
        }
    }
}
