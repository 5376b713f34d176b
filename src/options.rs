//! Game configuration options.

/// Configuration options for a trivia game.
///
/// The defaults are the classic table rules: up to 6 players, at least 2 to
/// play, 12 board places, 50 questions per category and 6 gold coins to win.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use trivrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_players(4)
///     .with_winning_purse(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Maximum number of seats at the table.
    pub max_players: usize,
    /// Minimum number of players before dice may be rolled.
    pub min_players: usize,
    /// Exact purse value that wins the game.
    pub winning_purse: u32,
    /// Number of places on the circular board.
    /// A value of 0 is treated as 1.
    pub board_size: usize,
    /// Number of questions generated for each category.
    pub questions_per_category: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_players: 6,
            min_players: 2,
            winning_purse: 6,
            board_size: 12,
            questions_per_category: 50,
        }
    }
}

impl GameOptions {
    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(3);
    /// assert_eq!(options.max_players, 3);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the minimum number of players needed to play.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Sets the purse value that wins the game.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_purse(10);
    /// assert_eq!(options.winning_purse, 10);
    /// ```
    #[must_use]
    pub const fn with_winning_purse(mut self, purse: u32) -> Self {
        self.winning_purse = purse;
        self
    }

    /// Sets the number of board places.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_board_size(8);
    /// assert_eq!(options.board_size, 8);
    /// ```
    #[must_use]
    pub const fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the number of questions in each category.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_questions_per_category(2);
    /// assert_eq!(options.questions_per_category, 2);
    /// ```
    #[must_use]
    pub const fn with_questions_per_category(mut self, count: usize) -> Self {
        self.questions_per_category = count;
        self
    }

    /// Returns the board size actually used for movement.
    pub(crate) const fn places(&self) -> usize {
        if self.board_size == 0 { 1 } else { self.board_size }
    }
}
