//! Question categories and the category wheel.

use core::fmt;

/// Question category.
///
/// The order of the variants is the order of the category wheel: board place
/// `p` asks from `Category::ALL[p % Category::COUNT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Pop culture.
    Pop,
    /// Science.
    Science,
    /// Sports.
    Sports,
    /// Rock music.
    Rock,
}

impl Category {
    /// Number of categories on the wheel.
    pub const COUNT: usize = 4;

    /// All categories in wheel order.
    pub const ALL: [Self; Self::COUNT] = [Self::Pop, Self::Science, Self::Sports, Self::Rock];

    /// Returns the category asked on the given board place.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::Category;
    ///
    /// assert_eq!(Category::from_position(0), Category::Pop);
    /// assert_eq!(Category::from_position(5), Category::Science);
    /// assert_eq!(Category::from_position(11), Category::Rock);
    /// ```
    #[must_use]
    pub const fn from_position(position: usize) -> Self {
        Self::ALL[position % Self::COUNT]
    }

    /// Returns the position of this category on the wheel.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pop => 0,
            Self::Science => 1,
            Self::Sports => 2,
            Self::Rock => 3,
        }
    }

    /// Returns the display name of this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pop => "Pop",
            Self::Science => "Science",
            Self::Sports => "Sports",
            Self::Rock => "Rock",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
