//! Error types for game operations.

use thiserror::Error;

use crate::category::Category;

/// Errors that can occur when drawing from the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Every question of the category has already been asked.
    #[error("no questions left in category {category}")]
    Exhausted {
        /// The category that ran dry.
        category: Category,
    },
}

/// Errors that can occur during a dice roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// The player landed on a category whose questions are used up.
    ///
    /// The move has already been applied when this is returned.
    #[error("no questions left in category {0}")]
    QuestionsExhausted(Category),
}

impl From<DrawError> for RollError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::Exhausted { category } => Self::QuestionsExhausted(category),
        }
    }
}
