//! The per-category question supply.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;

use crate::category::Category;
use crate::error::DrawError;

/// Fixed supply of questions, one FIFO queue per category.
///
/// Queues are filled once at construction and only ever shrink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    queues: [VecDeque<String>; Category::COUNT],
}

impl QuestionBank {
    /// Creates a bank holding `per_category` questions in every category.
    ///
    /// Questions are named `"<category> Question <i>"` for `i` in
    /// `0..per_category`.
    ///
    /// # Example
    ///
    /// ```
    /// use trivrs::{Category, QuestionBank};
    ///
    /// let bank = QuestionBank::new(50);
    /// assert_eq!(bank.remaining(Category::Rock), 50);
    /// assert_eq!(bank.peek(Category::Rock), Some("Rock Question 0"));
    /// ```
    #[must_use]
    pub fn new(per_category: usize) -> Self {
        let queues = Category::ALL.map(|category| {
            (0..per_category)
                .map(|i| format!("{} Question {i}", category.name()))
                .collect()
        });

        Self { queues }
    }

    /// Removes and returns the oldest question of `category`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if the category has no questions left.
    pub fn draw(&mut self, category: Category) -> Result<String, DrawError> {
        self.queues[category.index()]
            .pop_front()
            .ok_or(DrawError::Exhausted { category })
    }

    /// Returns the next question of `category` without removing it.
    #[must_use]
    pub fn peek(&self, category: Category) -> Option<&str> {
        self.queues[category.index()].front().map(String::as_str)
    }

    /// Returns how many questions are left in `category`.
    #[must_use]
    pub fn remaining(&self, category: Category) -> usize {
        self.queues[category.index()].len()
    }
}
