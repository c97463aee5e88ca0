//! # Ticket
//!
//! A single lottery entry. Construction is the only place its shape is checked,
//! so every `Ticket` in circulation holds six distinct numbers in `1..=45`,
//! sorted ascending.

use std::fmt;

use crate::error::ValidationError;
use crate::numbers::{self, NUMBERS_PER_TICKET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket {
    numbers: [u8; NUMBERS_PER_TICKET],
}

impl Ticket {
    pub fn new(numbers: &[u8]) -> Result<Self, ValidationError> {
        let numbers = numbers::check_numbers(numbers)?;
        Ok(Self { numbers })
    }

    /// Wraps numbers drawn without replacement, which already satisfy the shape rules.
    pub(crate) fn from_drawn(mut numbers: [u8; NUMBERS_PER_TICKET]) -> Self {
        numbers.sort_unstable();
        debug_assert!(numbers::check_numbers(&numbers).is_ok());
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Counts how many of `others` appear on this ticket.
    pub fn match_count(&self, others: &[u8]) -> usize {
        others.iter().filter(|&&n| self.contains(n)).count()
    }
}

impl TryFrom<Vec<u8>> for Ticket {
    type Error = ValidationError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Ticket::new(&numbers)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.numbers.iter().map(u8::to_string).collect();
        write!(f, "[{}]", joined.join(", "))
    }
}
