use crate::error::ValidationError;
use crate::numbers::{self, NUMBERS_PER_TICKET};
use crate::ticket::Ticket;
use crate::tier::{self, PrizeTier};

/// The six drawn numbers plus a bonus ball that is not among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningSet {
    numbers: [u8; NUMBERS_PER_TICKET],
    bonus: u8,
}

impl WinningSet {
    pub fn new(numbers: &[u8], bonus: u8) -> Result<Self, ValidationError> {
        let numbers = numbers::check_numbers(numbers)?;
        let bonus = numbers::check_number(i64::from(bonus))?;

        if numbers.contains(&bonus) {
            return Err(ValidationError::BonusCollision(bonus));
        }

        Ok(Self { numbers, bonus })
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }

    pub fn classify(&self, ticket: &Ticket) -> PrizeTier {
        tier::classify(ticket, &self.numbers, self.bonus)
    }
}
