use thiserror::Error;

use crate::numbers::{MAX_NUMBER, MIN_NUMBER};
use crate::purchase::{MAX_PURCHASE_AMOUNT, TICKET_PRICE};

/// Every way user-supplied lottery input can be malformed.
///
/// The `Display` output is meant to be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("the purchase amount must be greater than zero")]
    NonPositiveAmount,

    #[error("the purchase amount must be a multiple of {unit} won", unit = TICKET_PRICE)]
    NotMultipleOfPrice(u64),

    #[error("the purchase amount must not exceed {max} won", max = MAX_PURCHASE_AMOUNT)]
    AmountTooLarge(u64),

    #[error("expected {expected} numbers but got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("{0} is out of range, numbers must be between {min} and {max}", min = MIN_NUMBER, max = MAX_NUMBER)]
    OutOfRange(i64),

    #[error("{0} appears more than once")]
    Duplicate(i64),

    #[error("the bonus number {0} is already one of the winning numbers")]
    BonusCollision(u8),

    #[error("at least one ticket is required")]
    NoTickets,
}
