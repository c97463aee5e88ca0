//! # Input Validation
//!
//! Turns raw lines typed by the user into validated domain values. Every function
//! either returns a value the engine can consume directly or a [`ValidationError`]
//! the shell can show before prompting again.

use tracing::debug;

use crate::error::ValidationError;
use crate::numbers::{self, NUMBERS_PER_TICKET};
use crate::purchase::Purchase;

const SEPARATOR: char = ',';

/// Parses a single integer, ignoring surrounding whitespace.
pub fn parse_integer(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))
}

pub fn purchase_amount(raw: &str) -> Result<Purchase, ValidationError> {
    let amount = parse_integer(raw)?;
    let amount = u64::try_from(amount).map_err(|_| ValidationError::NonPositiveAmount)?;
    Purchase::from_amount(amount).inspect_err(|e| debug!(amount, "rejected purchase: {e}"))
}

/// Parses a comma separated list such as `1,2,3,4,5,6`.
///
/// Duplicates are reported before the count, and the count before ranges.
pub fn winning_numbers(raw: &str) -> Result<Vec<u8>, ValidationError> {
    let values: Vec<i64> = raw
        .split(SEPARATOR)
        .map(parse_integer)
        .collect::<Result<_, _>>()?;

    if let Some(dup) = numbers::find_duplicate(&values) {
        return Err(ValidationError::Duplicate(dup));
    }

    if values.len() != NUMBERS_PER_TICKET {
        return Err(ValidationError::WrongCount {
            expected: NUMBERS_PER_TICKET,
            actual: values.len(),
        });
    }

    values.into_iter().map(numbers::check_number).collect()
}

pub fn bonus_number(raw: &str, winning: &[u8]) -> Result<u8, ValidationError> {
    let bonus = numbers::check_number(parse_integer(raw)?)?;
    if winning.contains(&bonus) {
        return Err(ValidationError::BonusCollision(bonus));
    }
    Ok(bonus)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
