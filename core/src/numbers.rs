//! Shape rules shared by tickets, winning numbers and the bonus ball.

use crate::error::ValidationError;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const NUMBERS_PER_TICKET: usize = 6;

/// Checks that a single value lies in `MIN_NUMBER..=MAX_NUMBER`.
pub fn check_number(value: i64) -> Result<u8, ValidationError> {
    u8::try_from(value)
        .ok()
        .filter(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n))
        .ok_or(ValidationError::OutOfRange(value))
}

/// Checks count, range and uniqueness, returning the numbers sorted ascending.
pub fn check_numbers(values: &[u8]) -> Result<[u8; NUMBERS_PER_TICKET], ValidationError> {
    let numbers: [u8; NUMBERS_PER_TICKET] =
        values.try_into().map_err(|_| ValidationError::WrongCount {
            expected: NUMBERS_PER_TICKET,
            actual: values.len(),
        })?;

    for &n in &numbers {
        check_number(i64::from(n))?;
    }

    if let Some(dup) = find_duplicate(&numbers) {
        return Err(ValidationError::Duplicate(i64::from(dup)));
    }

    let mut sorted = numbers;
    sorted.sort_unstable();
    Ok(sorted)
}

/// Returns the smallest value that occurs more than once.
pub fn find_duplicate<T: Ord + Copy>(values: &[T]) -> Option<T> {
    let mut sorted: Vec<T> = values.to_vec();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .find(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
