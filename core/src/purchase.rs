use crate::error::ValidationError;

/// Price of one ticket in won.
pub const TICKET_PRICE: u64 = 1_000;

/// Largest accepted amount: `i32::MAX` rounded down to a whole ticket.
pub const MAX_PURCHASE_AMOUNT: u64 = (i32::MAX as u64 / TICKET_PRICE) * TICKET_PRICE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    ticket_count: u64,
}

impl Purchase {
    /// Converts a spent amount into a ticket count.
    pub fn from_amount(amount: u64) -> Result<Self, ValidationError> {
        if amount == 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if amount % TICKET_PRICE != 0 {
            return Err(ValidationError::NotMultipleOfPrice(amount));
        }
        if amount > MAX_PURCHASE_AMOUNT {
            return Err(ValidationError::AmountTooLarge(amount));
        }
        Ok(Self {
            ticket_count: amount / TICKET_PRICE,
        })
    }

    pub fn for_tickets(ticket_count: u64) -> Result<Self, ValidationError> {
        if ticket_count == 0 {
            return Err(ValidationError::NoTickets);
        }
        if ticket_count > MAX_PURCHASE_AMOUNT / TICKET_PRICE {
            return Err(ValidationError::AmountTooLarge(
                ticket_count.saturating_mul(TICKET_PRICE),
            ));
        }
        Ok(Self { ticket_count })
    }

    pub fn ticket_count(&self) -> u64 {
        self.ticket_count
    }

    pub fn cost(&self) -> u64 {
        self.ticket_count.saturating_mul(TICKET_PRICE)
    }
}

/// Percentage of `total_cost` paid back as prizes. A zero cost yields 0.
pub fn return_rate(total_prize: u64, total_cost: u64) -> f64 {
    if total_cost == 0 {
        return 0.0;
    }
    total_prize as f64 / total_cost as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_amount() {
        assert_eq!(Purchase::from_amount(1_000).unwrap().ticket_count(), 1);
        assert_eq!(Purchase::from_amount(14_000).unwrap().ticket_count(), 14);
        assert_eq!(Purchase::from_amount(14_000).unwrap().cost(), 14_000);
    }

    #[test]
    fn test_from_amount_rejects() {
        assert_eq!(Purchase::from_amount(999), Err(ValidationError::NotMultipleOfPrice(999)));
        assert_eq!(Purchase::from_amount(1_500), Err(ValidationError::NotMultipleOfPrice(1_500)));
        assert_eq!(Purchase::from_amount(0), Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_from_amount_upper_bound() {
        assert_eq!(MAX_PURCHASE_AMOUNT, 2_147_483_000);
        assert_eq!(
            Purchase::from_amount(MAX_PURCHASE_AMOUNT).unwrap().ticket_count(),
            2_147_483
        );
        assert_eq!(
            Purchase::from_amount(MAX_PURCHASE_AMOUNT + TICKET_PRICE),
            Err(ValidationError::AmountTooLarge(2_147_484_000))
        );
        assert_eq!(
            Purchase::from_amount(9_223_372_036_854_775_000),
            Err(ValidationError::AmountTooLarge(9_223_372_036_854_775_000))
        );
        assert!(Purchase::for_tickets(2_147_483).is_ok());
        assert_eq!(
            Purchase::for_tickets(2_147_484),
            Err(ValidationError::AmountTooLarge(2_147_484_000))
        );
    }

    #[test]
    fn test_for_tickets() {
        assert_eq!(Purchase::for_tickets(3).unwrap().cost(), 3_000);
        assert_eq!(Purchase::for_tickets(0), Err(ValidationError::NoTickets));
    }

    #[test]
    fn test_return_rate() {
        assert_eq!(return_rate(5_000, 8_000), 62.5);
        assert_eq!(return_rate(0, 8_000), 0.0);
        assert_eq!(return_rate(5_000, 0), 0.0);
        assert_eq!(return_rate(2_000_000_000, 1_000), 200_000_000.0);
    }
}
