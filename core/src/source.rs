//! Where tickets come from.
//!
//! The session only depends on [`TicketSource`]; [`RandomTicketSource`] is the
//! production implementation, seedable so a run can be reproduced.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::debug;

use lotto_common::config::Config;

use crate::numbers::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
use crate::ticket::Ticket;

pub trait TicketSource {
    fn draw(&mut self) -> Ticket;

    fn draw_many(&mut self, count: u64) -> Vec<Ticket> {
        (0..count).map(|_| self.draw()).collect()
    }
}

/// Draws six unique numbers uniformly from `1..=45` without replacement.
pub struct RandomTicketSource {
    rng: StdRng,
}

impl RandomTicketSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!(seed, "seeding ticket source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.seed)
    }
}

impl TicketSource for RandomTicketSource {
    fn draw(&mut self) -> Ticket {
        let span = usize::from(MAX_NUMBER - MIN_NUMBER) + 1;
        let picked = index::sample(&mut self.rng, span, NUMBERS_PER_TICKET);

        let mut numbers = [0u8; NUMBERS_PER_TICKET];
        for (slot, offset) in numbers.iter_mut().zip(picked.iter()) {
            // offset < span <= 45
            *slot = MIN_NUMBER + offset as u8;
        }
        Ticket::from_drawn(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_produces_valid_sorted_tickets() {
        let mut source = RandomTicketSource::new(Some(7));
        for ticket in source.draw_many(500) {
            let numbers = ticket.numbers();
            assert_eq!(numbers.len(), 6);
            assert!(numbers.windows(2).all(|w| w[0] < w[1]), "not sorted: {ticket}");
            assert!(numbers.iter().all(|n| (1..=45).contains(n)));
        }
    }

    #[test]
    fn test_seed_reproduces_draws() {
        let first = RandomTicketSource::new(Some(42)).draw_many(10);
        let second = RandomTicketSource::from_config(&Config {
            seed: Some(42),
            ..Default::default()
        })
        .draw_many(10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_many_count() {
        let mut source = RandomTicketSource::new(None);
        assert_eq!(source.draw_many(0).len(), 0);
        assert_eq!(source.draw_many(14).len(), 14);
    }

    #[test]
    fn test_every_number_reachable() {
        let mut seen = [false; 46];
        let mut source = RandomTicketSource::new(Some(1));
        for ticket in source.draw_many(400) {
            for &n in ticket.numbers() {
                seen[usize::from(n)] = true;
            }
        }
        assert!(seen[1..].iter().all(|&s| s), "some numbers never drawn");
    }
}
