//! # Result Aggregation
//!
//! Runs the classifier over a ticket collection and tallies the outcome per tier.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ValidationError;
use crate::purchase::{self, Purchase};
use crate::ticket::Ticket;
use crate::tier::PrizeTier;
use crate::winning::WinningSet;

/// Ticket counts for every tier. All six tiers are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinningResult {
    counts: [u64; PrizeTier::ALL.len()],
}

impl WinningResult {
    pub fn record(&mut self, tier: PrizeTier) {
        self.counts[tier.index()] += 1;
    }

    pub fn count(&self, tier: PrizeTier) -> u64 {
        self.counts[tier.index()]
    }

    /// Yields `(tier, count)` pairs in [`PrizeTier::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PrizeTier, u64)> + '_ {
        PrizeTier::ALL.iter().map(|&tier| (tier, self.count(tier)))
    }

    pub fn total_tickets(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Sum of `count * prize` over all tiers, saturating at `u64::MAX`.
    pub fn total_prize(&self) -> u64 {
        self.iter().fold(0u64, |acc, (tier, count)| {
            acc.saturating_add(count.saturating_mul(tier.prize()))
        })
    }

    pub fn as_map(&self) -> BTreeMap<PrizeTier, u64> {
        self.iter().collect()
    }
}

impl FromIterator<PrizeTier> for WinningResult {
    fn from_iter<I: IntoIterator<Item = PrizeTier>>(iter: I) -> Self {
        let mut result = WinningResult::default();
        for tier in iter {
            result.record(tier);
        }
        result
    }
}

/// Owns one run's tickets and winning set together with the computed result.
#[derive(Debug, Clone)]
pub struct ResultAggregator {
    tickets: Vec<Ticket>,
    winning: WinningSet,
    result: WinningResult,
}

impl ResultAggregator {
    pub fn new(tickets: Vec<Ticket>, winning: WinningSet) -> Result<Self, ValidationError> {
        if tickets.is_empty() {
            return Err(ValidationError::NoTickets);
        }

        let result: WinningResult = tickets.iter().map(|t| winning.classify(t)).collect();
        debug!(
            tickets = tickets.len(),
            total_prize = result.total_prize(),
            "aggregated winning result"
        );

        Ok(Self {
            tickets,
            winning,
            result,
        })
    }

    pub fn winning_result(&self) -> &WinningResult {
        &self.result
    }

    pub fn total_prize(&self) -> u64 {
        self.result.total_prize()
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn winning_set(&self) -> &WinningSet {
        &self.winning
    }

    pub fn ticket_count(&self) -> u64 {
        self.tickets.len() as u64
    }

    pub fn total_cost(&self) -> u64 {
        self.ticket_count().saturating_mul(purchase::TICKET_PRICE)
    }

    /// Return rate in percent, with cost derived from the tickets held here.
    pub fn return_rate(&self) -> f64 {
        purchase::return_rate(self.total_prize(), self.total_cost())
    }

    /// Checks that this run's tickets account for exactly `purchase`.
    pub fn covers(&self, purchase: &Purchase) -> bool {
        self.ticket_count() == purchase.ticket_count()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
