//! # Prize Tiers
//!
//! The closed prize table and the rule that maps a ticket onto it.
//!
//! | Tier         | Matches | Bonus | Prize         |
//! |--------------|---------|-------|---------------|
//! | `Nothing`    | 0-2     | no    | 0             |
//! | `Three`      | 3       | no    | 5,000         |
//! | `Four`       | 4       | no    | 50,000        |
//! | `Five`       | 5       | no    | 1,500,000     |
//! | `FiveBonus`  | 5       | yes   | 30,000,000    |
//! | `Six`        | 6       | no    | 2,000,000,000 |

use tracing::trace;

use crate::ticket::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrizeTier {
    Nothing,
    Three,
    Four,
    Five,
    FiveBonus,
    Six,
}

impl PrizeTier {
    /// All tiers, lowest payout first.
    pub const ALL: [PrizeTier; 6] = [
        PrizeTier::Nothing,
        PrizeTier::Three,
        PrizeTier::Four,
        PrizeTier::Five,
        PrizeTier::FiveBonus,
        PrizeTier::Six,
    ];

    /// Matches needed to land in this tier. `Nothing` reports 0 but covers 0 to 2.
    pub const fn match_count(self) -> u8 {
        match self {
            PrizeTier::Nothing => 0,
            PrizeTier::Three => 3,
            PrizeTier::Four => 4,
            PrizeTier::Five | PrizeTier::FiveBonus => 5,
            PrizeTier::Six => 6,
        }
    }

    pub const fn requires_bonus(self) -> bool {
        matches!(self, PrizeTier::FiveBonus)
    }

    pub const fn prize(self) -> u64 {
        match self {
            PrizeTier::Nothing => 0,
            PrizeTier::Three => 5_000,
            PrizeTier::Four => 50_000,
            PrizeTier::Five => 1_500_000,
            PrizeTier::FiveBonus => 30_000_000,
            PrizeTier::Six => 2_000_000_000,
        }
    }

    /// Resolves a tier from the raw match data.
    ///
    /// Six matches always win `Six`; the bonus only separates the two five-match tiers.
    pub const fn resolve(match_count: usize, bonus_matched: bool) -> Self {
        match (match_count, bonus_matched) {
            (6, _) => PrizeTier::Six,
            (5, true) => PrizeTier::FiveBonus,
            (5, false) => PrizeTier::Five,
            (4, _) => PrizeTier::Four,
            (3, _) => PrizeTier::Three,
            _ => PrizeTier::Nothing,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Classifies one ticket against the winning numbers and bonus ball.
pub fn classify(ticket: &Ticket, winning_numbers: &[u8], bonus: u8) -> PrizeTier {
    let match_count = ticket.match_count(winning_numbers);
    let bonus_matched = ticket.contains(bonus);
    let tier = PrizeTier::resolve(match_count, bonus_matched);
    trace!(%ticket, match_count, bonus_matched, ?tier, "classified ticket");
    tier
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
