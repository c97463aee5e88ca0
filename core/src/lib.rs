//! # Lotto Core
//!
//! The ticket-matching and prize-determination engine. Pure Rust, no terminal I/O.
//!
//! ## Layout
//! * **[`ticket`]**: The [`ticket::Ticket`] entity, six distinct numbers in `1..=45`.
//! * **[`winning`]**: The drawn [`winning::WinningSet`] and its bonus number.
//! * **[`tier`]**: The fixed [`tier::PrizeTier`] table and the classifier.
//! * **[`result`]**: Aggregation of tiers over a ticket collection.
//! * **[`purchase`]**: Purchase amounts, unit price and return rate.
//! * **[`validator`]**: Parsing and validation of raw user input.
//! * **[`source`]**: Where tickets come from (random or seeded).
//!
//! Every invalid input surfaces as an [`error::ValidationError`]. Once inputs are
//! validated the classifier and aggregator are total and never fail.

pub mod error;
pub mod numbers;
pub mod purchase;
pub mod result;
pub mod source;
pub mod ticket;
pub mod tier;
pub mod validator;
pub mod winning;

pub use error::ValidationError;
pub use purchase::{MAX_PURCHASE_AMOUNT, Purchase, TICKET_PRICE};
pub use result::{ResultAggregator, WinningResult};
pub use source::{RandomTicketSource, TicketSource};
pub use ticket::Ticket;
pub use tier::PrizeTier;
pub use winning::WinningSet;
