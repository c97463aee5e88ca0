//! The interactive session: buy tickets, enter the draw, report the outcome.
//!
//! Reader, writer and ticket source are handed in by the caller, so the whole
//! session runs the same against a terminal or an in-memory script.

use std::io::{BufRead, Write};

use anyhow::Context;
use colored::*;
use tracing::{debug, info, info_span};

use crate::terminal::{colors, format, print};
use lotto_common::config::Config;
use lotto_core::{
    PrizeTier, Purchase, ResultAggregator, Ticket, TicketSource, ValidationError, WinningSet,
    validator,
};

const PURCHASE_PROMPT: &str = "Enter the purchase amount.";
const WINNING_PROMPT: &str = "Enter the winning numbers, separated by commas.";
const BONUS_PROMPT: &str = "Enter the bonus number.";

pub fn play<R, W, S>(
    input: &mut R,
    out: &mut W,
    source: &mut S,
    cfg: &Config,
) -> anyhow::Result<ResultAggregator>
where
    R: BufRead,
    W: Write,
    S: TicketSource + ?Sized,
{
    let span = info_span!("session");
    let _guard = span.enter();

    let purchase: Purchase = prompt_until_valid(input, out, PURCHASE_PROMPT, validator::purchase_amount)?;
    let tickets: Vec<Ticket> = source.draw_many(purchase.ticket_count());
    info!(tickets = tickets.len(), "tickets drawn");
    print_tickets(out, &tickets)?;

    let winning_numbers: Vec<u8> =
        prompt_until_valid(input, out, WINNING_PROMPT, validator::winning_numbers)?;
    let bonus: u8 = prompt_until_valid(input, out, BONUS_PROMPT, |raw| {
        validator::bonus_number(raw, &winning_numbers)
    })?;
    let winning = WinningSet::new(&winning_numbers, bonus)?;

    let aggregator = ResultAggregator::new(tickets, winning)?;
    print_statistics(out, &aggregator, cfg)?;
    Ok(aggregator)
}

/// Re-prompts until `parse` accepts a line. Running out of input is fatal.
fn prompt_until_valid<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    parse: F,
) -> anyhow::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        print::prompt(out, prompt)?;
        let line = read_line(input)?;

        match parse(&line) {
            Ok(value) => {
                print::blank(out)?;
                return Ok(value);
            }
            Err(err) => {
                debug!(attempt, "rejected input: {err}");
                print::error(out, &err)?;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from input")?;

    if read == 0 {
        anyhow::bail!("input ended before a valid value was entered");
    }
    Ok(line)
}

fn print_tickets<W: Write>(out: &mut W, tickets: &[Ticket]) -> anyhow::Result<()> {
    let count = tickets.len() as u64;
    writeln!(out, "You bought {}.", format::plural(count, "ticket"))?;
    for ticket in tickets {
        writeln!(out, "{}", ticket.to_string().color(colors::ACCENT))?;
    }
    print::blank(out)?;
    Ok(())
}

fn print_statistics<W: Write>(
    out: &mut W,
    aggregator: &ResultAggregator,
    cfg: &Config,
) -> anyhow::Result<()> {
    if cfg.show_headers() {
        print::header(out, "winning statistics", cfg)?;
    } else {
        writeln!(out, "Winning statistics")?;
        writeln!(out, "---")?;
    }

    for (tier, count) in aggregator.winning_result().iter() {
        if tier == PrizeTier::Nothing {
            continue;
        }
        writeln!(out, "{}", format::tier_line(tier, count))?;
    }

    let summary: String = format!("Total return rate is {}%.", format::rate(aggregator.return_rate()));
    if cfg.show_headers() {
        print::fat_separator(out)?;
        print::centerln(out, &summary.bold().to_string())?;
    } else {
        writeln!(out, "{}", summary)?;
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
