use std::io::Write;

use colored::*;
use lotto_common::config::Config;
use lotto_core::PrizeTier;

use crate::terminal::{colors, format, print};

pub fn prizes(out: &mut impl Write, cfg: &Config) -> anyhow::Result<()> {
    print::header(out, "prize table", cfg)?;

    let rows: Vec<(String, u64)> = PrizeTier::ALL
        .iter()
        .rev()
        .map(|&tier| (format::tier_label(tier), tier.prize()))
        .collect();
    let key_width: usize = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    for (label, prize) in rows {
        let value: ColoredString = format::won(prize).color(colors::PRIZE);
        print::aligned_line(out, &label, value, key_width)?;
    }

    print::blank(out)?;
    let price: String = format::won(lotto_core::TICKET_PRICE);
    print::aligned_line(out, "ticket price", price, key_width)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_tier() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        prizes(&mut out, &Config::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("⟦ PRIZE TABLE ⟧"));
        assert!(text.contains("6 matches"));
        assert!(text.contains(": 2,000,000,000 won"));
        assert!(text.contains("5 matches + bonus ball"));
        assert!(text.contains(": 30,000,000 won"));
        assert!(text.contains("fewer than 3 matches"));
        assert!(text.contains("> ticket price...........: 1,000 won"));
    }
}
