use lotto_core::PrizeTier;

/// Inserts `,` every three digits: `2000000000` becomes `2,000,000,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn won(amount: u64) -> String {
    format!("{} won", group_thousands(amount))
}

/// Formats a percentage with one decimal, rounding half up.
pub fn rate(percent: f64) -> String {
    let tenths = (percent.max(0.0) * 10.0).round() as u64;
    format!("{}.{}", group_thousands(tenths / 10), tenths % 10)
}

pub fn plural(count: u64, noun: &str) -> String {
    match count {
        1 => format!("{count} {noun}"),
        _ => format!("{count} {noun}s"),
    }
}

pub fn tier_label(tier: PrizeTier) -> String {
    match tier {
        PrizeTier::Nothing => "fewer than 3 matches".to_string(),
        tier if tier.requires_bonus() => format!("{} matches + bonus ball", tier.match_count()),
        tier => format!("{} matches", tier.match_count()),
    }
}

/// e.g. `5 matches + bonus ball (30,000,000 won) - 1 ticket`
pub fn tier_line(tier: PrizeTier, count: u64) -> String {
    format!(
        "{} ({}) - {}",
        tier_label(tier),
        won(tier.prize()),
        plural(count, "ticket")
    )
}
