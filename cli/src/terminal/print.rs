use std::fmt::Display;
use std::io::{self, Write};

use crate::terminal::colors;
use colored::*;
use lotto_common::config::Config;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn banner(out: &mut impl Write, cfg: &Config) -> io::Result<()> {
    if !cfg.show_banner() {
        return Ok(());
    }

    let text_content: String = format!("⟦ LOTTO v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    writeln!(out, "{}{}{}", sep, text, sep)
}

pub fn header(out: &mut impl Write, msg: &str, cfg: &Config) -> io::Result<()> {
    if !cfg.show_headers() {
        return Ok(());
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    writeln!(out, "{}", line)
}

pub fn fat_separator(out: &mut impl Write) -> io::Result<()> {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    writeln!(out, "{}", sep)
}

pub fn aligned_line<V>(out: &mut impl Write, key: &str, value: V, key_width: usize) -> io::Result<()>
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(out, format!("{}{} {}", key.color(colors::PRIMARY), colon, value))
}

pub fn print_status<T: AsRef<str>>(out: &mut impl Write, msg: T) -> io::Result<()> {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    writeln!(out, "{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT))
}

/// Asks for input. Flushed so the question shows before the read blocks.
pub fn prompt(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", msg.color(colors::PRIMARY))?;
    out.flush()
}

pub fn error(out: &mut impl Write, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "{}", format!("[ERROR] {err}").color(colors::ERROR).bold())
}

pub fn blank(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)
}

pub fn centerln(out: &mut impl Write, msg: &str) -> io::Result<()> {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    writeln!(out, "{}{}", space, msg)
}
