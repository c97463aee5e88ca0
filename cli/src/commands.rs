pub mod play;
pub mod prizes;

use clap::{ArgAction, Parser, Subcommand};
use lotto_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "lotto")]
#[command(about = "A console lottery simulator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the ticket draw so a session can be replayed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Hide banner and section headers
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commands {
    /// Buy tickets, enter the draw and see how you did
    #[default]
    #[command(alias = "p")]
    Play,
    /// Show the prize table
    #[command(alias = "t")]
    Prizes,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            seed: self.seed,
            no_banner: self.no_banner,
            quiet: self.quiet,
            color: !self.no_color,
        }
    }
}
