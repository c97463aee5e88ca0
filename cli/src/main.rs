mod commands;
mod terminal;

use std::io;

use commands::{CommandLine, Commands, play, prizes};
use lotto_core::RandomTicketSource;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init(commands.verbose);

    let cfg = commands.config();
    if !cfg.color {
        colored::control::set_override(false);
    }

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    print::banner(&mut out, &cfg)?;

    match commands.command.unwrap_or_default() {
        Commands::Play => {
            let mut source = RandomTicketSource::from_config(&cfg);
            play::play(&mut input, &mut out, &mut source, &cfg)?;
            Ok(())
        }
        Commands::Prizes => prizes::prizes(&mut out, &cfg),
    }
}
