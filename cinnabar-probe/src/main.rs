use clap::Parser;
use cinnabar_sram::{setup, waitcnt::EmulatedWaitControl};
use config::{Command, Config};
use simple_logger::SimpleLogger;

mod commands;
mod config;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::parse();
    SimpleLogger::new().with_level(config.log_level()).init()?;

    // the host has no WAITCNT; run the same startup path against a stand-in
    let token = setup::init(&mut EmulatedWaitControl::default());

    match &config.command {
        Command::Detect { rom } => commands::detect(rom),
        Command::Format {
            save,
            fill,
            dry_run,
        } => commands::format(token, save, *fill, *dry_run),
        Command::Dump { save, offset, len } => commands::dump(token, save, *offset, *len),
        Command::Poke {
            save,
            offset,
            bytes,
        } => commands::poke(token, save, *offset, bytes),
    }
}
