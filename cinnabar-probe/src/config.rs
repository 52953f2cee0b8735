use clap::{Parser, Subcommand};
use clap_num::maybe_hex;
use log::LevelFilter;
use std::path::PathBuf;

/// Inspect GBA program images and edit cartridge SRAM save files.
#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Config {
    /// More output; repeat for trace logging.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the save type a program image advertises.
    Detect {
        rom: PathBuf,
    },

    /// Create or reset an SRAM save file.
    Format {
        save: PathBuf,

        /// Byte written to every location.
        #[arg(long, default_value_t = 0, value_parser = maybe_hex::<u8>)]
        fill: u8,

        /// Run the fill without touching the file.
        #[arg(long)]
        dry_run: bool,
    },

    /// Hex dump part of an SRAM save file.
    Dump {
        save: PathBuf,

        #[arg(long, default_value_t = 0, value_parser = maybe_hex::<usize>)]
        offset: usize,

        #[arg(long, default_value_t = 256, value_parser = maybe_hex::<usize>)]
        len: usize,
    },

    /// Write bytes into an SRAM save file.
    Poke {
        save: PathBuf,

        #[arg(long, value_parser = maybe_hex::<usize>)]
        offset: usize,

        #[arg(required = true, value_parser = maybe_hex::<u8>)]
        bytes: Vec<u8>,
    },
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
