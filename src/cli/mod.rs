// src/cli/mod.rs — CLI definition (clap derive)

pub mod generate;
pub mod languages;
pub mod sample;
pub mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infra::errors::RelayError;

#[derive(Parser)]
#[command(
    name = "sdqr",
    about = "Generate a quine relay: programs that write each other in a cycle",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Log every fold step (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the relay and write the base program (default)
    Generate {
        /// Output directory (overrides output.dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Writer languages after the base, comma separated (e.g. C,C++,C#)
        #[arg(long, value_delimiter = ',')]
        chain: Option<Vec<String>>,
        /// Plain status messages without ANSI colour
        #[arg(long)]
        no_color: bool,
    },
    /// Build the relay in memory and run the whole cycle on paper
    Verify {
        /// Writer languages after the base, comma separated
        #[arg(long, value_delimiter = ',')]
        chain: Option<Vec<String>>,
    },
    /// List supported languages with their files and escape tokens
    Languages,
    /// Write one self-test program per writer language
    Sample {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

/// Follow-up line for errors the user can fix from the command line.
pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    let relay_err = err.downcast_ref::<RelayError>()?;
    relay_err.is_configuration().then_some(
        "`sdqr languages` lists the supported names; check --chain or relay.chain in config.toml",
    )
}
