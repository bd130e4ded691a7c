// src/main.rs — sdqr entry point

use clap::Parser;

use sdqr::cli::{Cli, Commands};
use sdqr::infra::config::Config;
use sdqr::infra::logger;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose only lowers the default
    logger::init_logging(if cli.verbose { "debug" } else { "warn" });

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        if let Some(hint) = sdqr::cli::error_hint(&e) {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        None => {
            sdqr::cli::generate::run_generate(&config, None, None, false)?;
        }
        Some(Commands::Generate {
            out,
            chain,
            no_color,
        }) => {
            sdqr::cli::generate::run_generate(&config, out.as_deref(), chain.as_deref(), no_color)?;
        }
        Some(Commands::Verify { chain }) => {
            sdqr::cli::verify::run_verify(&config, chain.as_deref())?;
        }
        Some(Commands::Languages) => {
            sdqr::cli::languages::show_languages()?;
        }
        Some(Commands::Sample { out }) => {
            sdqr::cli::sample::run_sample(&out, config.output.color)?;
        }
    }

    Ok(())
}
