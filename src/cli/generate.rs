// src/cli/generate.rs — Build the relay and write the base program

use std::path::{Path, PathBuf};

use crate::infra::config::Config;
use crate::relay::status::formatter;
use crate::relay::{Relay, RelayBuilder};

/// Build the configured relay and write its base file into `out`
/// (or `output.dir`). Returns the path written.
pub fn run_generate(
    config: &Config,
    out: Option<&Path>,
    chain: Option<&[String]>,
    no_color: bool,
) -> anyhow::Result<PathBuf> {
    let chain = config.chain(chain)?;
    let fmt = formatter(config.output.color && !no_color);

    println!("Generating quine relay...");
    let relay = RelayBuilder::new(&chain, fmt.as_ref()).build()?;

    let dir = out.unwrap_or(&config.output.dir);
    let path = write_relay(&relay, dir)?;
    println!("Wrote quine relay to {}", path.display());
    Ok(path)
}

/// Write the base program of `relay` into `dir`, creating it if needed.
pub fn write_relay(relay: &Relay, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(relay.file_name);
    std::fs::write(&path, &relay.source)?;
    tracing::info!("wrote {} ({} bytes)", path.display(), relay.source.len());

    Ok(std::fs::canonicalize(&path).unwrap_or(path))
}
