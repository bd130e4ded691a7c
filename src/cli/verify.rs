// src/cli/verify.rs — Check that a relay closes without any compilers

use crate::infra::config::Config;
use crate::relay::simulate::{self, CycleReport};
use crate::relay::{PlainFormatter, RelayBuilder};

/// Build the relay in memory, run the cycle and report each link.
/// Fails when the cycle does not reproduce the base program exactly.
pub fn run_verify(config: &Config, chain: Option<&[String]>) -> anyhow::Result<CycleReport> {
    let chain = config.chain(chain)?;
    let relay = RelayBuilder::new(&chain, &PlainFormatter).build()?;
    let report = simulate::verify_cycle(&chain, &relay.source, &PlainFormatter)?;

    println!("Relay: {} ({} bytes)", relay.file_name, relay.source.len());
    for (i, run) in report.executions.iter().enumerate() {
        println!(
            "  {}. {:<7} writes {:<9} {} bytes",
            i + 1,
            run.language.name(),
            run.file_name,
            run.written.len()
        );
    }

    if !report.closed {
        anyhow::bail!("cycle does not reproduce {}", relay.file_name);
    }
    if !report.files_match {
        anyhow::bail!("a program writes a file other than its successor's");
    }
    if !report.statuses_match {
        anyhow::bail!("a program prints the wrong status message");
    }

    println!("Cycle closes: {} links, byte-for-byte.", chain.len());
    Ok(report)
}
