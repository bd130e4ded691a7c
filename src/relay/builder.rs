// src/relay/builder.rs — Fold the chain into one self-reproducing program
//
// For Python -> C -> C++ -> C# (-> Python) the fold runs backwards:
//   1. raw Python with an open hole
//   2. a C# program that writes (1) to SDQR.py
//   3. a C++ program that writes (2) to SDQR.cs
//   4. a C program that writes (3) to SDQR.cpp
// and finally the hole in (1) is filled with (4). Building backwards means
// every step only needs the output of the step before it.

use super::chain::Chain;
use super::language::LanguageKind;
use super::status::StatusFormatter;
use super::{quine, writer, Result};
use crate::util::preview;

/// The finished relay: the base program, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    pub base: LanguageKind,
    pub file_name: &'static str,
    pub source: String,
}

pub struct RelayBuilder<'a> {
    chain: &'a Chain,
    formatter: &'a dyn StatusFormatter,
}

impl<'a> RelayBuilder<'a> {
    pub fn new(chain: &'a Chain, formatter: &'a dyn StatusFormatter) -> Self {
        Self { chain, formatter }
    }

    /// The raw base source, hole still open.
    pub fn base_template(&self) -> Result<String> {
        let base = self.chain.base();
        let status = self.chain.status_message(base, self.formatter)?;
        quine::build_placeholder(self.chain.next(base)?.file_name(), &status)
    }

    /// Wrap `raw` in every writer, last writer first.
    pub fn fold_writers(&self, raw: String) -> Result<String> {
        self.chain
            .writers()
            .iter()
            .rev()
            .try_fold(raw, |payload, &kind| {
                let target = self.chain.next(kind)?;
                let status = self.chain.status_message(kind, self.formatter)?;
                tracing::debug!(
                    "wrapping {} bytes in {} (writes {}): {}",
                    payload.len(),
                    kind,
                    target.file_name(),
                    preview(&payload, 48)
                );
                writer::build(kind, &payload, target.file_name(), &status)
            })
    }

    pub fn build(&self) -> Result<Relay> {
        let raw = self.base_template()?;
        let payload = self.fold_writers(raw.clone())?;
        let source = quine::close(&raw, &payload)?;

        let base = self.chain.base();
        tracing::debug!(
            "closed {} relay of {} links: {} bytes",
            base,
            self.chain.len(),
            source.len()
        );

        Ok(Relay {
            base,
            file_name: base.file_name(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::simulate;
    use crate::relay::status::PlainFormatter;

    #[test]
    fn test_build_is_deterministic() {
        let chain = Chain::default();
        let a = RelayBuilder::new(&chain, &PlainFormatter).build().unwrap();
        let b = RelayBuilder::new(&chain, &PlainFormatter).build().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.file_name, "SDQR.py");
        assert_eq!(a.base, LanguageKind::Python);
    }

    #[test]
    fn test_outermost_writer_is_first_after_base() {
        let chain = Chain::default();
        let builder = RelayBuilder::new(&chain, &PlainFormatter);
        let outer = builder.fold_writers(builder.base_template().unwrap()).unwrap();
        assert!(outer.starts_with("#include <stdio.h>"));

        let run = simulate::execute(LanguageKind::C, &outer).unwrap();
        assert_eq!(run.file_name, "SDQR.cpp");
        assert!(run.written.starts_with("#include <fstream>"));
    }

    #[test]
    fn test_two_link_relay_closes() {
        let chain = Chain::new(vec![LanguageKind::Rust]).unwrap();
        let relay = RelayBuilder::new(&chain, &PlainFormatter).build().unwrap();
        let report = simulate::verify_cycle(&chain, &relay.source, &PlainFormatter).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.executions.len(), 2);
    }
}
