// src/relay/mod.rs — Relay construction engine
//
// Leaves first: `escape` (token encoding), `minimize` (template condensing),
// `language` (registry), `writer` and `quine` (templates), `chain` (cyclic
// order and status text), `builder` (the fold). `simulate` executes
// generated programs on paper to check the cycle.

pub mod builder;
pub mod chain;
pub mod escape;
pub mod language;
pub mod minimize;
pub mod quine;
pub mod simulate;
pub mod status;
pub mod writer;

pub use builder::{Relay, RelayBuilder};
pub use chain::Chain;
pub use language::LanguageKind;
pub use status::{AnsiFormatter, PlainFormatter, StatusFormatter};

pub type Result<T> = std::result::Result<T, crate::infra::errors::RelayError>;
