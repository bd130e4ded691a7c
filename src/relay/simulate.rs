// src/relay/simulate.rs — Run generated programs without their toolchains
//
// Every generated program has the same shape: a file-name literal, an
// encoded payload literal and an encoded status literal, each found right
// after a fixed anchor. Encoded literals never contain a double quote, so
// each one ends at the next `"`. Executing a program means checking that the
// literals are ones the language can hold, then applying the language's
// decode rules to them, exactly as the program would.

use super::chain::Chain;
use super::escape::unescape_source_literal;
use super::language::LanguageKind;
use super::quine::{self, PLACEHOLDER};
use super::status::StatusFormatter;
use super::writer;
use super::Result;
use crate::infra::errors::RelayError;

/// What one generated program does when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub language: LanguageKind,
    /// File the program creates.
    pub file_name: String,
    /// Bytes it writes there.
    pub written: String,
    /// Text it prints (without the final line break).
    pub printed: String,
}

struct Anchors {
    file: &'static str,
    payload: &'static str,
    status: &'static str,
}

fn anchors(kind: LanguageKind) -> Anchors {
    match kind {
        LanguageKind::Python => Anchors {
            file: "f=open(\"",
            payload: "p=\"",
            status: "print(\"",
        },
        LanguageKind::C => Anchors {
            file: "fopen(\"",
            payload: "fputs(desanitize(\"",
            status: "printf(\"%s\\n\", desanitize(\"",
        },
        LanguageKind::Cpp => Anchors {
            file: "std::ofstream outfile(\"",
            payload: "outfile << desanitize(\"",
            status: "std::cout << desanitize(\"",
        },
        LanguageKind::CSharp => Anchors {
            file: "WriteAllText(\"",
            payload: "Desanitize(\"",
            status: "Console.Write(Desanitize(\"",
        },
        LanguageKind::Rust => Anchors {
            file: "std::fs::write(\"",
            payload: "desanitize(\"",
            status: "println!(\"{}\", desanitize(\"",
        },
    }
}

fn literal_after<'a>(kind: LanguageKind, source: &'a str, anchor: &str) -> Result<&'a str> {
    let missing = |what: &str| RelayError::Simulation {
        language: kind.name().into(),
        message: format!("{what} after `{anchor}`"),
    };
    let start = source.find(anchor).ok_or_else(|| missing("no anchor"))? + anchor.len();
    let len = source[start..]
        .find('"')
        .ok_or_else(|| missing("unterminated literal"))?;
    Ok(&source[start..start + len])
}

/// The still-encoded payload literal of a generated program.
pub fn payload_literal(kind: LanguageKind, source: &str) -> Result<&str> {
    literal_after(kind, source, anchors(kind).payload)
}

/// Conceptually run `source`, a program generated for `kind`.
pub fn execute(kind: LanguageKind, source: &str) -> Result<Execution> {
    let anchors = anchors(kind);
    let file_name = unescape_source_literal(literal_after(kind, source, anchors.file)?);
    let payload = literal_after(kind, source, anchors.payload)?;
    let status = literal_after(kind, source, anchors.status)?;
    // A literal the real compiler would reject must not pass on paper.
    kind.info().check_literal("payload", payload)?;
    kind.info().check_literal("status", status)?;

    let (written, printed) = if kind.is_base() {
        let written = quine::sanitizer().decode(payload).replace(PLACEHOLDER, payload);
        (written, quine::status_sanitizer().decode(status))
    } else {
        let sanitizer = writer::sanitizer(kind);
        (sanitizer.decode(payload), sanitizer.decode(status))
    };

    Ok(Execution {
        language: kind,
        file_name,
        written,
        printed,
    })
}

/// Run the whole cycle once, starting from the base program's source.
///
/// Returns one execution per link in forward order; the last one's
/// `written` is the base source again when the relay is a true quine.
pub fn run_cycle(chain: &Chain, base_source: &str) -> Result<Vec<Execution>> {
    let mut executions = Vec::with_capacity(chain.len());
    let mut source = base_source.to_string();

    for &kind in chain.links() {
        let run = execute(kind, &source)?;
        tracing::debug!(
            "{} wrote {} ({} bytes)",
            kind.name(),
            run.file_name,
            run.written.len()
        );
        source = run.written.clone();
        executions.push(run);
    }

    Ok(executions)
}

/// Outcome of checking a relay end to end.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub executions: Vec<Execution>,
    /// Running every link in turn reproduced the base source exactly.
    pub closed: bool,
    /// Every program wrote the file its successor is named after.
    pub files_match: bool,
    /// Every program printed the status message for its position.
    pub statuses_match: bool,
}

impl CycleReport {
    pub fn is_ok(&self) -> bool {
        self.closed && self.files_match && self.statuses_match
    }
}

/// Run the cycle and compare it against what the chain says should happen.
/// `fmt` must be the formatter the relay was built with.
pub fn verify_cycle(
    chain: &Chain,
    base_source: &str,
    fmt: &dyn StatusFormatter,
) -> Result<CycleReport> {
    let executions = run_cycle(chain, base_source)?;

    let closed = executions
        .last()
        .is_some_and(|last| last.written == base_source);

    let mut files_match = true;
    let mut statuses_match = true;
    for run in &executions {
        if run.printed != chain.status_message(run.language, fmt)? {
            tracing::warn!("{} prints an unexpected status message", run.language);
            statuses_match = false;
        }
        let expected = chain.next(run.language)?.file_name();
        if run.file_name != expected {
            tracing::warn!(
                "{} wrote {} but the next link is {}",
                run.language,
                run.file_name,
                expected
            );
            files_match = false;
        }
    }

    Ok(CycleReport {
        executions,
        closed,
        files_match,
        statuses_match,
    })
}
