// src/cli/sample.rs — Self-test programs for every writer language
//
// Each program writes the same awkward text to nextFile.txt. Compile and run
// any of them, then diff nextFile.txt against expected.txt.

use std::path::{Path, PathBuf};

use crate::relay::status::{formatter, StatusFormatter};
use crate::relay::{writer, Chain, LanguageKind};

pub const SAMPLE_TARGET: &str = "nextFile.txt";
pub const EXPECTED_FILE: &str = "expected.txt";

/// Quotes, backslashes, literal escape sequences, tabs, non-ASCII and
/// (when `fmt` colours) terminal escape codes.
pub fn sample_content(fmt: &dyn StatusFormatter) -> String {
    [
        fmt.emphasis(r#"print("\n").substr("\"\"")"#),
        fmt.label(r#"\n\n\n 😊 \"\"\" @"" """"#),
        fmt.muted("\t<- \\t"),
    ]
    .join("\n")
}

/// Write one program per writer language plus the expected output into
/// `out`. Returns the written paths, expected file last.
pub fn run_sample(out: &Path, color: bool) -> anyhow::Result<Vec<PathBuf>> {
    let fmt = formatter(color);
    let content = sample_content(fmt.as_ref());
    std::fs::create_dir_all(out)?;

    let mut written = Vec::new();
    for kind in LanguageKind::ALL.into_iter().filter(|k| !k.is_base()) {
        let chain = Chain::new(vec![kind])?;
        let status = chain.status_message(kind, fmt.as_ref())?;
        let source = writer::build(kind, &content, SAMPLE_TARGET, &status)?;

        let path = out.join(kind.file_name());
        std::fs::write(&path, source)?;
        println!("Wrote {} to disk.", path.display());
        written.push(path);
    }

    let expected = out.join(EXPECTED_FILE);
    std::fs::write(&expected, &content)?;
    println!("--- Expected file output (to {SAMPLE_TARGET}) in {} ---", expected.display());
    println!("{content}");
    written.push(expected);

    Ok(written)
}
