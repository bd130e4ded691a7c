// tests/cli_test.rs — Integration test: commands that write files

use std::path::Path;

use sdqr::cli::generate::run_generate;
use sdqr::cli::sample::{run_sample, EXPECTED_FILE, SAMPLE_TARGET};
use sdqr::infra::config::Config;
use sdqr::relay::simulate::{execute, verify_cycle};
use sdqr::relay::{Chain, LanguageKind, PlainFormatter};

fn plain_config(dir: &Path) -> Config {
    let toml_str = format!(
        "[relay]\nchain = [\"C++\", \"Rust\"]\n\n[output]\ndir = {:?}\ncolor = false\n",
        dir.display().to_string()
    );
    toml::from_str(&toml_str).unwrap()
}

#[test]
fn test_generate_writes_only_the_base_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config = plain_config(tmp.path());

    let path = run_generate(&config, None, None, false).unwrap();
    assert!(path.ends_with("SDQR.py"));

    let entries: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the base program is written");

    let source = std::fs::read_to_string(&path).unwrap();
    let chain = Chain::from_names(&["C++", "Rust"]).unwrap();
    let report = verify_cycle(&chain, &source, &PlainFormatter).unwrap();
    assert!(report.is_ok());
}

#[test]
fn test_generate_out_and_chain_override_config() {
    let tmp = tempfile::tempdir().unwrap();
    let config = plain_config(&tmp.path().join("unused"));
    let out = tmp.path().join("relay");
    let names = vec!["C".to_string()];

    let path = run_generate(&config, Some(&out), Some(names.as_slice()), true).unwrap();
    assert!(path.starts_with(std::fs::canonicalize(&out).unwrap()));
    assert!(!tmp.path().join("unused").exists());

    let source = std::fs::read_to_string(&path).unwrap();
    let run = execute(LanguageKind::Python, &source).unwrap();
    assert_eq!(run.file_name, "SDQR.c");
}

#[test]
fn test_generate_is_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let pa = run_generate(&plain_config(a.path()), None, None, true).unwrap();
    let pb = run_generate(&plain_config(b.path()), None, None, true).unwrap();
    assert_eq!(
        std::fs::read(pa).unwrap(),
        std::fs::read(pb).unwrap()
    );
}

#[test]
fn test_sample_writes_programs_and_expected_output() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = run_sample(tmp.path(), false).unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["SDQR.c", "SDQR.cpp", "SDQR.cs", "SDQR.rs", EXPECTED_FILE]
    );

    let expected = std::fs::read_to_string(tmp.path().join(EXPECTED_FILE)).unwrap();
    let source = std::fs::read_to_string(tmp.path().join("SDQR.cs")).unwrap();
    let run = execute(LanguageKind::CSharp, &source).unwrap();
    assert_eq!(run.file_name, SAMPLE_TARGET);
    assert_eq!(run.written, expected);
}
