// tests/properties_test.rs — Property tests: escaping, writers and minimization
//
// The round-trip guarantees hold for any text that does not already carry
// one of the sanitizer's own tokens, not just for hand-picked samples.

use proptest::prelude::*;

use sdqr::relay::escape::{Sanitizer, INERT_LEAD};
use sdqr::relay::minimize::Minimizer;
use sdqr::relay::quine::{self, PLACEHOLDER};
use sdqr::relay::{simulate, writer, LanguageKind};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const WRITERS: [LanguageKind; 4] = [
    LanguageKind::C,
    LanguageKind::Cpp,
    LanguageKind::CSharp,
    LanguageKind::Rust,
];

/// Printable ASCII plus tab, newline and carriage return.
fn arb_text() -> impl Strategy<Value = String> {
    "[ -~\t\r\n]{0,160}"
}

/// Text biased towards the characters that need escaping.
fn arb_escapy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\\".to_string()),
            Just("\"".to_string()),
            Just("\n".to_string()),
            Just("\r".to_string()),
            Just("_".to_string()),
            "[ -~]{1,4}",
        ],
        0..48,
    )
    .prop_map(|parts| parts.concat())
}

/// Multi-line source with indentation, comments, blanks and terminators.
fn arb_source() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[ \t]{0,4}[ -~]{0,24}",
            "[ \t]{0,4}// [ -~]{0,12}",
            "[ -~]{0,12}[;{}]",
            Just(String::new()),
        ],
        0..16,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Every sanitizer in the registry, with the base ones last.
fn all_sanitizers() -> Vec<Sanitizer> {
    let mut sanitizers: Vec<Sanitizer> = WRITERS.iter().map(|&k| writer::sanitizer(k)).collect();
    sanitizers.push(quine::sanitizer());
    sanitizers.push(quine::status_sanitizer());
    sanitizers
}

/// Whether `text` is inside the round-trip guarantee of `sanitizer`.
fn representable(sanitizer: &Sanitizer, text: &str) -> bool {
    // The base maps a literal caret to the token lead on the way back.
    let deactivating = *sanitizer == quine::sanitizer();
    sanitizer.tokens().found_in(text).is_none() && !(deactivating && text.contains(INERT_LEAD))
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Decoding undoes encoding for every sanitizer.
    #[test]
    fn test_sanitizers_round_trip(text in prop_oneof![arb_text(), arb_escapy_text()]) {
        for sanitizer in all_sanitizers() {
            if !representable(&sanitizer, &text) {
                continue;
            }
            let encoded = sanitizer.encode(&text);
            prop_assert!(!encoded.contains(['"', '\\', '\n', '\r']));
            prop_assert_eq!(sanitizer.decode(&encoded), text.clone());
        }
    }

    /// Minimizing twice changes nothing, in both modes.
    #[test]
    fn test_minimize_is_idempotent(source in arb_source()) {
        for minimizer in [Minimizer::new(&["//"]), Minimizer::new(&["//"]).aggressive()] {
            let once = minimizer.minimize(&source);
            prop_assert_eq!(minimizer.minimize(&once), once);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every writer program writes back exactly the payload it embeds.
    #[test]
    fn test_writers_reproduce_payload(
        payload in prop_oneof![arb_text(), arb_escapy_text()],
        status in "[ -~\r\n]{0,40}",
    ) {
        for kind in WRITERS {
            let sanitizer = writer::sanitizer(kind);
            if !representable(&sanitizer, &payload) || !representable(&sanitizer, &status) {
                continue;
            }
            let source = writer::build(kind, &payload, "next.txt", &status).unwrap();
            let run = simulate::execute(kind, &source).unwrap();
            prop_assert_eq!(&run.file_name, "next.txt");
            prop_assert_eq!(&run.written, &payload);
            prop_assert_eq!(&run.printed, &status);
        }
    }

    /// The base program writes back its payload when no placeholder is in it.
    #[test]
    fn test_base_reproduces_payload(payload in prop_oneof![arb_text(), arb_escapy_text()]) {
        prop_assume!(representable(&quine::sanitizer(), &payload));
        prop_assume!(!payload.contains(PLACEHOLDER));

        let source = quine::build_quine(&payload, "SDQR.c", "status").unwrap();
        let run = simulate::execute(LanguageKind::Python, &source).unwrap();
        prop_assert_eq!(run.written, payload);
    }
}
