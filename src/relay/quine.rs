// src/relay/quine.rs — The base language: a program that contains a hole for itself
//
// The base template is rendered twice. First with PLACEHOLDER as payload,
// giving the raw base source that the innermost writer must reproduce. Then,
// once the fold has wrapped that raw source in every writer, the encoded
// placeholder inside the raw source's payload literal is swapped for the
// encoded fold result. At run time the program decodes its payload and puts
// its own literal back where the placeholder was, which yields the first
// writer's source with the finished base nested inside it.

use minijinja::context;

use super::escape::{source_literal, unicode_escaped, EscapeTokens, RuleLiteral, Sanitizer, INERT_LEAD};
use super::language::LanguageKind;
use super::writer::render;
use super::Result;
use crate::infra::errors::RelayError;

/// Stands for "my own final payload" until the relay is closed.
pub const PLACEHOLDER: &str = "_RWP";

/// Tokens for the base program's status literal. That literal is never
/// deactivated, so its tokens must not start with the token lead.
pub const STATUS_TOKENS: EscapeTokens = EscapeTokens::new("@bP", "@nP", "@qP", "@rP");

const PYTHON_TEMPLATE: &str = r#"
# The whole relay, encoded, with every escape token deactivated.
p="{{ payload }}";
# Reactivate, decode, then put the encoded payload back into its own hole.
p2=p{% for rule in decode %}.replace("{{ rule.pattern }}","{{ rule.replacement }}"){% endfor %}.replace("{{ placeholder }}",p);
f=open("{{ file_name }}","w+");
f.write(p2);
f.close();
print("{{ status }}"{% for rule in status_decode %}.replace("{{ rule.pattern }}","{{ rule.replacement }}"){% endfor %})
"#;

const BASE: LanguageKind = LanguageKind::Python;

pub fn sanitizer() -> Sanitizer {
    Sanitizer::deactivating(BASE.info().tokens)
}

pub fn status_sanitizer() -> Sanitizer {
    Sanitizer::plain(STATUS_TOKENS)
}

/// The payload literal as it appears in the base source.
fn hole(encoded: &str) -> String {
    format!("p=\"{encoded}\"")
}

/// Render the base program embedding `payload`, writing `next_file`.
pub fn build_quine(payload: &str, next_file: &str, status: &str) -> Result<String> {
    let info = BASE.info();
    let source = info.minimizer.minimize(PYTHON_TEMPLATE);
    let sanitizer = sanitizer();
    let status_sanitizer = status_sanitizer();

    let encoded_payload = sanitizer.encode(payload);
    let encoded_status = status_sanitizer.encode(status);
    info.check_literal("payload", &encoded_payload)?;
    info.check_literal("status", &encoded_status)?;

    render(
        &source,
        context! {
            payload => encoded_payload,
            decode => RuleLiteral::from_rules(&sanitizer.decode_rules(), unicode_escaped),
            placeholder => unicode_escaped(PLACEHOLDER),
            file_name => source_literal(next_file),
            status => encoded_status,
            status_decode => RuleLiteral::from_rules(&status_sanitizer.decode_rules(), unicode_escaped),
        },
    )
}

/// The raw base source: the template with its hole still open.
pub fn build_placeholder(next_file: &str, status: &str) -> Result<String> {
    build_quine(PLACEHOLDER, next_file, status)
}

/// Fill the hole in `raw` with `payload`, exactly once.
///
/// This is a plain substring swap on the encoded text; the result is the
/// same as rendering [`build_quine`] with `payload` directly.
pub fn close(raw: &str, payload: &str) -> Result<String> {
    let sanitizer = sanitizer();
    let open = hole(&sanitizer.encode(PLACEHOLDER));
    let found = raw.matches(&open).count();
    if found != 1 {
        return Err(RelayError::PlaceholderHole { found });
    }

    let inert = payload.matches(INERT_LEAD).count();
    if inert != 1 {
        tracing::warn!(
            "payload carries {inert} deactivated leads, expected exactly the one in the nested placeholder"
        );
    }
    if let Some(token) = sanitizer.tokens().found_in(payload) {
        tracing::warn!("payload already contains base escape token {token}");
    }

    let encoded = sanitizer.encode(payload);
    BASE.info().check_literal("payload", &encoded)?;
    Ok(raw.replacen(&open, &hole(&encoded), 1))
}
