// src/relay/writer.rs — Writer templates: programs that write the next program
//
// A writer program embeds the encoded payload, decodes it at run time, writes
// it byte-for-byte to the next language's file and prints its status. The
// runtime decode logic is rendered from the same ordered rule list the
// Rust-side `Sanitizer::decode` uses, so both always agree.

use minijinja::{context, Environment};

use super::escape::{source_literal, RuleLiteral, Sanitizer};
use super::language::LanguageKind;
use super::Result;
use crate::infra::errors::RelayError;
use crate::util::preview;

const C_TEMPLATE: &str = r#"
#include <stdio.h>
#include <string.h>
#include <stdlib.h>

// Scan left to right; every escape token collapses to the character it
// stands for, everything else is copied through.
char *desanitize(const char *str) {
  char *output = calloc(strlen(str) + 1, 1);
  char *out = output;
  const char *ptr = str;
  while (*ptr != '\0') {
    {% for rule in decode %}if (strncmp(ptr, "{{ rule.pattern }}", {{ rule.width }}) == 0) {
      *out++ = '{{ rule.replacement }}';
      ptr += {{ rule.width }};
      continue;
    }
    {% endfor %}*out++ = *ptr++;
  }
  return output;
}

int main(void) {
  FILE *file = fopen("{{ file_name }}", "w");
  fputs(desanitize("{{ payload }}"), file);
  fclose(file);
  printf("%s\n", desanitize("{{ status }}"));
  return 0;
}
"#;

const CPP_TEMPLATE: &str = r#"
#include <fstream>
#include <iostream>
#include <regex>
#include <string>

// Tokens are plain alphanumerics, so each one is its own regex.
std::string desanitize(std::string str) {
  {% for rule in decode %}str = std::regex_replace(str, std::regex("{{ rule.pattern }}"), "{{ rule.replacement }}");
  {% endfor %}return str;
}

int main() {
  std::ofstream outfile("{{ file_name }}", std::ios::binary);
  outfile << desanitize("{{ payload }}");
  outfile.close();
  std::cout << desanitize("{{ status }}") << std::endl;
}
"#;

const CSHARP_TEMPLATE: &str = r#"
class MainClass {
  static string Desanitize(string str) {
    return str{% for rule in decode %}.Replace("{{ rule.pattern }}", "{{ rule.replacement }}"){% endfor %};
  }

  static void Main(string[] args) {
    System.IO.File.WriteAllText("{{ file_name }}", Desanitize("{{ payload }}"));
    System.Console.Write(Desanitize("{{ status }}") + "\n");
  }
}
"#;

const RUST_TEMPLATE: &str = r#"
fn desanitize(text: &str) -> String {
    text{% for rule in decode %}.replace("{{ rule.pattern }}", "{{ rule.replacement }}"){% endfor %}
}

fn main() {
    std::fs::write("{{ file_name }}", desanitize("{{ payload }}")).expect("cannot write {{ file_name }}");
    println!("{}", desanitize("{{ status }}"));
}
"#;

/// Raw (unminimized) template source for a writer language.
pub fn template(kind: LanguageKind) -> Result<&'static str> {
    match kind {
        LanguageKind::C => Ok(C_TEMPLATE),
        LanguageKind::Cpp => Ok(CPP_TEMPLATE),
        LanguageKind::CSharp => Ok(CSHARP_TEMPLATE),
        LanguageKind::Rust => Ok(RUST_TEMPLATE),
        LanguageKind::Python => Err(RelayError::BaseAsWriter {
            name: kind.name().into(),
        }),
    }
}

pub fn sanitizer(kind: LanguageKind) -> Sanitizer {
    Sanitizer::plain(kind.info().tokens)
}

/// Build the `kind` program that writes `payload` to `next_file` and then
/// prints `status`.
pub fn build(kind: LanguageKind, payload: &str, next_file: &str, status: &str) -> Result<String> {
    let info = kind.info();
    let source = info.minimizer.minimize(template(kind)?);

    if let Some(token) = info.tokens.found_in(payload) {
        tracing::warn!(
            "{} payload already contains escape token {token}; output will be corrupted near: {}",
            info.name,
            preview(payload, 60)
        );
    }

    let sanitizer = sanitizer(kind);
    let encoded_payload = sanitizer.encode(payload);
    let encoded_status = sanitizer.encode(status);
    info.check_literal("payload", &encoded_payload)?;
    info.check_literal("status", &encoded_status)?;

    let rendered = render(
        &source,
        context! {
            payload => encoded_payload,
            status => encoded_status,
            file_name => source_literal(next_file),
            decode => RuleLiteral::from_rules(&sanitizer.decode_rules(), source_literal),
        },
    )?;

    tracing::debug!(
        "built {} writer for {next_file}: {} -> {} bytes",
        info.name,
        payload.len(),
        rendered.len()
    );
    Ok(rendered)
}

/// Render an already-minimized template. Values are inserted verbatim.
pub(crate) fn render(source: &str, ctx: minijinja::Value) -> Result<String> {
    let env = Environment::new();
    Ok(env.render_str(source, ctx)?)
}
