// src/relay/escape.rs — Sentinel-token escaping for embedded string literals
//
// Every language in the relay carries four escape tokens, one each for
// backslash, newline, double quote and carriage return. Encoding swaps the
// raw characters for tokens so arbitrary text fits inside a plain `"..."`
// literal; the generated program swaps them back at run time.
//
// Encoding and decoding are two separate, explicitly ordered rule lists:
//   encode: backslash, newline, quote, carriage return
//   decode: carriage return, quote, newline, backslash
//
// Known limitations:
//   - content that already contains one of the language's own tokens is
//     corrupted on decode. Tokens are picked so that this does not happen
//     for any template in the registry.
//   - the deactivating (base) sanitizer maps every `^` in the content to `_`
//     on decode, since `^` is what deactivated token leads look like.
//     Relay payloads carry exactly one `^`: the nested placeholder.

use serde::Serialize;

/// The character every escape token in the registry starts with.
pub const TOKEN_LEAD: &str = "_";

/// Stand-in for [`TOKEN_LEAD`] while text is embedded in the base program.
pub const INERT_LEAD: &str = "^";

/// Turns every token in the base payload (including those of downstream
/// languages) into inert text.
pub const DEACTIVATE: Rule = Rule::new(TOKEN_LEAD, INERT_LEAD);

/// Inverse of [`DEACTIVATE`]; always the first decode step of the base.
pub const REACTIVATE: Rule = Rule::new(INERT_LEAD, TOKEN_LEAD);

/// One literal substring substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Rule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }
}

/// Apply rules in order, each one over the whole text.
pub fn apply(text: &str, rules: &[Rule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| acc.replace(rule.pattern, rule.replacement))
}

/// A language's backslash / newline / double-quote / carriage-return tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTokens {
    pub backslash: &'static str,
    pub newline: &'static str,
    pub quote: &'static str,
    pub carriage_return: &'static str,
}

impl EscapeTokens {
    pub const fn new(
        backslash: &'static str,
        newline: &'static str,
        quote: &'static str,
        carriage_return: &'static str,
    ) -> Self {
        Self {
            backslash,
            newline,
            quote,
            carriage_return,
        }
    }

    /// Backslash goes first so later steps never see a backslash that was
    /// not in the content.
    pub fn encode_rules(&self) -> [Rule; 4] {
        [
            Rule::new("\\", self.backslash),
            Rule::new("\n", self.newline),
            Rule::new("\"", self.quote),
            Rule::new("\r", self.carriage_return),
        ]
    }

    /// Exactly the encode rules inverted, last one first.
    pub fn decode_rules(&self) -> [Rule; 4] {
        [
            Rule::new(self.carriage_return, "\r"),
            Rule::new(self.quote, "\""),
            Rule::new(self.newline, "\n"),
            Rule::new(self.backslash, "\\"),
        ]
    }

    pub fn all(&self) -> [&'static str; 4] {
        [self.backslash, self.newline, self.quote, self.carriage_return]
    }

    /// First token of this set that occurs in `text`.
    pub fn found_in(&self, text: &str) -> Option<&'static str> {
        self.all().into_iter().find(|token| text.contains(token))
    }
}

/// Encoder/decoder pair for one language.
///
/// The base language additionally deactivates every token lead after
/// encoding and reactivates it before anything else on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sanitizer {
    tokens: EscapeTokens,
    deactivation: bool,
}

impl Sanitizer {
    pub const fn plain(tokens: EscapeTokens) -> Self {
        Self {
            tokens,
            deactivation: false,
        }
    }

    pub const fn deactivating(tokens: EscapeTokens) -> Self {
        Self {
            tokens,
            deactivation: true,
        }
    }

    pub fn tokens(&self) -> EscapeTokens {
        self.tokens
    }

    pub fn encode_rules(&self) -> Vec<Rule> {
        let mut rules = self.tokens.encode_rules().to_vec();
        if self.deactivation {
            rules.push(DEACTIVATE);
        }
        rules
    }

    pub fn decode_rules(&self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(5);
        if self.deactivation {
            rules.push(REACTIVATE);
        }
        rules.extend(self.tokens.decode_rules());
        rules
    }

    pub fn encode(&self, text: &str) -> String {
        apply(text, &self.encode_rules())
    }

    /// What the generated program computes at run time.
    pub fn decode(&self, text: &str) -> String {
        apply(text, &self.decode_rules())
    }
}

/// A rule rendered into target-language literal syntax, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleLiteral {
    pub pattern: String,
    pub replacement: String,
    /// Byte length of the raw pattern.
    pub width: usize,
}

impl RuleLiteral {
    pub fn from_rules(rules: &[Rule], escape: fn(&str) -> String) -> Vec<Self> {
        rules
            .iter()
            .map(|rule| RuleLiteral {
                pattern: escape(rule.pattern),
                replacement: escape(rule.replacement),
                width: rule.pattern.len(),
            })
            .collect()
    }
}

/// Escape text for the inside of a C-style `"..."` literal (C, C++, C#, Rust).
pub fn source_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`source_literal`].
pub fn unescape_source_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Spell every character as a `\uXXXX` escape.
///
/// Used for the base language's replace arguments so that neither the token
/// lead, the inert lead nor any token appears verbatim in its source.
pub fn unicode_escaped(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code > 0xFFFF {
                format!("\\U{code:08x}")
            } else {
                format!("\\u{code:04x}")
            }
        })
        .collect()
}
