// src/relay/minimize.rs — Condense multi-line templates before embedding
//
// Fewer line breaks means fewer newline tokens to encode and decode at every
// layer of the relay, and nothing line-sensitive left for a later layer to
// trip over.

/// Statement and block terminators after which a line break can go.
pub const TERMINATORS: &[char] = &[';', '{', '}'];

/// Line-oriented source condenser.
///
/// Steps, in order:
///   1. strip leading and trailing whitespace from every line
///   2. drop empty lines and lines starting with a comment marker
///   3. join a line onto the previous one (with a single space) when the
///      previous one ends with a terminator, or always in aggressive mode
///
/// Trailing comments on code lines are not recognised, so templates must
/// keep comments on their own lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimizer {
    pub comment_markers: &'static [&'static str],
    pub terminators: &'static [char],
    pub aggressive: bool,
}

impl Minimizer {
    pub const fn new(comment_markers: &'static [&'static str]) -> Self {
        Self {
            comment_markers,
            terminators: TERMINATORS,
            aggressive: false,
        }
    }

    /// For languages whose syntax tolerates any line being merged.
    pub const fn aggressive(mut self) -> Self {
        self.aggressive = true;
        self
    }

    pub fn minimize(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        let mut joinable = false;

        for line in source.lines().map(str::trim) {
            if line.is_empty() || self.is_comment(line) {
                continue;
            }
            if !out.is_empty() {
                out.push(if joinable || self.aggressive { ' ' } else { '\n' });
            }
            out.push_str(line);
            joinable = line.ends_with(self.terminators);
        }

        out
    }

    fn is_comment(&self, line: &str) -> bool {
        self.comment_markers
            .iter()
            .any(|marker| line.starts_with(marker))
    }
}
