// src/relay/chain.rs — The ordered, cyclic sequence of languages
//
// Position 0 is always the base language; the writers follow in the order
// the user sees them run. The last writer produces the base again.

use std::collections::HashMap;

use super::language::LanguageKind;
use super::status::StatusFormatter;
use super::Result;
use crate::infra::errors::RelayError;

/// Writers of the classic four-language relay, in forward order.
pub const DEFAULT_WRITERS: [LanguageKind; 3] =
    [LanguageKind::C, LanguageKind::Cpp, LanguageKind::CSharp];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    links: Vec<LanguageKind>,
}

impl Chain {
    /// Build a chain of the base language followed by `writers`.
    ///
    /// Fails when fewer than two links would result, when a language repeats,
    /// when the base is listed as a writer, or when two links share an
    /// escape token.
    pub fn new(writers: Vec<LanguageKind>) -> Result<Self> {
        let mut links = Vec::with_capacity(writers.len() + 1);
        links.push(LanguageKind::Python);
        links.extend(writers);

        if links.len() < 2 {
            return Err(RelayError::ChainTooShort { len: links.len() });
        }

        for (i, kind) in links.iter().enumerate().skip(1) {
            if kind.is_base() {
                return Err(RelayError::BaseAsWriter {
                    name: kind.name().into(),
                });
            }
            if links[..i].contains(kind) {
                return Err(RelayError::DuplicateLanguage {
                    name: kind.name().into(),
                });
            }
        }

        let mut owners: HashMap<&'static str, LanguageKind> = HashMap::new();
        for &kind in &links {
            for token in kind.info().tokens.all() {
                if let Some(first) = owners.insert(token, kind) {
                    return Err(RelayError::TokenCollision {
                        first: first.name().into(),
                        second: kind.name().into(),
                        token: token.into(),
                    });
                }
            }
        }

        Ok(Self { links })
    }

    /// Parse writer names (display names or aliases).
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let writers = names
            .iter()
            .map(|n| LanguageKind::from_name(n.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(writers)
    }

    pub fn base(&self) -> LanguageKind {
        self.links[0]
    }

    pub fn links(&self) -> &[LanguageKind] {
        &self.links
    }

    /// Every link after the base, in forward order.
    pub fn writers(&self) -> &[LanguageKind] {
        &self.links[1..]
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn position(&self, kind: LanguageKind) -> Result<usize> {
        self.links
            .iter()
            .position(|&k| k == kind)
            .ok_or_else(|| RelayError::not_found(kind.name()))
    }

    fn at(&self, index: isize) -> LanguageKind {
        let len = self.links.len() as isize;
        self.links[index.rem_euclid(len) as usize]
    }

    /// The language `kind`'s program writes.
    pub fn next(&self, kind: LanguageKind) -> Result<LanguageKind> {
        Ok(self.at(self.position(kind)? as isize + 1))
    }

    /// The language whose program writes `kind`.
    pub fn previous(&self, kind: LanguageKind) -> Result<LanguageKind> {
        Ok(self.at(self.position(kind)? as isize - 1))
    }

    /// File written by the program of the language called `name`.
    pub fn file_name_after(&self, name: &str) -> Result<&'static str> {
        let kind = LanguageKind::from_name(name)?;
        Ok(self.next(kind)?.file_name())
    }

    /// The text a program prints after writing its successor:
    ///
    /// ```text
    /// ... -> [C] -> C++ -> ... -> Python -> C -> ...
    /// Current language: C. Next language: C++.
    /// Wrote SDQR.cpp to current directory.
    /// Compile: g++ --std=gnu++11 SDQR.cpp -o SDQR-c++
    /// Run: ./SDQR-c++
    /// ```
    ///
    /// No trailing newline; the generated program adds it.
    pub fn status_message(&self, kind: LanguageKind, fmt: &dyn StatusFormatter) -> Result<String> {
        let next = self.next(kind)?;
        let previous = self.previous(kind)?;

        let arrow = fmt.muted(" -> ");
        let dots = fmt.muted("...");
        let diagram = [
            dots.clone(),
            fmt.current(kind),
            fmt.language(next),
            dots.clone(),
            fmt.language(previous),
            fmt.language(kind),
            dots,
        ]
        .join(arrow.as_str());

        let mut lines = vec![
            diagram,
            format!(
                "Current language: {}. Next language: {}.",
                fmt.language(kind),
                fmt.language(next)
            ),
            format!("Wrote {} to current directory.", next.file_name()),
        ];
        lines.extend(next.info().instructions.lines(fmt));

        Ok(lines.join("\n"))
    }
}

impl Default for Chain {
    fn default() -> Self {
        let mut links = vec![LanguageKind::Python];
        links.extend(DEFAULT_WRITERS);
        Self { links }
    }
}
