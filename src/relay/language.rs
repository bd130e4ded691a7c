// src/relay/language.rs — The closed set of relay languages
//
// Each language is a variant of `LanguageKind`; its static description
// (name, file, instructions, escape tokens, minimizer settings) lives in a
// `LanguageInfo` returned by `LanguageKind::info()`.

use super::escape::EscapeTokens;
use super::minimize::Minimizer;
use super::status::StatusFormatter;
use super::Result;
use crate::infra::errors::RelayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageKind {
    /// The self-reproducing link.
    Python,
    C,
    Cpp,
    CSharp,
    Rust,
}

impl LanguageKind {
    /// Every registered language, base first.
    pub const ALL: [LanguageKind; 5] = [
        LanguageKind::Python,
        LanguageKind::C,
        LanguageKind::Cpp,
        LanguageKind::CSharp,
        LanguageKind::Rust,
    ];

    pub fn info(self) -> &'static LanguageInfo {
        match self {
            LanguageKind::Python => &PYTHON,
            LanguageKind::C => &C,
            LanguageKind::Cpp => &CPP,
            LanguageKind::CSharp => &CSHARP,
            LanguageKind::Rust => &RUST,
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn file_name(self) -> &'static str {
        self.info().file_name
    }

    /// Only the base language can embed itself.
    pub fn is_base(self) -> bool {
        matches!(self, LanguageKind::Python)
    }

    /// Look a language up by display name or alias, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let info = kind.info();
                info.name.eq_ignore_ascii_case(wanted)
                    || info.aliases.iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| RelayError::not_found(wanted))
    }
}

impl std::fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How to get from a source file to a running program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instructions {
    /// Alternative compile commands; empty for interpreted languages.
    pub compile: &'static [&'static str],
    pub run: &'static str,
}

impl Instructions {
    pub fn lines(&self, fmt: &dyn StatusFormatter) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if !self.compile.is_empty() {
            let or = format!(" {} ", fmt.emphasis("or"));
            lines.push(format!(
                "{} {}",
                fmt.label("Compile:"),
                self.compile.join(or.as_str())
            ));
        }
        lines.push(format!("{} {}", fmt.label("Run:"), self.run));
        lines
    }
}

/// Static description of one link.
#[derive(Debug)]
pub struct LanguageInfo {
    pub kind: LanguageKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub file_name: &'static str,
    pub instructions: Instructions,
    pub tokens: EscapeTokens,
    /// Characters a plain `"..."` literal of this language cannot carry,
    /// on top of the ones the escape tokens take care of.
    pub unembeddable: &'static [char],
    pub minimizer: Minimizer,
    /// Accent colour for status output.
    pub accent: (u8, u8, u8),
}

impl LanguageInfo {
    /// First character of `literal` that would break the literal it is
    /// embedded in, or change meaning at run time.
    pub fn literal_breaker(&self, literal: &str) -> Option<char> {
        literal
            .chars()
            .find(|&c| matches!(c, '"' | '\\' | '\n' | '\r') || self.unembeddable.contains(&c))
    }

    /// Fail unless `literal` can sit between the quotes of a `"..."` literal.
    pub fn check_literal(&self, what: &'static str, literal: &str) -> Result<()> {
        match self.literal_breaker(literal) {
            Some(c) => Err(RelayError::Unembeddable {
                language: self.name.into(),
                what,
                code: c as u32,
            }),
            None => Ok(()),
        }
    }
}

// NUL ends a C string early and Python refuses it in source.
const NUL: &[char] = &['\0'];
// C# treats these as line breaks inside a regular literal.
const CSHARP_LINE_BREAKS: &[char] = &['\u{85}', '\u{2028}', '\u{2029}'];

const C_COMMENTS: &[&str] = &["//"];

static PYTHON: LanguageInfo = LanguageInfo {
    kind: LanguageKind::Python,
    name: "Python",
    aliases: &["py", "python3"],
    file_name: "SDQR.py",
    instructions: Instructions {
        compile: &[],
        run: "python3 SDQR.py",
    },
    tokens: EscapeTokens::new("_bP", "_nP", "_qP", "_rP"),
    unembeddable: NUL,
    minimizer: Minimizer::new(&["#"]),
    accent: (255, 212, 59),
};

static C: LanguageInfo = LanguageInfo {
    kind: LanguageKind::C,
    name: "C",
    aliases: &[],
    file_name: "SDQR.c",
    instructions: Instructions {
        compile: &["gcc SDQR.c -o SDQR-c", "clang SDQR.c -o SDQR-c"],
        run: "./SDQR-c",
    },
    tokens: EscapeTokens::new("_bC-", "_nC-", "_qC-", "_rC-"),
    unembeddable: NUL,
    minimizer: Minimizer::new(C_COMMENTS),
    accent: (85, 153, 255),
};

static CPP: LanguageInfo = LanguageInfo {
    kind: LanguageKind::Cpp,
    name: "C++",
    aliases: &["cpp", "cxx"],
    file_name: "SDQR.cpp",
    instructions: Instructions {
        compile: &["g++ --std=gnu++11 SDQR.cpp -o SDQR-c++"],
        run: "./SDQR-c++",
    },
    tokens: EscapeTokens::new("_bCP", "_nCP", "_qCP", "_rCP"),
    unembeddable: NUL,
    minimizer: Minimizer::new(C_COMMENTS),
    accent: (0, 89, 156),
};

static CSHARP: LanguageInfo = LanguageInfo {
    kind: LanguageKind::CSharp,
    name: "C#",
    aliases: &["cs", "csharp"],
    file_name: "SDQR.cs",
    instructions: Instructions {
        compile: &["mcs -out:SDQR-C#.exe SDQR.cs"],
        run: "mono SDQR-C#.exe",
    },
    tokens: EscapeTokens::new("_bC#", "_nC#", "_qC#", "_rC#"),
    unembeddable: CSHARP_LINE_BREAKS,
    minimizer: Minimizer::new(C_COMMENTS).aggressive(),
    accent: (104, 33, 122),
};

static RUST: LanguageInfo = LanguageInfo {
    kind: LanguageKind::Rust,
    name: "Rust",
    aliases: &["rs"],
    file_name: "SDQR.rs",
    instructions: Instructions {
        compile: &["rustc SDQR.rs -o SDQR-rs"],
        run: "./SDQR-rs",
    },
    tokens: EscapeTokens::new("_bRS", "_nRS", "_qRS", "_rRS"),
    unembeddable: &[],
    minimizer: Minimizer::new(C_COMMENTS).aggressive(),
    accent: (222, 165, 132),
};

/// File name of a language given by display name.
pub fn file_name_for(name: &str) -> Result<&'static str> {
    Ok(LanguageKind::from_name(name)?.file_name())
}

/// Compile/run instructions of a language given by display name.
pub fn instructions_for(name: &str) -> Result<Instructions> {
    Ok(LanguageKind::from_name(name)?.info().instructions)
}
