// src/cli/languages.rs — List the language registry

use crate::relay::{LanguageKind, PlainFormatter};

pub fn render_languages() -> String {
    let mut out = String::new();
    for kind in LanguageKind::ALL {
        let info = kind.info();
        let role = if kind.is_base() { " (base)" } else { "" };
        out.push_str(&format!("{}{}\n", info.name, role));
        out.push_str(&format!("  File:    {}\n", info.file_name));
        out.push_str(&format!("  Tokens:  {}\n", info.tokens.all().join(" ")));
        if !info.aliases.is_empty() {
            out.push_str(&format!("  Aliases: {}\n", info.aliases.join(", ")));
        }
        for line in info.instructions.lines(&PlainFormatter) {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

pub fn show_languages() -> anyhow::Result<()> {
    print!("{}", render_languages());
    Ok(())
}
