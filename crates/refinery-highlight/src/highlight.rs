//! Syntax highlighting via syntect with the two-face syntax and theme bundles.

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra},
};

use crate::style::colors;

/// Highlights markdown and TOML for a 24-bit color terminal.
pub struct Highlighter {
    /// Language definitions, including TOML.
    syntaxes: SyntaxSet,
    /// Lazily decoded themes.
    themes: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Nord theme.
    pub fn new() -> Self {
        Self::with_theme(EmbeddedThemeName::Nord)
    }

    /// Creates a highlighter using `theme`.
    pub fn with_theme(theme: EmbeddedThemeName) -> Self {
        Self {
            syntaxes: extra_newlines(),
            themes: extra(),
            theme,
        }
    }

    /// Highlights a chunk body.
    pub fn markdown(&self, content: &str) -> String {
        self.render(content, self.syntax("md"))
    }

    /// Highlights configuration text.
    pub fn toml(&self, content: &str) -> String {
        self.render(content, self.syntax("toml"))
    }

    /// Finds a syntax by extension, falling back to plain text.
    fn syntax(&self, extension: &str) -> &SyntaxReference {
        self.syntaxes
            .find_syntax_by_extension(extension)
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }

    /// Renders `content` line by line, ending with a color reset.
    fn render(&self, content: &str, syntax: &SyntaxReference) -> String {
        let mut lines = HighlightLines::new(syntax, self.themes.get(self.theme));
        let mut out = String::with_capacity(content.len() * 2);

        for line in LinesWithEndings::from(content) {
            match lines.highlight_line(line, &self.syntaxes) {
                Ok(ranges) => out.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
                Err(_) => {
                    let plain: [(Style, &str); 1] = [(Style::default(), line)];
                    out.push_str(&as_24_bit_terminal_escaped(&plain, false));
                }
            }
        }

        out.push_str(colors::RESET);
        out
    }
}
