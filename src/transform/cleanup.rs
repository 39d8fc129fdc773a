//! Text cleanup applied to every piece of extracted text.

/// Typographic characters replaced with their plain ASCII equivalents.
const REPLACEMENTS: [(char, char); 5] = [
    ('\u{00A0}', ' '),  // no-break space
    ('\u{201C}', '"'),  // “
    ('\u{201D}', '"'),  // ”
    ('\u{2018}', '\''), // ‘
    ('\u{2019}', '\''), // ’
];

/// Normalizes text extracted from HTML.
///
/// Each source line is normalized and trimmed, then the lines are joined
/// with a single space, so the result never contains a newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCleaner {
    ascii_only: bool,
}

impl TextCleaner {
    /// Create a cleaner that keeps non-ASCII characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every non-ASCII character left after replacement.
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    /// Whether non-ASCII characters are removed.
    pub fn is_ascii_only(&self) -> bool {
        self.ascii_only
    }

    /// Clean a block of text. Never fails; may return an empty string.
    pub fn clean(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| self.clean_line(line))
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    fn clean_line(&self, line: &str) -> String {
        let replaced: String = line
            .chars()
            .map(replace_char)
            .filter(|c| !self.ascii_only || c.is_ascii())
            .collect();
        replaced.trim().to_string()
    }
}

fn replace_char(c: char) -> char {
    REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}
