use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1B[0m";

/// Decoration applied to one kind of field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Size,
    Modified,
    Permissions,
    DirectoryName,
    FileName,
    Header,
    SummaryBytes,
    SummaryCount,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Size => "\x1B[36m",
            Style::Modified => "\x1B[33m",
            Style::Permissions => "\x1B[31m",
            Style::DirectoryName => "\x1B[34m",
            Style::FileName => "\x1B[32m",
            Style::Header => "\x1B[1;4m",
            Style::SummaryBytes => "\x1B[36;1m",
            Style::SummaryCount => "\x1B[34;1m",
        }
    }
}

/// Wraps text in ANSI colour sequences, or leaves it alone when colour is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colour only when stdout is a terminal.
    pub fn detect() -> Self {
        Self::new(atty::is(atty::Stream::Stdout))
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            format!("{}{}{}", style.ansi(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Paint `text` and right-pad it with spaces to `width` visible columns.
    pub fn paint_padded(&self, text: &str, style: Style, width: usize) -> String {
        let mut out = self.paint(text, style);
        out.push_str(&" ".repeat(pad(text, width)));
        out
    }
}

/// Spaces needed after undecorated `text` to fill `width` terminal columns.
pub fn pad(text: &str, width: usize) -> usize {
    width.saturating_sub(text.width())
}
