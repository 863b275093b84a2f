//! View module.
//!
//! Handlers never print. Each turn they push [`OutputLine`]s onto a [`View`],
//! tagged with a semantic [`Style`]; the host decides how each style looks.

/// Semantic role of a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Title,
    Subtitle,
    Narrative,
    Info,
    Action,
    Warning,
    Error,
    GameOver,
    Success,
}

/// One line of output with its style tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: Style,
}

impl OutputLine {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Output accumulated over one turn, in order.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub lines: Vec<OutputLine>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, style: Style, text: impl Into<String>) {
        self.lines.push(OutputLine::new(style, text));
    }

    pub fn title(&mut self, text: impl Into<String>) {
        self.push(Style::Title, text);
    }
    pub fn subtitle(&mut self, text: impl Into<String>) {
        self.push(Style::Subtitle, text);
    }
    pub fn narrative(&mut self, text: impl Into<String>) {
        self.push(Style::Narrative, text);
    }
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Style::Info, text);
    }
    pub fn action(&mut self, text: impl Into<String>) {
        self.push(Style::Action, text);
    }
    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(Style::Warning, text);
    }
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Style::Error, text);
    }
    pub fn game_over(&mut self, text: impl Into<String>) {
        self.push(Style::GameOver, text);
    }
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Style::Success, text);
    }

    /// Hand over everything pushed so far, leaving the view empty.
    pub fn take_lines(&mut self) -> Vec<OutputLine> {
        std::mem::take(&mut self.lines)
    }

    /// True if any line contains `needle`. Handy in tests.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }
}
