//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.
//! [`paint`] maps the engine's semantic [`Style`] tags onto them.

use colored::{ColoredString, Colorize};

use crate::view::Style;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn subtitle_style(&self) -> ColoredString;
    fn narrative_style(&self) -> ColoredString;
    fn info_style(&self) -> ColoredString;
    fn action_style(&self) -> ColoredString;
    fn warning_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn game_over_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bold().truecolor(240, 240, 255).underline()
    }
    fn subtitle_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn narrative_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn info_style(&self) -> ColoredString {
        self.truecolor(180, 180, 180)
    }
    fn action_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn warning_style(&self) -> ColoredString {
        self.bold().truecolor(230, 150, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn game_over_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30).reversed()
    }
    fn success_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn subtitle_style(&self) -> ColoredString {
        self.as_str().subtitle_style()
    }
    fn narrative_style(&self) -> ColoredString {
        self.as_str().narrative_style()
    }
    fn info_style(&self) -> ColoredString {
        self.as_str().info_style()
    }
    fn action_style(&self) -> ColoredString {
        self.as_str().action_style()
    }
    fn warning_style(&self) -> ColoredString {
        self.as_str().warning_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn game_over_style(&self) -> ColoredString {
        self.as_str().game_over_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Apply the terminal look for `style` to `text`.
pub fn paint(style: Style, text: &str) -> ColoredString {
    match style {
        Style::Title => text.title_style(),
        Style::Subtitle => text.subtitle_style(),
        Style::Narrative => text.narrative_style(),
        Style::Info => text.info_style(),
        Style::Action => text.action_style(),
        Style::Warning => text.warning_style(),
        Style::Error => text.error_style(),
        Style::GameOver => text.game_over_style(),
        Style::Success => text.success_style(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painted_lines_carry_ansi_codes() {
        colored::control::set_override(true);
        let out = paint(Style::GameOver, "Game Over").to_string();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("Game Over"));
    }
}
