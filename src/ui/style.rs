//! Terminal palette shared by the wizard screens and the strategy report.
//!
//! Every helper returns a styled `String`; `console` drops the escape codes
//! when stdout is not a terminal or colors are disabled.

use console::Style;
use std::fmt::Display;

/// Semantic roles text can play on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Heading,
    Muted,
    Notice,
    Alert,
    Blocking,
    Value,
    Accent,
    Label,
    Quote,
}

impl Tone {
    fn style(self) -> Style {
        let base = Style::new();
        match self {
            Self::Success => base.green().bold(),
            Self::Heading => base.white().bold(),
            Self::Muted => base.dim(),
            Self::Notice => base.yellow(),
            Self::Alert => base.yellow().bold(),
            Self::Blocking => base.red().bold(),
            Self::Value => base.green(),
            Self::Accent => base.cyan().bold(),
            Self::Label => base.cyan(),
            Self::Quote => base.italic(),
        }
    }
}

pub fn paint<D: Display>(tone: Tone, text: D) -> String {
    tone.style().apply_to(text).to_string()
}

/// Checkmarks and confirmations.
pub fn success<D: Display>(text: D) -> String {
    paint(Tone::Success, text)
}

/// Section and card titles.
pub fn header<D: Display>(text: D) -> String {
    paint(Tone::Heading, text)
}

/// Subtitles, hints, rules.
pub fn dim<D: Display>(text: D) -> String {
    paint(Tone::Muted, text)
}

pub fn yellow<D: Display>(text: D) -> String {
    paint(Tone::Notice, text)
}

/// Validation alerts and non-blocking issues.
pub fn warning<D: Display>(text: D) -> String {
    paint(Tone::Alert, text)
}

/// Submission failures and blocking issues.
pub fn error<D: Display>(text: D) -> String {
    paint(Tone::Blocking, text)
}

/// Budgets, paths, confirmed values.
pub fn value<D: Display>(text: D) -> String {
    paint(Tone::Value, text)
}

/// Step counters and phase numbers.
pub fn accent<D: Display>(text: D) -> String {
    paint(Tone::Accent, text)
}

/// Bullets and inline labels.
pub fn cyan<D: Display>(text: D) -> String {
    paint(Tone::Label, text)
}

/// Core messaging and mitigations.
pub fn quote<D: Display>(text: D) -> String {
    paint(Tone::Quote, text)
}
