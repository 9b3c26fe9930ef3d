//! Styling helpers for terminal output.
//!
//! The [`PromptStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to console text.
pub trait PromptStyle {
    fn prompt_style(&self) -> ColoredString;
    fn result_label_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl PromptStyle for &str {
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(102, 208, 250)
    }
    fn result_label_style(&self) -> ColoredString {
        self.bold().truecolor(220, 180, 40)
    }
    fn error_style(&self) -> ColoredString {
        self.red().bold()
    }
}

impl PromptStyle for String {
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn result_label_style(&self) -> ColoredString {
        self.as_str().result_label_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
