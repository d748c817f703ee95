use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn track_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn artist(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn rank(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn score(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
