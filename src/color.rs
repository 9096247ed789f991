//! Terminal color utilities using ANSI escape codes.

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

use codes::*;

/// Color success messages (green + bold).
pub fn success(text: &str) -> String {
    format!("{}{}{}{}", BOLD, GREEN, text, RESET)
}

/// Color failure messages (red + bold).
pub fn failed(text: &str) -> String {
    format!("{}{}{}{}", BOLD, RED, text, RESET)
}

/// Color warnings (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color section labels (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

/// Color informational values (cyan).
pub fn info(text: &str) -> String {
    format!("{}{}{}", CYAN, text, RESET)
}

/// Color numbers (bold cyan).
pub fn number<N: std::fmt::Display>(n: N) -> String {
    format!("{}{}{}{}", BOLD, CYAN, n, RESET)
}

/// Dim secondary text.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", DIM, text, RESET)
}
