//! Terminal display helpers
//!
//! Formatting utilities for the menu's reports.

use crate::models::Money;

/// Wrap an already-formatted money string with color hints for terminal display
pub fn colorize_money(formatted: &str, amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", formatted) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", formatted) // Green for positive
    } else {
        formatted.to_string()
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_format_bar_clamps_overflow() {
        let bar = format_bar(150.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_format_bar_empty_when_no_budget() {
        let bar = format_bar(10.0, 0.0, 8);
        assert_eq!(bar.chars().filter(|c| *c == '░').count(), 8);
    }

    #[test]
    fn test_colorize_money() {
        let green = colorize_money("$10.00", Money::from_cents(1000));
        assert!(green.contains("\x1b[32m"));

        let red = colorize_money("-$10.00", Money::from_cents(-1000));
        assert!(red.contains("\x1b[31m"));

        let plain = colorize_money("$0.00", Money::zero());
        assert_eq!(plain, "$0.00");
    }

    #[test]
    fn test_separators() {
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(3), "═══");
    }
}
