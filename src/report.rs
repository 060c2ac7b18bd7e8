//! Status reporting
//!
//! Colored status lines and the run summary. Everything here goes to stderr so
//! stdout only ever carries the word list.

use bytesize::ByteSize;
use colored::*;
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Counters for a single filtering pass
#[derive(Debug)]
pub struct FilterStats {
    pub input_bytes: u64,
    pub total_lines: u64,
    pub length_rejected: u64,
    pub charset_rejected: u64,
    pub duplicate_words: u64,
    pub unique_words: u64,
    pub start_time: Instant,
}

impl FilterStats {
    pub fn new() -> Self {
        Self {
            input_bytes: 0,
            total_lines: 0,
            length_rejected: 0,
            charset_rejected: 0,
            duplicate_words: 0,
            unique_words: 0,
            start_time: Instant::now(),
        }
    }

    /// Lines that passed both the length and the charset test
    pub fn matched_lines(&self) -> u64 {
        self.total_lines - self.length_rejected - self.charset_rejected
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                    WORD LIST COMPLETE".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {}", "Data read:      ".green(), ByteSize(self.input_bytes));
        eprintln!("  {} {}", "Total lines:    ".green(), format_number(self.total_lines));
        eprintln!("  {} {}", "Wrong length:   ".yellow(), format_number(self.length_rejected));
        eprintln!("  {} {}", "Bad characters: ".yellow(), format_number(self.charset_rejected));
        eprintln!("  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicate_words));
        eprintln!(
            "  {} {}",
            "Unique output:  ".green().bold(),
            format_number(self.unique_words).green().bold()
        );

        eprintln!();
        eprintln!("  {} {:?}", "Duration:       ".green(), self.elapsed());
        eprintln!("{}", "═".repeat(60).green());
    }
}

impl Default for FilterStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_matched_lines() {
        let stats = FilterStats {
            total_lines: 100,
            length_rejected: 70,
            charset_rejected: 10,
            ..FilterStats::new()
        };

        assert_eq!(stats.matched_lines(), 20);
    }
}
