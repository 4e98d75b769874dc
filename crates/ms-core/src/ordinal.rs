//! Leading numeric token of a migration entry name

use crate::error::{ScaffoldError, ScaffoldResult};
use std::fmt;

/// The ordinal of a migration, e.g. `3` for `003-init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(u64);

impl Ordinal {
    /// Ordinal given to the first migration in an empty directory.
    pub const FIRST: Ordinal = Ordinal(1);

    /// Wrap a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the numeric value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Parse the ordinal of an entry name.
    ///
    /// Only the segment before the first `-` is considered. Leading whitespace
    /// and a single `+` are skipped, then the leading run of ASCII digits is
    /// read as base 10; anything after the digits is ignored, so `"7-x"`,
    /// `"007-x"` and `"7abc"` all parse as 7.
    pub fn parse_leading(entry: &str) -> ScaffoldResult<Self> {
        let token = leading_token(entry);
        let unsigned = token.trim_start();
        let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);

        let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        if digit_count == 0 {
            return Err(ScaffoldError::InvalidMigrationFormat {
                entry: entry.to_string(),
                reason: format!("'{token}' does not start with a digit"),
            });
        }

        unsigned[..digit_count]
            .parse::<u64>()
            .map(Ordinal)
            .map_err(|e| ScaffoldError::InvalidMigrationFormat {
                entry: entry.to_string(),
                reason: e.to_string(),
            })
    }

    /// Ordinal following this one.
    pub fn next(self) -> ScaffoldResult<Self> {
        self.0
            .checked_add(1)
            .map(Ordinal)
            .ok_or_else(|| ScaffoldError::InvalidMigrationFormat {
                entry: self.0.to_string(),
                reason: "ordinal overflows when incremented".to_string(),
            })
    }

    /// Render left-padded with zeros to at least `width` digits.
    ///
    /// Values wider than `width` render at their natural width.
    pub fn render(self, width: usize) -> String {
        format!("{:0width$}", self.0, width = width)
    }

    /// Number of decimal digits as written in `entry`, including leading zeros.
    ///
    /// Returns `None` when the entry has no leading digits.
    pub fn written_width(entry: &str) -> Option<usize> {
        let token = leading_token(entry).trim_start();
        let token = token.strip_prefix('+').unwrap_or(token);
        let width = token.bytes().take_while(u8::is_ascii_digit).count();
        (width > 0).then_some(width)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn leading_token(entry: &str) -> &str {
    entry.split_once('-').map_or(entry, |(head, _)| head)
}

#[cfg(test)]
#[path = "ordinal_test.rs"]
mod tests;
