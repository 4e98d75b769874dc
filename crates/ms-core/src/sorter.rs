//! Ordering of migration entry names

use crate::ordinal::Ordinal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How migration entries are ordered before the last one is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Locale-aware string comparison.
    ///
    /// Matches numeric order only while every ordinal has the same width:
    /// `"10-b"` sorts before `"9-a"`.
    #[default]
    Lexical,

    /// Parsed ordinal value, with unparseable names placed first.
    Numeric,
}

/// Sort entry names ascending according to `mode`.
pub fn sort_entries(mut entries: Vec<String>, mode: SortMode) -> Vec<String> {
    match mode {
        SortMode::Lexical => entries.sort_by(|a, b| locale_compare(a, b)),
        SortMode::Numeric => entries.sort_by(|a, b| numeric_compare(a, b)),
    }
    entries
}

/// Compare two names the way a root-locale collation would.
///
/// Primary level: punctuation and whitespace before digits before letters,
/// letters without regard to case. Ties are broken lowercase-first, then by
/// code point so the order is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn primary_key(c: char) -> (u8, char) {
    if c.is_alphabetic() {
        (2, c.to_lowercase().next().unwrap_or(c))
    } else if c.is_numeric() {
        (1, c)
    } else {
        (0, c)
    }
}

fn numeric_compare(a: &str, b: &str) -> Ordering {
    match (Ordinal::parse_leading(a).ok(), Ordinal::parse_leading(b).ok()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| locale_compare(a, b)),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => locale_compare(a, b),
    }
}

#[cfg(test)]
#[path = "sorter_test.rs"]
mod tests;
