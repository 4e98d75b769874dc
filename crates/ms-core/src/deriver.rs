//! Next migration number derivation

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldResult;
use crate::lister::list_entries;
use crate::ordinal::Ordinal;
use crate::sorter::{sort_entries, SortMode};
use std::collections::BTreeSet;
use std::path::Path;

/// Derive the next migration number from the entry names of a directory.
///
/// An empty list yields the first ordinal. Otherwise the entries are sorted
/// with `config.ordering`, the ordinal of the last one is parsed and
/// incremented, and the result is padded to `config.width` digits.
pub fn next_migration_number(
    entries: &[String],
    config: &ScaffoldConfig,
) -> ScaffoldResult<String> {
    let sorted = sort_entries(entries.to_vec(), config.ordering);
    let Some(last) = sorted.last() else {
        return Ok(Ordinal::FIRST.render(config.width));
    };

    if config.ordering == SortMode::Lexical {
        warn_on_mixed_widths(&sorted);
    }

    log::debug!("Last migration entry: {last}");
    let next = Ordinal::parse_leading(last)?.next()?;
    Ok(next.render(config.width))
}

/// List `dir` and derive the next migration number.
///
/// Reads only; calling it twice without creating anything returns the same value.
pub async fn derive_next(dir: &Path, config: &ScaffoldConfig) -> ScaffoldResult<String> {
    let entries = list_entries(dir).await?;
    next_migration_number(&entries, config)
}

fn warn_on_mixed_widths(entries: &[String]) {
    let widths: BTreeSet<usize> = entries
        .iter()
        .filter_map(|entry| Ordinal::written_width(entry))
        .collect();
    if widths.len() > 1 {
        log::warn!(
            "Migration ordinals have mixed widths ({:?} digits); lexical ordering may not pick the highest number",
            widths
        );
    }
}

#[cfg(test)]
#[path = "deriver_test.rs"]
mod tests;
