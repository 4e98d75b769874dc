//! ms-core - Core library for migseq
//!
//! This crate lists a migrations directory, orders its entries, derives the
//! next zero-padded migration number and creates the new migration directory.

pub mod config;
pub mod creator;
pub mod deriver;
pub mod error;
pub mod lister;
pub mod ordinal;
pub mod scaffold;
pub mod sorter;

pub use config::{ReportTiming, ScaffoldConfig};
pub use creator::create_migration;
pub use deriver::{derive_next, next_migration_number};
pub use error::{ScaffoldError, ScaffoldResult};
pub use lister::list_entries;
pub use ordinal::Ordinal;
pub use scaffold::{scaffold, ScaffoldOutcome, ScaffoldRequest};
pub use sorter::{locale_compare, sort_entries, SortMode};
