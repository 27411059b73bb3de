//! Ledger domain models, persistence-friendly types, and aggregation helpers.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use category::{Category, ColorName, IconName};
pub use ledger::Ledger;
pub use summary::{Period, PeriodGroup, TrailingWindow};
pub use transaction::Transaction;
