pub mod manager;

pub use manager::{ChangeEvent, LedgerManager, Subscription};
