use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single signed monetary event: positive value = income, negative = expense.
///
/// The category reference is required at the type level; a transaction without
/// a category cannot be constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub value: f64,
    pub note: String,
    pub date: DateTime<Utc>,
    pub category_id: Uuid,
}

impl Transaction {
    pub fn new(
        value: f64,
        note: impl Into<String>,
        category_id: Uuid,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            note: note.into(),
            date,
            category_id,
        }
    }

    /// Convenience constructor dating the transaction at the current instant.
    pub fn new_now(value: f64, note: impl Into<String>, category_id: Uuid) -> Self {
        Self::new(value, note, category_id, Utc::now())
    }

    pub fn is_income(&self) -> bool {
        self.value > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.value < 0.0
    }
}
