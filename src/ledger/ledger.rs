use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::Category, transaction::Transaction};

pub(crate) const CURRENT_SCHEMA_VERSION: u8 = 1;

/// In-memory object graph mirrored by the persisted snapshot.
///
/// Collections keep insertion order; all validation and persistence
/// orchestration lives in the manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            categories: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

impl Ledger {
    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.id == id)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    /// Removes a category together with every transaction referencing it.
    /// Returns how many transactions were cascaded, or `None` for unknown ids.
    pub fn remove_category(&mut self, id: Uuid) -> Option<usize> {
        self.category(id)?;
        let before = self.transactions.len();
        self.transactions
            .retain(|transaction| transaction.category_id != id);
        self.categories.retain(|category| category.id != id);
        Some(before - self.transactions.len())
    }

    /// Removes a transaction by identity. Returns `false` for unknown ids.
    pub fn remove_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);
        self.transactions.len() != before
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ColorName, IconName};

    #[test]
    fn remove_category_cascades_only_its_transactions() {
        let mut ledger = Ledger::default();
        let food = ledger.add_category(Category::new("Food", ColorName::Red, IconName::Cart));
        let rent = ledger.add_category(Category::new("Rent", ColorName::Blue, IconName::House));
        ledger.add_transaction(Transaction::new_now(-12.0, "lunch", food));
        ledger.add_transaction(Transaction::new_now(-700.0, "october", rent));
        ledger.add_transaction(Transaction::new_now(-8.5, "dinner", food));

        assert_eq!(ledger.remove_category(food), Some(2));
        assert_eq!(ledger.categories.len(), 1);
        assert_eq!(ledger.transactions.len(), 1);
        assert_eq!(ledger.transactions[0].category_id, rent);
    }

    #[test]
    fn remove_category_rejects_unknown_id() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.remove_category(Uuid::new_v4()), None);
    }
}
