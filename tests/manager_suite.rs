use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::{Duration, Utc};
use kbudget_core::core::{ChangeEvent, LedgerManager};
use kbudget_core::errors::{CoreError, StoreError};
use kbudget_core::ledger::{ColorName, IconName, Ledger, TrailingWindow};
use kbudget_core::storage::{JsonStore, StorageBackend};
use tempfile::TempDir;
use uuid::Uuid;

fn open_in(temp: &TempDir) -> LedgerManager {
    let store = JsonStore::new(temp.path().join("ledger.json"));
    LedgerManager::open(Box::new(store)).unwrap()
}

/// Backend that fails the next commit when armed, then recovers.
struct FlakyStore {
    inner: JsonStore,
    fail_next: Arc<AtomicBool>,
}

impl StorageBackend for FlakyStore {
    fn load(&self) -> Result<Ledger, StoreError> {
        self.inner.load()
    }

    fn commit(&self, ledger: &Ledger) -> Result<(), StoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Write("injected failure".to_string()));
        }
        self.inner.commit(ledger)
    }
}

#[test]
fn open_synthesizes_and_persists_the_default_category() {
    let temp = TempDir::new().unwrap();
    let manager = open_in(&temp);

    assert_eq!(manager.categories().len(), 1);
    let default = &manager.categories()[0];
    assert_eq!(default.name, "Default");
    assert_eq!(default.color, ColorName::Gray);
    assert_eq!(default.icon, IconName::MusicNote);

    // The synthesized category was committed, so a reopen sees the same id.
    let id = default.id;
    drop(manager);
    let reopened = open_in(&temp);
    assert_eq!(reopened.categories().len(), 1);
    assert_eq!(reopened.categories()[0].id, id);
}

#[test]
fn add_then_delete_restores_the_transactions_collection() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let income = manager
        .add_category("Income", ColorName::Green, IconName::Bag)
        .unwrap();
    manager.add_transaction_now(1300.0, "Salary", income).unwrap();

    let before: Vec<Uuid> = manager.transactions().iter().map(|t| t.id).collect();
    let gift = manager.add_transaction_now(50.0, "Gift", income).unwrap();
    manager.delete_transaction(gift).unwrap();
    let after: Vec<Uuid> = manager.transactions().iter().map(|t| t.id).collect();

    assert_eq!(before, after);
}

#[test]
fn deleting_a_category_cascades_exactly_its_transactions() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let food = manager
        .add_category("Food", ColorName::Red, IconName::Cart)
        .unwrap();
    let home = manager
        .add_category("Home", ColorName::Blue, IconName::House)
        .unwrap();
    manager.add_transaction_now(-24.99, "Lunch", food).unwrap();
    manager.add_transaction_now(-700.0, "Rent", home).unwrap();
    manager.add_transaction_now(-8.5, "Dinner", food).unwrap();

    manager.delete_category(food).unwrap();

    assert!(manager.category(food).is_none());
    assert_eq!(manager.transactions().len(), 1);
    assert!(manager
        .transactions()
        .iter()
        .all(|transaction| transaction.category_id == home));
    assert!(matches!(
        manager.delete_category(food),
        Err(CoreError::CategoryNotFound(_))
    ));
}

#[test]
fn category_net_total_over_trailing_windows() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let food = manager
        .add_category("Food", ColorName::Red, IconName::Cart)
        .unwrap();
    manager.add_transaction_now(-24.99, "Today", food).unwrap();
    manager
        .add_transaction(-100.0, "Two days ago", food, Utc::now() - Duration::hours(48))
        .unwrap();

    let recent = manager.category_net_total(food, TrailingWindow::Days(1));
    let all = manager.category_net_total(food, TrailingWindow::AllTime);
    assert!((recent - -24.99).abs() < 1e-9);
    assert!((all - -124.99).abs() < 1e-9);
}

#[test]
fn today_totals_split_by_sign_and_ignore_other_days() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let default = manager.categories()[0].id;
    manager.add_transaction_now(1300.0, "Salary", default).unwrap();
    manager.add_transaction_now(-24.99, "Lunch", default).unwrap();
    manager
        .add_transaction(-100.0, "Groceries", default, Utc::now() - Duration::hours(48))
        .unwrap();

    assert!((manager.today_income() - 1300.0).abs() < 1e-9);
    assert!((manager.today_expense() - -24.99).abs() < 1e-9);
    assert_eq!(manager.today_count(), 2);
}

#[test]
fn each_successful_mutation_delivers_exactly_one_event() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let subscription = manager.subscribe();

    let cat = manager
        .add_category("Trips", ColorName::Teal, IconName::Paperplane)
        .unwrap();
    let tx = manager.add_transaction_now(-80.0, "Train", cat).unwrap();
    manager.edit_category(cat, "Travel", ColorName::Teal, IconName::Paperplane)
        .unwrap();
    manager.delete_transaction(tx).unwrap();
    manager.delete_category(cat).unwrap();

    assert_eq!(
        subscription.drain(),
        vec![
            ChangeEvent::CategoryAdded,
            ChangeEvent::TransactionAdded,
            ChangeEvent::CategoryEdited,
            ChangeEvent::TransactionRemoved,
            ChangeEvent::CategoryRemoved,
        ]
    );
}

#[test]
fn failed_commit_rolls_back_and_sends_no_event() {
    let temp = TempDir::new().unwrap();
    let fail_next = Arc::new(AtomicBool::new(false));
    let store = FlakyStore {
        inner: JsonStore::new(temp.path().join("ledger.json")),
        fail_next: fail_next.clone(),
    };
    let mut manager = LedgerManager::open(Box::new(store)).unwrap();
    let default = manager.categories()[0].id;
    let subscription = manager.subscribe();

    fail_next.store(true, Ordering::SeqCst);
    let result = manager.add_transaction_now(-5.0, "Coffee", default);
    assert!(matches!(
        result,
        Err(CoreError::Store(StoreError::Write(_)))
    ));
    assert!(manager.transactions().is_empty());
    assert!(subscription.drain().is_empty());

    // The manager stays usable after the failure.
    manager.add_transaction_now(-5.0, "Coffee", default).unwrap();
    assert_eq!(manager.transactions().len(), 1);
    assert_eq!(subscription.drain(), vec![ChangeEvent::TransactionAdded]);
}

#[test]
fn deleting_the_only_category_empties_the_ledger_and_reopen_recreates_default() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let default = manager.categories()[0].id;
    manager.add_transaction_now(-3.0, "Snack", default).unwrap();

    manager.delete_category(default).unwrap();
    assert!(manager.categories().is_empty());
    assert!(manager.transactions().is_empty());

    drop(manager);
    let reopened = open_in(&temp);
    assert_eq!(reopened.categories().len(), 1);
    assert_eq!(reopened.categories()[0].name, "Default");
    assert!(reopened.transactions().is_empty());
}

#[test]
fn validation_errors_are_rejected_at_the_call_site() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);

    assert!(matches!(
        manager.add_category("   ", ColorName::Blue, IconName::Doc),
        Err(CoreError::EmptyName)
    ));
    assert!(matches!(
        manager.add_transaction_now(-1.0, "orphan", Uuid::new_v4()),
        Err(CoreError::CategoryNotFound(_))
    ));
    assert!(matches!(
        manager.delete_transaction(Uuid::new_v4()),
        Err(CoreError::TransactionNotFound(_))
    ));

    // Nothing above mutated state.
    assert_eq!(manager.categories().len(), 1);
    assert!(manager.transactions().is_empty());
}
