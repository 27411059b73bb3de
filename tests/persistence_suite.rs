use kbudget_core::core::LedgerManager;
use kbudget_core::ledger::{ColorName, IconName};
use kbudget_core::storage::JsonStore;
use tempfile::TempDir;

fn open_in(temp: &TempDir) -> LedgerManager {
    let store = JsonStore::new(temp.path().join("ledger.json"));
    LedgerManager::open(Box::new(store)).unwrap()
}

#[test]
fn reopen_preserves_insertion_order_and_identity() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let food = manager
        .add_category("Food", ColorName::Yellow, IconName::Cart)
        .unwrap();
    let income = manager
        .add_category("Income", ColorName::Green, IconName::Bag)
        .unwrap();
    let first = manager.add_transaction_now(-24.99, "Giapponese", food).unwrap();
    let second = manager.add_transaction_now(1300.0, "Stipendio", income).unwrap();

    drop(manager);
    let reopened = open_in(&temp);

    let names: Vec<&str> = reopened
        .categories()
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(names, vec!["Default", "Food", "Income"]);
    let ids: Vec<_> = reopened
        .transactions()
        .iter()
        .map(|transaction| transaction.id)
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn snapshot_is_versioned_json_with_rfc3339_dates() {
    let temp = TempDir::new().unwrap();
    let mut manager = open_in(&temp);
    let default = manager.categories()[0].id;
    manager.add_transaction_now(-4.99, "Coffee", default).unwrap();
    drop(manager);

    let raw = std::fs::read_to_string(temp.path().join("ledger.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["schema_version"], 1);
    let date = value["transactions"][0]["date"].as_str().unwrap();
    assert!(date.contains('T'), "expected RFC 3339 instant, got {date}");
}
