//! Observable data manager: owns the in-memory ledger mirror, orchestrates
//! validate → apply → commit → notify for every mutation, and exposes the
//! engine-backed queries.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    errors::CoreError,
    ledger::{
        summary, Category, ColorName, IconName, Ledger, Period, PeriodGroup, TrailingWindow,
        Transaction,
    },
    storage::StorageBackend,
};

/// Minimal change descriptor delivered to subscribers after each successful
/// mutation. Carries no payload; consumers re-pull the state they render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    CategoryAdded,
    CategoryEdited,
    CategoryRemoved,
    TransactionAdded,
    TransactionRemoved,
}

/// Receiving end of the change-notification channel.
pub struct Subscription {
    receiver: Receiver<ChangeEvent>,
}

impl Subscription {
    /// Next pending event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<ChangeEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drains and returns every pending event.
    pub fn drain(&self) -> Vec<ChangeEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Explicitly constructed service object; one instance spans the application.
/// Mutations take `&mut self`, so the borrow checker enforces the
/// single-writer discipline without locks.
pub struct LedgerManager {
    storage: Box<dyn StorageBackend>,
    ledger: Ledger,
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl LedgerManager {
    /// Loads the persisted ledger and synthesizes the default category if
    /// none exists yet. Load failure is fatal at startup; callers propagate.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self, CoreError> {
        let mut ledger = storage.load()?;
        tracing::info!(
            categories = ledger.categories.len(),
            transactions = ledger.transactions.len(),
            "Ledger manager opened."
        );
        if ledger.categories.is_empty() {
            ledger.add_category(Category::default_category());
            storage.commit(&ledger)?;
            tracing::info!("Created default category.");
        }
        Ok(Self {
            storage,
            ledger,
            subscribers: Vec::new(),
        })
    }

    /// Registers an observer. Disconnected subscribers are pruned on the
    /// next notification.
    pub fn subscribe(&mut self) -> Subscription {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        Subscription { receiver }
    }

    fn notify(&mut self, event: ChangeEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event).is_ok());
    }

    /// Runs one mutation through stage → commit → notify. The mutation is
    /// applied to a working copy first; a failed commit leaves the current
    /// state untouched and sends no event.
    fn apply(
        &mut self,
        event: ChangeEvent,
        mutate: impl FnOnce(&mut Ledger),
    ) -> Result<(), CoreError> {
        let mut working = self.ledger.clone();
        mutate(&mut working);
        self.storage.commit(&working)?;
        self.ledger = working;
        self.notify(event);
        Ok(())
    }

    fn validated_name(name: &str) -> Result<String, CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    /// Adds a category. Duplicate names are allowed; empty names are not.
    pub fn add_category(
        &mut self,
        name: &str,
        color: ColorName,
        icon: IconName,
    ) -> Result<Uuid, CoreError> {
        let category = Category::new(Self::validated_name(name)?, color, icon);
        let id = category.id;
        self.apply(ChangeEvent::CategoryAdded, |ledger| {
            ledger.add_category(category);
        })?;
        Ok(id)
    }

    /// Edits a category's name, color, and icon. The id is immutable.
    pub fn edit_category(
        &mut self,
        id: Uuid,
        name: &str,
        color: ColorName,
        icon: IconName,
    ) -> Result<(), CoreError> {
        let name = Self::validated_name(name)?;
        if self.ledger.category(id).is_none() {
            return Err(CoreError::CategoryNotFound(id));
        }
        self.apply(ChangeEvent::CategoryEdited, |ledger| {
            if let Some(category) = ledger.category_mut(id) {
                category.name = name;
                category.color = color;
                category.icon = icon;
            }
        })
    }

    /// Deletes a category and every transaction referencing it, in one
    /// commit. A partial cascade is never observable.
    pub fn delete_category(&mut self, id: Uuid) -> Result<(), CoreError> {
        if self.ledger.category(id).is_none() {
            return Err(CoreError::CategoryNotFound(id));
        }
        self.apply(ChangeEvent::CategoryRemoved, |ledger| {
            if let Some(cascaded) = ledger.remove_category(id) {
                tracing::debug!(%id, cascaded, "Removed category with cascade.");
            }
        })
    }

    /// Adds a transaction dated at the given instant. The referenced
    /// category must exist.
    pub fn add_transaction(
        &mut self,
        value: f64,
        note: &str,
        category_id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        if self.ledger.category(category_id).is_none() {
            return Err(CoreError::CategoryNotFound(category_id));
        }
        let transaction = Transaction::new(value, note, category_id, date);
        let id = transaction.id;
        self.apply(ChangeEvent::TransactionAdded, |ledger| {
            ledger.add_transaction(transaction);
        })?;
        Ok(id)
    }

    /// Adds a transaction dated now.
    pub fn add_transaction_now(
        &mut self,
        value: f64,
        note: &str,
        category_id: Uuid,
    ) -> Result<Uuid, CoreError> {
        self.add_transaction(value, note, category_id, Utc::now())
    }

    /// Deletes a transaction by identity match on id.
    pub fn delete_transaction(&mut self, id: Uuid) -> Result<(), CoreError> {
        if self.ledger.transaction(id).is_none() {
            return Err(CoreError::TransactionNotFound(id));
        }
        self.apply(ChangeEvent::TransactionRemoved, |ledger| {
            ledger.remove_transaction(id);
        })
    }

    // Queries. All pure reads over current state, delegating to the
    // aggregation engine.

    pub fn categories(&self) -> &[Category] {
        &self.ledger.categories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.ledger.category(id)
    }

    pub fn category_transactions(&self, id: Uuid, window: TrailingWindow) -> Vec<&Transaction> {
        summary::in_window(&self.ledger.transactions, window)
            .into_iter()
            .filter(|transaction| transaction.category_id == id)
            .collect()
    }

    pub fn category_net_total(&self, id: Uuid, window: TrailingWindow) -> f64 {
        self.category_transactions(id, window)
            .iter()
            .map(|transaction| transaction.value)
            .sum()
    }

    pub fn transactions_on(&self, day: NaiveDate) -> Vec<&Transaction> {
        summary::on_day(&self.ledger.transactions, day)
    }

    pub fn value_of_day(&self, day: NaiveDate) -> f64 {
        summary::day_total(&self.ledger.transactions, day)
    }

    pub fn grouped(&self, period: Period) -> Vec<PeriodGroup> {
        summary::group_by_period(&self.ledger.transactions, period)
    }

    fn todays(&self) -> Vec<&Transaction> {
        self.transactions_on(Local::now().date_naive())
    }

    pub fn today_income(&self) -> f64 {
        summary::income_total(self.todays())
    }

    pub fn today_expense(&self) -> f64 {
        summary::expense_total(self.todays())
    }

    pub fn today_count(&self) -> usize {
        self.todays().len()
    }
}
