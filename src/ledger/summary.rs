//! Pure aggregation over in-memory transactions: trailing windows, calendar
//! days, and period grouping. No function here touches storage or state.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};

use super::transaction::Transaction;

/// Trailing time range ending at "now"; `AllTime` is the source's `-1` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingWindow {
    AllTime,
    Days(u32),
}

impl TrailingWindow {
    /// Maps the raw day count convention (`-1` = all time) onto the enum.
    /// Counts beyond `u32::MAX` saturate instead of truncating.
    pub fn from_days(days: i64) -> Self {
        if days < 0 {
            TrailingWindow::AllTime
        } else {
            TrailingWindow::Days(u32::try_from(days).unwrap_or(u32::MAX))
        }
    }

    /// Reference instant: transactions strictly after it fall in the window.
    /// A window reaching past representable time contains everything, so it
    /// degrades to no reference instead of overflowing.
    fn reference(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TrailingWindow::AllTime => None,
            TrailingWindow::Days(days) => {
                now.checked_sub_signed(Duration::hours(24 * i64::from(*days)))
            }
        }
    }
}

fn window_contains(transaction: &Transaction, reference: Option<DateTime<Utc>>) -> bool {
    match reference {
        None => true,
        Some(instant) => transaction.date > instant,
    }
}

/// Sums the values of all transactions inside the trailing window.
pub fn net_total(transactions: &[Transaction], window: TrailingWindow) -> f64 {
    let reference = window.reference(Utc::now());
    transactions
        .iter()
        .filter(|transaction| window_contains(transaction, reference))
        .map(|transaction| transaction.value)
        .sum()
}

/// Transactions inside the trailing window, source order preserved.
pub fn in_window(transactions: &[Transaction], window: TrailingWindow) -> Vec<&Transaction> {
    let reference = window.reference(Utc::now());
    transactions
        .iter()
        .filter(|transaction| window_contains(transaction, reference))
        .collect()
}

fn local_day(transaction: &Transaction) -> NaiveDate {
    transaction.date.with_timezone(&Local).date_naive()
}

/// Transactions falling on the given local calendar day (not a 24h window).
pub fn on_day(transactions: &[Transaction], day: NaiveDate) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| local_day(transaction) == day)
        .collect()
}

/// Net sum of the given local calendar day. Feeds the calendar view cells.
pub fn day_total(transactions: &[Transaction], day: NaiveDate) -> f64 {
    on_day(transactions, day)
        .iter()
        .map(|transaction| transaction.value)
        .sum()
}

/// Sum of positive values only. Composes with [`on_day`] for the "today"
/// figures.
pub fn income_total<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .filter(|transaction| transaction.is_income())
        .map(|transaction| transaction.value)
        .sum()
}

/// Sum of negative values only.
pub fn expense_total<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .filter(|transaction| transaction.is_expense())
        .map(|transaction| transaction.value)
        .sum()
}

/// Granularity of the log view grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Case-insensitive lookup used by the CLI; accepts singular and plural.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "day" | "days" => Some(Period::Day),
            "week" | "weeks" => Some(Period::Week),
            "month" | "months" => Some(Period::Month),
            "year" | "years" => Some(Period::Year),
            _ => None,
        }
    }

    /// Human-readable bucket label for a transaction instant, evaluated in the
    /// local calendar. Weeks are anchored Monday-to-Sunday, which stays
    /// correct across year boundaries.
    pub fn label(&self, instant: DateTime<Utc>) -> String {
        let local = instant.with_timezone(&Local);
        match self {
            Period::Day => local.format("%a, %-d %b %Y").to_string(),
            Period::Week => {
                let day = local.date_naive();
                let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
                let sunday = monday + Duration::days(6);
                format!("{} - {}", monday.format("%d/%m/%y"), sunday.format("%d/%m/%y"))
            }
            Period::Month => local.format("%B %Y").to_string(),
            Period::Year => format!("Year {}", local.year()),
        }
    }
}

/// One log-view bucket: its label and the transactions that mapped to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodGroup {
    pub label: String,
    pub transactions: Vec<Transaction>,
}

/// Buckets transactions by period label, regardless of category.
///
/// Every input transaction lands in exactly one group. Groups are ordered
/// ascending by the date of the first transaction encountered in each bucket,
/// not lexicographically by label.
pub fn group_by_period(transactions: &[Transaction], period: Period) -> Vec<PeriodGroup> {
    let mut groups: Vec<(DateTime<Utc>, PeriodGroup)> = Vec::new();
    for transaction in transactions {
        let label = period.label(transaction.date);
        match groups.iter_mut().find(|(_, group)| group.label == label) {
            Some((_, group)) => group.transactions.push(transaction.clone()),
            None => groups.push((
                transaction.date,
                PeriodGroup {
                    label,
                    transactions: vec![transaction.clone()],
                },
            )),
        }
    }
    groups.sort_by_key(|(first_date, _)| *first_date);
    groups.into_iter().map(|(_, group)| group).collect()
}
