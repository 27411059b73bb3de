//! Read-only views: the CLI counterparts of the source app's four screens.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::cli::core::{parse_window, CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, format_value};
use crate::ledger::{Period, TrailingWindow, Transaction};

const DETAIL_DATE_FORMAT: &str = "%d %b %Y - %H:%M";

fn print_transaction(context: &ShellContext, transaction: &Transaction) {
    let note = if transaction.note.is_empty() {
        "(no note)"
    } else {
        transaction.note.as_str()
    };
    println!(
        "  {}  {}  {:>12}  {}",
        &transaction.id.to_string()[..8],
        transaction
            .date
            .with_timezone(&Local)
            .format(DETAIL_DATE_FORMAT),
        format_value(transaction.value, &context.config.currency, true),
        note
    );
}

pub fn today(context: &ShellContext) -> CommandResult {
    let income = context.manager.today_income();
    let expense = context.manager.today_expense();
    let currency = &context.config.currency;
    output::section("Today");
    println!("  Incomes:  {}", format_value(income, currency, true));
    println!("  Expenses: {}", format_value(expense.abs(), currency, true));
    println!("  Net:      {}", format_value(income + expense, currency, true));
    println!("  Transactions: {}", context.manager.today_count());
    Ok(())
}

pub fn categories(context: &ShellContext, args: &[&str]) -> CommandResult {
    let window = match args.first() {
        Some(arg) => parse_window(arg)?,
        None => TrailingWindow::AllTime,
    };
    for category in context.manager.categories() {
        let total = context.manager.category_net_total(category.id, window);
        output::section(format!(
            "{} [{} / {}]",
            category.name,
            category.color.as_str(),
            category.icon.as_str()
        ));
        println!(
            "  Net: {}",
            format_value(total, &context.config.currency, true)
        );
        let entries = context.manager.category_transactions(category.id, window);
        if entries.is_empty() {
            println!("  No transactions in this window.");
        }
        for transaction in entries {
            print_transaction(context, transaction);
        }
    }
    Ok(())
}

pub fn day(context: &ShellContext, args: &[&str]) -> CommandResult {
    let arg = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("Usage: day <YYYY-MM-DD>".to_string())
    })?;
    let date = NaiveDate::parse_from_str(arg, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a valid YYYY-MM-DD date.", arg))
    })?;
    output::section(date.format("%a, %-d %b %Y").to_string());
    let entries = context.manager.transactions_on(date);
    if entries.is_empty() {
        println!("  No transactions.");
        return Ok(());
    }
    for transaction in entries {
        print_transaction(context, transaction);
    }
    println!(
        "  Total: {}",
        format_value(
            context.manager.value_of_day(date),
            &context.config.currency,
            true
        )
    );
    Ok(())
}

pub fn calendar(context: &ShellContext, args: &[&str]) -> CommandResult {
    let first = match args.first() {
        Some(arg) => NaiveDate::parse_from_str(&format!("{}-01", arg), "%Y-%m-%d").map_err(
            |_| CommandError::InvalidArguments(format!("`{}` is not a valid YYYY-MM month.", arg)),
        )?,
        None => {
            let today = Local::now().date_naive();
            today - Duration::days(i64::from(today.day()) - 1)
        }
    };
    output::section(first.format("%B %Y").to_string());

    let mut month_total = 0.0;
    let mut day = first;
    while day.month() == first.month() {
        let total = context.manager.value_of_day(day);
        if total != 0.0 {
            // Calendar cells print without decimals, as in the source app.
            println!(
                "  {}  {:>8}",
                day.format("%a %d"),
                format_value(total, &context.config.currency, false)
            );
        }
        month_total += total;
        day += Duration::days(1);
    }
    println!(
        "  Month net: {}",
        format_value(month_total, &context.config.currency, true)
    );
    Ok(())
}

pub fn log(context: &ShellContext, args: &[&str]) -> CommandResult {
    let period = match args.first() {
        Some(arg) => Period::from_name(arg).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "`{}` is not one of days, weeks, months, years.",
                arg
            ))
        })?,
        None => Period::Day,
    };
    for group in context.manager.grouped(period) {
        let total: f64 = group.transactions.iter().map(|t| t.value).sum();
        output::section(format!(
            "{}  {}",
            group.label,
            format_value(total, &context.config.currency, true)
        ));
        for transaction in &group.transactions {
            print_transaction(context, transaction);
        }
    }
    Ok(())
}
