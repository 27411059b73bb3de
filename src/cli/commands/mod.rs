pub mod category;
pub mod transaction;
pub mod views;

use super::core::CommandResult;
use super::output;

pub fn help() -> CommandResult {
    output::section("Commands");
    println!("  today                                Today's income, expense, net, and count");
    println!("  categories [days|all]                Per-category net totals over a trailing window");
    println!("  day <YYYY-MM-DD>                     Transactions of one calendar day");
    println!("  calendar [YYYY-MM]                   Day totals for a month");
    println!("  log [days|weeks|months|years]        Transactions grouped by period");
    println!("  add expense|income <value> [note...] [-c <category>]");
    println!("  tx rm <id-prefix>                    Delete a transaction");
    println!("  category list                        List categories");
    println!("  category add <name> <color> <icon>   Create a category");
    println!("  category edit <category> <name> <color> <icon>");
    println!("  category rm <category>               Delete a category and its transactions");
    println!("  help, exit");
    Ok(())
}
