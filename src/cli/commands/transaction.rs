use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, format_value};

/// `add expense|income <value> [note...] [-c <category>]`
///
/// The sign of the stored value comes from the expense/income keyword; the
/// magnitude is always read as positive. Without `-c` the transaction goes
/// to the first (default) category.
pub fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "Usage: add expense|income <value> [note...] [-c <category>]";

    let mut args = args.iter();
    let kind = args
        .next()
        .ok_or_else(|| CommandError::InvalidArguments(USAGE.to_string()))?;
    let sign = match *kind {
        "expense" => -1.0,
        "income" => 1.0,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "Expected `expense` or `income`, got `{}`. {}",
                other, USAGE
            )))
        }
    };
    let magnitude: f64 = args
        .next()
        .ok_or_else(|| CommandError::InvalidArguments(USAGE.to_string()))?
        .parse()
        .map_err(|_| CommandError::InvalidArguments("Value must be a number.".to_string()))?;
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return Err(CommandError::InvalidArguments(
            "Value must be a positive number.".to_string(),
        ));
    }

    let mut note_words: Vec<&str> = Vec::new();
    let mut category_arg: Option<&str> = None;
    while let Some(word) = args.next() {
        if *word == "-c" {
            category_arg = Some(*args.next().ok_or_else(|| {
                CommandError::InvalidArguments("`-c` expects a category.".to_string())
            })?);
        } else {
            note_words.push(word);
        }
    }
    let note = note_words.join(" ");

    let category = match category_arg {
        Some(needle) => context.resolve_category(needle)?,
        None => context
            .manager
            .categories()
            .first()
            .cloned()
            .ok_or_else(|| CommandError::Message("No categories exist.".to_string()))?,
    };

    let id = context
        .manager
        .add_transaction_now(sign * magnitude, &note, category.id)?;
    output::success(format!(
        "Recorded {} in `{}` ({}).",
        format_value(sign * magnitude, &context.config.currency, true),
        category.name,
        &id.to_string()[..8]
    ));
    Ok(())
}

/// `tx rm <id-prefix>`
pub fn tx(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["rm", prefix] => {
            let id = context.resolve_transaction(prefix)?;
            context.manager.delete_transaction(id)?;
            output::success(format!("Deleted transaction {}.", &id.to_string()[..8]));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: tx rm <id-prefix>".to_string(),
        )),
    }
}
