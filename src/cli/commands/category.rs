use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::ledger::{ColorName, IconName, TrailingWindow};

pub fn category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["list"] | [] => list(context),
        ["add", name, color, icon] => add(context, name, color, icon),
        ["edit", needle, name, color, icon] => edit(context, needle, name, color, icon),
        ["rm", needle] => remove(context, needle),
        _ => Err(CommandError::InvalidArguments(
            "Usage: category list | add <name> <color> <icon> | edit <category> <name> <color> <icon> | rm <category>"
                .to_string(),
        )),
    }
}

fn parse_color(raw: &str) -> Result<ColorName, CommandError> {
    ColorName::from_name(raw).ok_or_else(|| {
        let names: Vec<&str> = ColorName::ALL.iter().map(|c| c.as_str()).collect();
        CommandError::InvalidArguments(format!(
            "`{}` is not a palette color. Choose one of: {}.",
            raw,
            names.join(", ")
        ))
    })
}

fn parse_icon(raw: &str) -> Result<IconName, CommandError> {
    IconName::from_name(raw).ok_or_else(|| {
        let names: Vec<&str> = IconName::ALL.iter().map(|i| i.as_str()).collect();
        CommandError::InvalidArguments(format!(
            "`{}` is not a known icon. Choose one of: {}.",
            raw,
            names.join(", ")
        ))
    })
}

fn list(context: &ShellContext) -> CommandResult {
    output::section("Categories");
    for category in context.manager.categories() {
        let count = context
            .manager
            .category_transactions(category.id, TrailingWindow::AllTime)
            .len();
        println!(
            "  {}  {:<20} {:<8} {:<24} {} transactions",
            &category.id.to_string()[..8],
            category.name,
            category.color.as_str(),
            category.icon.as_str(),
            count
        );
    }
    Ok(())
}

fn add(context: &mut ShellContext, name: &str, color: &str, icon: &str) -> CommandResult {
    let color = parse_color(color)?;
    let icon = parse_icon(icon)?;
    let id = context.manager.add_category(name, color, icon)?;
    output::success(format!(
        "Created category `{}` ({}).",
        name.trim(),
        &id.to_string()[..8]
    ));
    Ok(())
}

fn edit(
    context: &mut ShellContext,
    needle: &str,
    name: &str,
    color: &str,
    icon: &str,
) -> CommandResult {
    let target = context.resolve_category(needle)?;
    let color = parse_color(color)?;
    let icon = parse_icon(icon)?;
    context.manager.edit_category(target.id, name, color, icon)?;
    output::success(format!("Updated category `{}`.", name.trim()));
    Ok(())
}

/// Deletion cascades to every referencing transaction, so it asks first.
fn remove(context: &mut ShellContext, needle: &str) -> CommandResult {
    let target = context.resolve_category(needle)?;
    let cascades = context
        .manager
        .category_transactions(target.id, TrailingWindow::AllTime)
        .len();
    let prompt = format!(
        "Delete `{}` and its {} transactions?",
        target.name, cascades
    );
    if !context.confirm(&prompt)? {
        output::info("Kept the category.");
        return Ok(());
    }
    context.manager.delete_category(target.id)?;
    output::success(format!(
        "Deleted category `{}` and {} transactions.",
        target.name, cascades
    ));
    Ok(())
}
