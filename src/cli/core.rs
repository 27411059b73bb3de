//! Shell context, command dispatch, and CLI error types.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    config::{Config, ConfigManager},
    core::LedgerManager,
    errors::CoreError,
    ledger::{Category, TrailingWindow},
    storage::JsonStore,
};

use super::{commands, output};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell failures; per-command failures are `CommandError`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Per-command failures: reported to the user, the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

pub type CommandResult = Result<(), CommandError>;

pub(crate) const COMMANDS: &[&str] = &[
    "add",
    "calendar",
    "categories",
    "category",
    "day",
    "exit",
    "help",
    "log",
    "quit",
    "today",
    "tx",
];

pub struct ShellContext {
    pub mode: CliMode,
    pub manager: LedgerManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let storage = JsonStore::new_default();
        let manager = LedgerManager::open(Box::new(storage))?;
        let config = ConfigManager::new().load();
        Ok(Self {
            mode,
            manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.to_vec()
    }

    pub fn prompt(&self) -> String {
        "kbudget> ".to_string()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "help" => commands::help(),
            "today" => commands::views::today(self),
            "categories" => commands::views::categories(self, args),
            "day" => commands::views::day(self, args),
            "calendar" => commands::views::calendar(self, args),
            "log" => commands::views::log(self, args),
            "add" => commands::transaction::add(self, args),
            "tx" => commands::transaction::tx(self, args),
            "category" => commands::category::category(self, args),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            _ => {
                return Err(self.unknown_command(raw));
            }
        }?;
        Ok(LoopControl::Continue)
    }

    fn unknown_command(&self, raw: &str) -> CommandError {
        let needle = raw.to_lowercase();
        let suggestion = COMMANDS
            .iter()
            .map(|name| (levenshtein(&needle, name), *name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= 2)
            .map(|(_, name)| name);
        match suggestion {
            Some(name) => CommandError::Message(format!(
                "Unknown command `{}`. Did you mean `{}`?",
                raw, name
            )),
            None => CommandError::Message(format!(
                "Unknown command `{}`. Type `help` for the command list.",
                raw
            )),
        }
    }

    pub fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        output::error(err);
        Ok(())
    }

    pub fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit the shell?")
            .default(true)
            .interact()?)
    }

    /// Yes/no prompt; script mode auto-confirms so piped tests never block.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    /// Finds a category by exact name (case-insensitive) first, then by id
    /// prefix.
    pub(crate) fn resolve_category(&self, needle: &str) -> Result<Category, CommandError> {
        let by_name = self
            .manager
            .categories()
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(needle));
        if let Some(category) = by_name {
            return Ok(category.clone());
        }
        let mut by_id = self
            .manager
            .categories()
            .iter()
            .filter(|category| category.id.to_string().starts_with(needle));
        match (by_id.next(), by_id.next()) {
            (Some(category), None) => Ok(category.clone()),
            (Some(_), Some(_)) => Err(CommandError::InvalidArguments(format!(
                "`{}` matches more than one category.",
                needle
            ))),
            _ => Err(CommandError::Message(format!(
                "No category named `{}`.",
                needle
            ))),
        }
    }

    /// Finds a transaction id by unique id prefix.
    pub(crate) fn resolve_transaction(&self, prefix: &str) -> Result<Uuid, CommandError> {
        let mut matches = self
            .manager
            .transactions()
            .iter()
            .filter(|transaction| transaction.id.to_string().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(transaction), None) => Ok(transaction.id),
            (Some(_), Some(_)) => Err(CommandError::InvalidArguments(format!(
                "`{}` matches more than one transaction.",
                prefix
            ))),
            _ => Err(CommandError::Message(format!(
                "No transaction with id prefix `{}`.",
                prefix
            ))),
        }
    }
}

/// Parses the trailing-window argument: `all` or a day count.
pub(crate) fn parse_window(arg: &str) -> Result<TrailingWindow, CommandError> {
    if arg.eq_ignore_ascii_case("all") {
        return Ok(TrailingWindow::AllTime);
    }
    arg.parse::<i64>()
        .map(TrailingWindow::from_days)
        .map_err(|_| {
            CommandError::InvalidArguments(format!(
                "Expected a day count or `all`, got `{}`.",
                arg
            ))
        })
}
