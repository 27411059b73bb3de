//! Shell entry point: reads command lines from rustyline (interactive) or
//! stdin (script mode) and feeds them through the dispatcher.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext, COMMANDS};
use crate::cli::output;
use crate::ledger::{ColorName, IconName};

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("KBUDGET_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

/// Tokenizes one input line and dispatches it. Empty lines are no-ops;
/// `exit` flips `running` so both loops stop on the next check.
fn execute_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = split(line)
        .map_err(|err| CommandError::InvalidArguments(format!("Unbalanced quotes: {}", err)))?;
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    let control = context.dispatch(&raw.to_lowercase(), raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(ShellCompleter));

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();
                match execute_line(context, line) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        match execute_line(context, &line?) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

const WINDOW_ARGS: &[&str] = &["1", "7", "30", "365", "all"];
const PERIOD_ARGS: &[&str] = &["days", "weeks", "months", "years"];
const ADD_KINDS: &[&str] = &["expense", "income"];
const CATEGORY_SUBS: &[&str] = &["add", "edit", "list", "rm"];
const TX_SUBS: &[&str] = &["rm"];

/// Completion pool for the word following the already-typed `done` words,
/// derived from the command tree: subcommands, window/period arguments, and
/// the closed color/icon sets.
fn candidates_for(done: &[&str]) -> Vec<&'static str> {
    match done {
        [] => COMMANDS.to_vec(),
        ["categories"] => WINDOW_ARGS.to_vec(),
        ["log"] => PERIOD_ARGS.to_vec(),
        ["add"] => ADD_KINDS.to_vec(),
        ["tx"] => TX_SUBS.to_vec(),
        ["category"] => CATEGORY_SUBS.to_vec(),
        ["category", "add", _] | ["category", "edit", _, _] => {
            ColorName::ALL.iter().map(ColorName::as_str).collect()
        }
        ["category", "add", _, _] | ["category", "edit", _, _, _] => {
            IconName::ALL.iter().map(IconName::as_str).collect()
        }
        _ => Vec::new(),
    }
}

struct ShellCompleter;

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let needle = prefix[start..].to_ascii_lowercase();
        let done: Vec<&str> = prefix[..start].split_whitespace().collect();

        let candidates = candidates_for(&done)
            .into_iter()
            .filter(|candidate| candidate.to_ascii_lowercase().starts_with(&needle))
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

// Helper bounds; the defaults (no hints, no highlighting, single-line input)
// are what a line-oriented shell wants.
impl Helper for ShellCompleter {}
impl Hinter for ShellCompleter {
    type Hint = String;
}
impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
