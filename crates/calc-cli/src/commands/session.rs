//! Interactive keypad session.
//!
//! Each line is either a session command (`history`, `load 2`, `quit`, ...)
//! or keys to press. On a TTY lines come from a dialoguer prompt; otherwise
//! they are read from stdin so sessions can be scripted.

use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Input};

use calc_core::{Calculator, KeyValueStore};

use crate::app::AppContext;
use crate::constants::SESSION_COMMANDS;
use crate::errors::CliError;
use crate::helpers::{history_index, parse_keys};
use crate::ui::{self, theme::expression_text, UiContext};

use super::clear_history::clear_and_report;
use super::history::print_history;
use super::keys::print_keys;

/// Whether the session keeps going after a line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub fn handle_session(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut calculator = ctx.open_calculator()?;
    let interactive = ui_ctx.is_interactive();
    let quiet = ctx.quiet();

    if interactive && !quiet {
        ui::print(&ui_ctx, &ui::header(&ui_ctx, "session", None));
        ui::print(
            &ui_ctx,
            &ui::hint(&ui_ctx, "Type keys like `12+3 =`, or `help`. `quit` to leave."),
        );
        print_screen(&ui_ctx, &calculator, quiet);
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let line = if interactive {
            prompt_line()?
        } else {
            lines.next().transpose()?
        };
        let Some(line) = line else {
            break;
        };

        match run_line(&ui_ctx, &mut calculator, line.trim(), quiet) {
            Ok(Step::Continue) => {}
            Ok(Step::Quit) => break,
            Err(err) => ui::print_error(&ui_ctx, err.message(), err.hint()),
        }
    }

    tracing::debug!(entries = calculator.history().len(), "session ended");
    Ok(())
}

fn prompt_line() -> anyhow::Result<Option<String>> {
    let theme = ColorfulTheme::default();
    let result = Input::<String>::with_theme(&theme)
        .with_prompt("calc")
        .allow_empty(true)
        .interact_text();
    match result {
        Ok(line) => Ok(Some(line)),
        // Ctrl-D
        Err(dialoguer::Error::IO(err)) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Apply one line of input to the session.
///
/// Errors are reported and the session continues.
fn run_line<S: KeyValueStore>(
    ctx: &UiContext,
    calculator: &mut Calculator<S>,
    line: &str,
    quiet: bool,
) -> Result<Step, CliError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Step::Continue);
    };

    match first {
        "quit" | "exit" => return Ok(Step::Quit),
        "help" => print_help(ctx),
        "keys" => print_keys(ctx),
        "history" => {
            let entries = calculator.history();
            print_history(ctx, entries, entries.len(), quiet);
        }
        "clear-history" => clear_and_report(ctx, calculator, quiet),
        "clear" => {
            calculator.clear_all();
            print_screen(ctx, calculator, quiet);
        }
        "load" => {
            let position = words
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| {
                    CliError::invalid_input_with_hint(
                        "load needs a history position",
                        "Use `load 1` for the newest entry.",
                    )
                })?;
            let index = history_index(position, calculator.history().len())?;
            calculator.load_entry(index);
            print_screen(ctx, calculator, quiet);
        }
        _ => {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            for key in parse_keys(&tokens)? {
                calculator.press(key);
            }
            print_screen(ctx, calculator, quiet);
        }
    }

    Ok(Step::Continue)
}

fn print_screen<S: KeyValueStore>(ctx: &UiContext, calculator: &Calculator<S>, quiet: bool) {
    let screen = calculator.snapshot();
    if quiet {
        println!("{}", expression_text(&screen.display, ctx.unicode));
    } else {
        println!("{}", ui::screen(ctx, &screen));
    }
}

fn print_help(ctx: &UiContext) {
    for (command, description) in SESSION_COMMANDS {
        ui::print(ctx, &ui::kv(ctx, command, description));
    }
    ui::print(ctx, &ui::hint(ctx, "Anything else is pressed as keys; see `keys`."));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use calc_core::{HistoryEntry, MemoryStore};

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn run(calculator: &mut Calculator<MemoryStore>, line: &str) -> Result<Step, CliError> {
        run_line(&plain_ctx(), calculator, line, true)
    }

    #[test]
    fn test_key_lines_accumulate() {
        let mut calc = Calculator::new(MemoryStore::new());
        run(&mut calc, "12").unwrap();
        run(&mut calc, "+ 3").unwrap();
        assert_eq!(calc.expression(), "12+3");
        run(&mut calc, "=").unwrap();
        assert_eq!(calc.display(), "15");
        assert_eq!(calc.history(), &[HistoryEntry::new("12+3", "15")]);
    }

    #[test]
    fn test_quit_and_blank_lines() {
        let mut calc = Calculator::new(MemoryStore::new());
        assert_eq!(run(&mut calc, "").unwrap(), Step::Continue);
        assert_eq!(run(&mut calc, "quit").unwrap(), Step::Quit);
        assert_eq!(run(&mut calc, "exit").unwrap(), Step::Quit);
    }

    #[test]
    fn test_load_uses_one_based_positions() {
        let mut calc = Calculator::new(MemoryStore::new());
        run(&mut calc, "1+1=").unwrap();
        run(&mut calc, "clear").unwrap();
        run(&mut calc, "5*5=").unwrap();
        run(&mut calc, "load 2").unwrap();
        assert_eq!(calc.expression(), "2");

        let err = run(&mut calc, "load 9").unwrap_err();
        assert_eq!(err.exit_code(), crate::constants::exit_codes::NOT_FOUND);
        assert!(run(&mut calc, "load").is_err());
    }

    #[test]
    fn test_unknown_key_leaves_state_alone() {
        let mut calc = Calculator::new(MemoryStore::new());
        run(&mut calc, "7").unwrap();
        assert!(run(&mut calc, "7 sin").is_err());
        assert_eq!(calc.expression(), "7");
    }

    #[test]
    fn test_clear_history_empties_ledger() {
        let mut calc = Calculator::new(MemoryStore::new());
        run(&mut calc, "2+2=").unwrap();
        run(&mut calc, "clear-history").unwrap();
        assert!(calc.history().is_empty());
    }
}
