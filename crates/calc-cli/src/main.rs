//! Calc CLI - a keypad calculator with a persistent history ledger
//!
//! This is the command-line interface for Calc. It drives the core
//! calculator session from one-shot commands or an interactive prompt.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    logging::init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx) {
        let ui_ctx = ctx.ui_context(false, None);

        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            print_error(&ui_ctx, cli_err.message(), cli_err.hint());
            std::process::exit(cli_err.exit_code());
        }

        let error_msg = format!("{:#}", e);
        let hint = extract_error_hint(&error_msg);
        print_error(&ui_ctx, &error_msg, hint);
        std::process::exit(exit_codes::FAILURE);
    }
}

/// Contextual hints for common failures.
fn extract_error_hint(error: &str) -> Option<&'static str> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("config") && error_lower.contains("parse") {
        return Some("Check config.toml syntax, or point CALC_CONFIG at another file.");
    }

    if error_lower.contains("home is not set") {
        return Some("Pass --store <DIR> or set CALC_STORE.");
    }

    None
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let cli = ctx.cli();
    match &cli.command {
        None | Some(Commands::Session) => commands::handle_session(ctx),
        Some(Commands::Press(args)) => commands::handle_press(ctx, args),
        Some(Commands::History(args)) => commands::handle_history(ctx, args),
        Some(Commands::ClearHistory) => commands::handle_clear_history(ctx),
        Some(Commands::Keys(args)) => commands::handle_keys(ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
    }
}
