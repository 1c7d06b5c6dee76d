use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use calc_core::VERSION;

/// Calc - a keypad calculator with persistent history
#[derive(Parser)]
#[command(name = "calc")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory where history is stored
    #[arg(long, global = true, env = "CALC_STORE", value_name = "DIR")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `press` command
#[derive(Args)]
pub struct PressArgs {
    /// Keys to press, in order (e.g. `1 2 + 3 =` or `12+3 =`)
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Start from the result of history entry N (1 = newest)
    #[arg(long, value_name = "N")]
    pub load: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (pretty, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `keys` command
#[derive(Args)]
pub struct KeysArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive keypad session (default)
    Session,

    /// Press a sequence of keys and show the result
    Press(PressArgs),

    /// List past computations, newest first
    History(HistoryArgs),

    /// Erase all history
    ClearHistory,

    /// List the keypad keys
    Keys(KeysArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
