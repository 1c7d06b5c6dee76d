//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Requested history entry does not exist.
    pub const NOT_FOUND: i32 = 3;

    /// Unknown key label or malformed arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Commands understood by the interactive session besides key labels.
pub const SESSION_COMMANDS: &[(&str, &str)] = &[
    ("clear", "Clear the expression"),
    ("history", "Show history"),
    ("load <n>", "Load the result of history entry n"),
    ("clear-history", "Erase all history"),
    ("keys", "List keypad keys"),
    ("help", "Show this help"),
    ("quit", "Leave the session"),
];
