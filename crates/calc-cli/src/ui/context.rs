//! Rendering settings for one command, built from flags, `[ui]` config and
//! what the terminal reports.

use std::io::IsTerminal;

use super::mode::OutputMode;

const DEFAULT_WIDTH: usize = 80;

/// Display preferences from `--ascii`/`--no-color` merged with `[ui]` config.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefs {
    pub ascii: bool,
    pub no_color: bool,
}

/// What the process can see of its terminal.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set, to any value
    pub no_color_env: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            columns: columns(),
        }
    }

    /// A person is typing and reading: both ends are terminals.
    pub fn interactive(&self) -> bool {
        self.stdin_tty && self.stdout_tty
    }
}

#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    /// `×`/`÷` and check-mark badges; off under `--ascii`
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Context for the current process.
    pub fn from_env(json: bool, format: Option<&str>, prefs: Prefs) -> Self {
        Self::resolve(json, format, prefs, &Terminal::detect())
    }

    /// Color needs a real terminal and no opt-out from flag, config or
    /// `NO_COLOR`. JSON output is never colored.
    pub fn resolve(json: bool, format: Option<&str>, prefs: Prefs, term: &Terminal) -> Self {
        let mode = OutputMode::resolve(json, format, term);
        let color = mode.is_pretty() && !prefs.no_color && !term.no_color_env;
        Self {
            color,
            unicode: !prefs.ascii,
            width: term.columns.unwrap_or(DEFAULT_WIDTH),
            mode,
        }
    }

    /// Whether `session` may show its line prompt.
    pub fn is_interactive(&self) -> bool {
        Terminal::detect().interactive()
    }
}

/// `COLUMNS` first, then the window size of stdout.
fn columns() -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0);
    if from_env.is_some() {
        return from_env;
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl returned success, so winsize was written
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
