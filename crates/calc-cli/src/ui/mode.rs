//! Which rendering a command produces: JSON, plain key=value text, or the
//! pretty calculator screen.

use super::context::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document on stdout, nothing else
    Json,
    /// Tab/`key=value` lines for scripts and pipes
    #[default]
    Plain,
    /// Boxed screen, colored badges, headers
    Pretty,
}

impl OutputMode {
    /// `--json` wins over `--format`. `--format plain` and `TERM=dumb` give
    /// plain; any other format is pretty only when stdout is a terminal.
    pub fn resolve(json: bool, format: Option<&str>, term: &Terminal) -> Self {
        if json {
            return Self::Json;
        }
        let wants_plain = format.is_some_and(|f| f.eq_ignore_ascii_case("plain"));
        if wants_plain || term.dumb || !term.stdout_tty {
            Self::Plain
        } else {
            Self::Pretty
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
