use calc_core::HistoryEntry;

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::output::{history_json, history_rows};
use crate::ui::{self, Column, UiContext};

const COLUMNS: [Column; 3] = [
    Column::right("#"),
    Column::new("Expression"),
    Column::right("Result"),
];

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let calculator = ctx.open_calculator()?;
    let all = calculator.history();
    let shown = match args.limit {
        Some(limit) => &all[..limit.min(all.len())],
        None => all,
    };

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&history_json(shown))?);
        return Ok(());
    }

    print_history(&ui_ctx, shown, all.len(), ctx.quiet());
    Ok(())
}

/// Print history as a table, or a hint when there is none.
pub(crate) fn print_history(ctx: &UiContext, shown: &[HistoryEntry], total: usize, quiet: bool) {
    if shown.is_empty() {
        if !quiet {
            ui::print(ctx, &ui::hint(ctx, &empty_hint(total)));
        }
        return;
    }

    if !quiet && ctx.mode.is_pretty() {
        let context = format!("{} of {}", shown.len(), total);
        ui::print(ctx, &ui::header(ctx, "history", Some(&context)));
    }
    ui::print(ctx, &ui::table(ctx, &COLUMNS, &history_rows(ctx, shown)));
}

fn empty_hint(total: usize) -> String {
    if total == 0 {
        "No history yet. Try `calc press 2 + 2 =`.".to_string()
    } else {
        format!("Nothing shown with --limit 0; {} in history.", total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hint_distinguishes_limit_from_empty_ledger() {
        assert!(empty_hint(0).starts_with("No history yet"));
        let hint = empty_hint(3);
        assert!(hint.contains("--limit 0"));
        assert!(hint.contains("3 in history"));
    }
}
