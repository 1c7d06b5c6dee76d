use calc_core::{Calculator, KeyValueStore};

use crate::app::AppContext;
use crate::ui::{self, UiContext};

pub fn handle_clear_history(ctx: &AppContext) -> anyhow::Result<()> {
    let mut calculator = ctx.open_calculator()?;
    let ui_ctx = ctx.ui_context(false, None);
    clear_and_report(&ui_ctx, &mut calculator, ctx.quiet());
    Ok(())
}

/// Erase history and print a receipt with the number of entries removed.
pub(crate) fn clear_and_report<S: KeyValueStore>(
    ctx: &UiContext,
    calculator: &mut Calculator<S>,
    quiet: bool,
) {
    let removed = calculator.history().len();
    calculator.clear_history();
    tracing::info!(removed, "history cleared");

    if !quiet {
        let removed = removed.to_string();
        ui::print(
            ctx,
            &ui::receipt(ctx, "History cleared", &[("Removed", removed.as_str())]),
        );
    }
}
