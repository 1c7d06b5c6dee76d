use crate::app::AppContext;
use crate::cli::PressArgs;
use crate::helpers::{history_index, parse_keys};
use crate::output::screen_json;
use crate::ui::{self, theme::expression_text};

pub fn handle_press(ctx: &AppContext, args: &PressArgs) -> anyhow::Result<()> {
    // Reject unknown keys before anything touches history.
    let keys = parse_keys(args.keys.as_slice())?;

    let mut calculator = ctx.open_calculator()?;
    if let Some(position) = args.load {
        let index = history_index(position, calculator.history().len())?;
        calculator.load_entry(index);
    }

    for key in keys {
        let outcome = calculator.press(key);
        tracing::trace!(key = key.label, ?outcome, "pressed");
    }

    let screen = calculator.snapshot();
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&screen_json(&screen))?);
        return Ok(());
    }

    if ctx.quiet() {
        println!("{}", expression_text(&screen.display, ui_ctx.unicode));
        return Ok(());
    }

    println!("{}", ui::screen(&ui_ctx, &screen));
    Ok(())
}
