use calc_core::BUTTONS;

use crate::app::AppContext;
use crate::cli::KeysArgs;
use crate::output::{key_rows, keys_json};
use crate::ui::{self, Column, UiContext};

const COLUMNS: [Column; 3] = [
    Column::new("Key"),
    Column::new("Kind"),
    Column::new("Aliases"),
];

pub fn handle_keys(ctx: &AppContext, args: &KeysArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&keys_json(&BUTTONS))?);
        return Ok(());
    }

    print_keys(&ui_ctx);
    Ok(())
}

pub(crate) fn print_keys(ctx: &UiContext) {
    ui::print(ctx, &ui::table(ctx, &COLUMNS, &key_rows(ctx, &BUTTONS)));
}
