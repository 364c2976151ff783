use anyhow::Result;
use stockroom_runtime::{AppAction, AppState};
use stockroom_types::Product;
use tracing::debug;

use super::HandlerContext;
use crate::args::ListFormat;
use crate::presentation::presenters::present_product_table;
use crate::presentation::views::console::ProductListView;

pub fn handle(
    ctx: &HandlerContext,
    state: &mut AppState,
    search: Option<String>,
    format: ListFormat,
) -> Result<()> {
    if let Some(search) = search {
        state.dispatch(AppAction::SetSearch(search));
    }

    let rows: Vec<&Product> = state.filtered();
    debug!(criterion = state.search(), matched = rows.len(), "listing products");

    match format {
        ListFormat::Json => ctx.renderer.json(&rows),
        ListFormat::Csv => ctx.renderer.csv(&rows),
        ListFormat::Plain => {
            let vm = present_product_table(
                &rows,
                state.store().len(),
                state.search(),
                0,
                &ctx.currency,
            );
            ctx.renderer
                .plain(ProductListView::new(&vm, ctx.renderer.color()))
        }
    }
}
