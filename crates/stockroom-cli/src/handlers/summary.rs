use anyhow::Result;
use stockroom_engine::summarize;
use stockroom_runtime::AppState;

use super::HandlerContext;
use crate::args::OutputFormat;
use crate::presentation::presenters::present_dashboard;
use crate::presentation::views::console::SummaryView;

pub fn handle(ctx: &HandlerContext, state: &AppState, format: OutputFormat) -> Result<()> {
    let metrics = summarize(state.store().products());

    match format {
        OutputFormat::Json => ctx.renderer.json(&metrics),
        OutputFormat::Plain => {
            let vm = present_dashboard(&metrics, &ctx.currency);
            ctx.renderer
                .plain(SummaryView::new(&vm, ctx.renderer.color()))
        }
    }
}
