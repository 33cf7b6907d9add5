use storefront_tui::{App, EventHandler, GallerySettings};

use crate::context::CliContext;

pub async fn handle(ctx: CliContext) -> anyhow::Result<()> {
    let settings = GallerySettings {
        lang: ctx.lang,
        search: ctx.search.clone(),
        filter: ctx.filter,
        page_size: ctx.page_size(),
        loader_transition: ctx.config.effective_loader_transition(),
    };

    let events = EventHandler::new();
    let mut app = App::new(settings, ctx.catalog.clone(), events.sender());
    app.run(events).await?;
    Ok(())
}
