use storefront_domain::ProductSource;

use crate::cli::ListArgs;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, args: ListArgs) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or_else(|| ctx.page_size());
    let query = ctx.query(limit)?;
    let page = ctx.catalog.fetch(&query).await?;
    output::output_page(page.items, page.total, limit)
}
