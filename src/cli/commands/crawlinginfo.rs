//! CrawlingInfo commands.

use anyhow::Result;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::CRAWLING_INFO;

pub async fn handle_crawlinginfo(cmd: RecordCommand, ctx: &CommandContext<'_>) -> Result<()> {
    cmd.run(ctx, &CRAWLING_INFO).await
}
