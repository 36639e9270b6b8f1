//! RelatedContent commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::RELATED_CONTENT;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct RelatedContentCreate {
    #[arg(long, help = "Search term")]
    pub term: String,

    #[arg(long, help = "Related content")]
    pub content: String,

    #[arg(long, default_value_t = 0, help = "Sort order")]
    pub sort_order: u32,

    #[arg(long, help = "Virtual host")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct RelatedContentUpdate {
    #[arg(long, help = "Search term")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    #[arg(long, help = "Related content")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[arg(long, help = "Sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,

    #[arg(long, help = "Virtual host")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum RelatedContentCommand {
    /// Create a new RelatedContent
    Create(RelatedContentCreate),

    /// Update an existing RelatedContent
    Update {
        #[arg(help = "RelatedContent ID")]
        id: String,
        #[command(flatten)]
        patch: RelatedContentUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_relatedcontent(
    cmd: RelatedContentCommand,
    ctx: &CommandContext<'_>,
) -> Result<()> {
    match cmd {
        RelatedContentCommand::Create(args) => ctx.create(&RELATED_CONTENT, &args).await,
        RelatedContentCommand::Update { id, patch } => {
            ctx.update(&RELATED_CONTENT, &id, &patch).await
        }
        RelatedContentCommand::Record(cmd) => cmd.run(ctx, &RELATED_CONTENT).await,
    }
}
