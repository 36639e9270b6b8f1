//! RelatedQuery commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::RELATED_QUERY;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct RelatedQueryCreate {
    #[arg(long, help = "Search term")]
    pub term: String,

    #[arg(long, help = "Query expressions")]
    pub queries: String,

    #[arg(long, help = "Version number")]
    pub version_no: i64,

    #[arg(long, help = "Virtual host")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct RelatedQueryUpdate {
    #[arg(long, help = "Search term")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    #[arg(long, help = "Query expressions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<String>,

    #[arg(long, help = "Virtual host")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum RelatedQueryCommand {
    /// Create a new RelatedQuery
    Create(RelatedQueryCreate),

    /// Update an existing RelatedQuery
    Update {
        #[arg(help = "RelatedQuery ID")]
        id: String,
        #[command(flatten)]
        patch: RelatedQueryUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_relatedquery(cmd: RelatedQueryCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        RelatedQueryCommand::Create(args) => ctx.create(&RELATED_QUERY, &args).await,
        RelatedQueryCommand::Update { id, patch } => ctx.update(&RELATED_QUERY, &id, &patch).await,
        RelatedQueryCommand::Record(cmd) => cmd.run(ctx, &RELATED_QUERY).await,
    }
}
