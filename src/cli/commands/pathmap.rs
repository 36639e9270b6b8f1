//! PathMap commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::PATH_MAP;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct PathMapCreate {
    #[arg(long, help = "Regex pattern to match")]
    pub regex: String,

    #[arg(long, help = "Process type")]
    pub process_type: String,

    #[arg(long, help = "Replacement string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,

    #[arg(long, default_value_t = 0, help = "Sort order")]
    pub sort_order: u32,

    #[arg(long, help = "User agent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct PathMapUpdate {
    #[arg(long, help = "Regex pattern to match")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    #[arg(long, help = "Process type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_type: Option<String>,

    #[arg(long, help = "Replacement string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,

    #[arg(long, help = "Sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,

    #[arg(long, help = "User agent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum PathMapCommand {
    /// Create a new PathMap
    Create(PathMapCreate),

    /// Update an existing PathMap
    Update {
        #[arg(help = "PathMap ID")]
        id: String,
        #[command(flatten)]
        patch: PathMapUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_pathmap(cmd: PathMapCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        PathMapCommand::Create(args) => ctx.create(&PATH_MAP, &args).await,
        PathMapCommand::Update { id, patch } => ctx.update(&PATH_MAP, &id, &patch).await,
        PathMapCommand::Record(cmd) => cmd.run(ctx, &PATH_MAP).await,
    }
}
