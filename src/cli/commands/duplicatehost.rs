//! DuplicateHost commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::DUPLICATE_HOST;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct DuplicateHostCreate {
    #[arg(long, help = "Regular host name")]
    pub regular_name: String,

    #[arg(long, help = "Duplicate host name")]
    pub duplicate_host_name: String,

    #[arg(long, help = "Sort order (non-negative integer)")]
    pub sort_order: u32,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct DuplicateHostUpdate {
    #[arg(long, help = "Regular host name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_name: Option<String>,

    #[arg(long, help = "Duplicate host name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_host_name: Option<String>,

    #[arg(long, help = "Sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum DuplicateHostCommand {
    /// Create a new DuplicateHost
    Create(DuplicateHostCreate),

    /// Update an existing DuplicateHost
    Update {
        #[arg(help = "DuplicateHost ID")]
        id: String,
        #[command(flatten)]
        patch: DuplicateHostUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_duplicatehost(
    cmd: DuplicateHostCommand,
    ctx: &CommandContext<'_>,
) -> Result<()> {
    match cmd {
        DuplicateHostCommand::Create(args) => ctx.create(&DUPLICATE_HOST, &args).await,
        DuplicateHostCommand::Update { id, patch } => {
            ctx.update(&DUPLICATE_HOST, &id, &patch).await
        }
        DuplicateHostCommand::Record(cmd) => cmd.run(ctx, &DUPLICATE_HOST).await,
    }
}
