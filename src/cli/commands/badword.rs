//! BadWord commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::BAD_WORD;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct BadWordCreate {
    #[arg(long, help = "Suggested word (no whitespace allowed)")]
    pub suggest_word: String,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct BadWordUpdate {
    #[arg(long, help = "Suggested word")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_word: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum BadWordCommand {
    /// Create a new BadWord
    Create(BadWordCreate),

    /// Update an existing BadWord
    Update {
        #[arg(help = "BadWord ID")]
        id: String,
        #[command(flatten)]
        patch: BadWordUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_badword(cmd: BadWordCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        BadWordCommand::Create(args) => ctx.create(&BAD_WORD, &args).await,
        BadWordCommand::Update { id, patch } => ctx.update(&BAD_WORD, &id, &patch).await,
        BadWordCommand::Record(cmd) => cmd.run(ctx, &BAD_WORD).await,
    }
}
