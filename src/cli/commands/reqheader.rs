//! ReqHeader commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::REQ_HEADER;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct ReqHeaderCreate {
    #[arg(long, help = "Name of the request header")]
    pub name: String,

    #[arg(long, help = "Value of the request header")]
    pub value: String,

    #[arg(long, help = "WebConfig ID")]
    pub web_config_id: String,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct ReqHeaderUpdate {
    #[arg(long, help = "Name of the request header")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[arg(long, help = "Value of the request header")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[arg(long, help = "WebConfig ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_config_id: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum ReqHeaderCommand {
    /// Create a new ReqHeader
    Create(ReqHeaderCreate),

    /// Update an existing ReqHeader
    Update {
        #[arg(help = "ReqHeader ID")]
        id: String,
        #[command(flatten)]
        patch: ReqHeaderUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_reqheader(cmd: ReqHeaderCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        ReqHeaderCommand::Create(args) => ctx.create(&REQ_HEADER, &args).await,
        ReqHeaderCommand::Update { id, patch } => ctx.update(&REQ_HEADER, &id, &patch).await,
        ReqHeaderCommand::Record(cmd) => cmd.run(ctx, &REQ_HEADER).await,
    }
}
