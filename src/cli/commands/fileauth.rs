//! FileAuth commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::FILE_AUTH;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct FileAuthCreate {
    #[arg(long, help = "Username for authentication")]
    pub username: String,

    #[arg(long, help = "FileConfig ID")]
    pub file_config_id: String,

    #[arg(long, help = "Password")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[arg(long, help = "Target hostname")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[arg(long, help = "Target port")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    #[arg(long, help = "Protocol scheme (e.g. file, smb)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_scheme: Option<String>,

    #[arg(long, help = "Additional parameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct FileAuthUpdate {
    #[arg(long, help = "Username for authentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[arg(long, help = "Password")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[arg(long, help = "Target hostname")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[arg(long, help = "Target port")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    #[arg(long, help = "Protocol scheme (e.g. file, smb)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_scheme: Option<String>,

    #[arg(long, help = "Additional parameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,

    #[arg(long, help = "FileConfig ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_config_id: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum FileAuthCommand {
    /// Create a new FileAuth
    Create(FileAuthCreate),

    /// Update an existing FileAuth
    Update {
        #[arg(help = "FileAuth ID")]
        id: String,
        #[command(flatten)]
        patch: FileAuthUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_fileauth(cmd: FileAuthCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        FileAuthCommand::Create(args) => ctx.create(&FILE_AUTH, &args).await,
        FileAuthCommand::Update { id, patch } => ctx.update(&FILE_AUTH, &id, &patch).await,
        FileAuthCommand::Record(cmd) => cmd.run(ctx, &FILE_AUTH).await,
    }
}
