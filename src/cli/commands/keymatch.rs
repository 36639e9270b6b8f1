//! KeyMatch commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::KEY_MATCH;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct KeyMatchCreate {
    #[arg(long, help = "Search term to match")]
    pub term: String,

    #[arg(long, help = "Query to execute when the term matches")]
    pub query: String,

    #[arg(long, help = "Maximum result size")]
    pub max_size: u32,

    #[arg(long, help = "Boost value")]
    pub boost: f64,

    #[arg(long, help = "Version number")]
    pub version_no: i64,

    #[arg(long, help = "Virtual host condition")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct KeyMatchUpdate {
    #[arg(long, help = "Search term to match")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    #[arg(long, help = "Query to execute when the term matches")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[arg(long, help = "Maximum result size")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,

    #[arg(long, help = "Boost value")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f64>,

    #[arg(long, help = "Version number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_no: Option<i64>,

    #[arg(long, help = "Virtual host condition")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum KeyMatchCommand {
    /// Create a new KeyMatch
    Create(KeyMatchCreate),

    /// Update an existing KeyMatch
    Update {
        #[arg(help = "KeyMatch ID")]
        id: String,
        #[command(flatten)]
        patch: KeyMatchUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_keymatch(cmd: KeyMatchCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        KeyMatchCommand::Create(args) => ctx.create(&KEY_MATCH, &args).await,
        KeyMatchCommand::Update { id, patch } => ctx.update(&KEY_MATCH, &id, &patch).await,
        KeyMatchCommand::Record(cmd) => cmd.run(ctx, &KEY_MATCH).await,
    }
}
