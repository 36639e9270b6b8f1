//! BoostDoc commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::BOOST_DOC;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct BoostDocCreate {
    #[arg(long, help = "Regular expression for URLs")]
    pub url_expr: String,

    #[arg(long, help = "Boost value expression")]
    pub boost_expr: String,

    #[arg(long, help = "Sort order (non-negative integer)")]
    pub sort_order: u32,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct BoostDocUpdate {
    #[arg(long, help = "Regular expression for URLs")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_expr: Option<String>,

    #[arg(long, help = "Boost value expression")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_expr: Option<String>,

    #[arg(long, help = "Sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum BoostDocCommand {
    /// Create a new BoostDoc
    Create(BoostDocCreate),

    /// Update an existing BoostDoc
    Update {
        #[arg(help = "BoostDoc ID")]
        id: String,
        #[command(flatten)]
        patch: BoostDocUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_boostdoc(cmd: BoostDocCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        BoostDocCommand::Create(args) => ctx.create(&BOOST_DOC, &args).await,
        BoostDocCommand::Update { id, patch } => ctx.update(&BOOST_DOC, &id, &patch).await,
        BoostDocCommand::Record(cmd) => cmd.run(ctx, &BOOST_DOC).await,
    }
}
