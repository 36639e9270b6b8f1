//! LabelType commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::LABEL_TYPE;
use crate::models::{CreatedBy, UpdatedBy, join_lines, join_lines_opt};

#[derive(Debug, Args, Serialize)]
pub struct LabelTypeCreate {
    #[arg(long, help = "LabelType name")]
    pub name: String,

    #[arg(long, help = "Label value")]
    pub value: String,

    #[arg(long, help = "Version number")]
    pub version_no: i64,

    #[arg(long, default_value_t = 0, help = "Sort order")]
    pub sort_order: u32,

    #[arg(long = "included-path", help = "Included path pattern (repeatable)")]
    #[serde(serialize_with = "join_lines", skip_serializing_if = "Vec::is_empty")]
    pub included_paths: Vec<String>,

    #[arg(long = "excluded-path", help = "Excluded path pattern (repeatable)")]
    #[serde(serialize_with = "join_lines", skip_serializing_if = "Vec::is_empty")]
    pub excluded_paths: Vec<String>,

    #[arg(long = "permission", help = "Access permission (repeatable)")]
    #[serde(serialize_with = "join_lines", skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,

    #[arg(long, help = "Virtual host")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct LabelTypeUpdate {
    #[arg(long, help = "LabelType name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[arg(long, help = "Label value")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[arg(long, help = "Version number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_no: Option<i64>,

    #[arg(long, help = "Sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,

    #[arg(long = "included-path", help = "Included path pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub included_paths: Option<Vec<String>>,

    #[arg(long = "excluded-path", help = "Excluded path pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub excluded_paths: Option<Vec<String>>,

    #[arg(long = "permission", help = "Access permission (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub permissions: Option<Vec<String>>,

    #[arg(long, help = "Virtual host")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum LabelTypeCommand {
    /// Create a new LabelType
    Create(LabelTypeCreate),

    /// Update an existing LabelType
    Update {
        #[arg(help = "LabelType ID")]
        id: String,
        #[command(flatten)]
        patch: LabelTypeUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_labeltype(cmd: LabelTypeCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        LabelTypeCommand::Create(args) => ctx.create(&LABEL_TYPE, &args).await,
        LabelTypeCommand::Update { id, patch } => ctx.update(&LABEL_TYPE, &id, &patch).await,
        LabelTypeCommand::Record(cmd) => cmd.run(ctx, &LABEL_TYPE).await,
    }
}
