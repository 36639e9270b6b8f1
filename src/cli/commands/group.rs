//! Group commands.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::GROUP;
use crate::models::{UpdatedBy, parse_attributes};
use crate::utils::encode_to_urlsafe_base64;

#[derive(Debug, Args)]
pub struct GroupCreate {
    #[arg(help = "Group name (max 100 characters)")]
    pub name: String,

    #[arg(short, long = "attribute", help = "Group attribute in key=value format (repeatable)")]
    pub attributes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct GroupUpdate {
    #[arg(short, long = "attribute", help = "Group attribute in key=value format (repeatable)")]
    pub attributes: Option<Vec<String>>,

    #[command(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Serialize)]
struct GroupBody {
    name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct GroupPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    audit: UpdatedBy,
}

impl GroupCreate {
    fn into_body(self) -> Result<GroupBody> {
        Ok(GroupBody {
            attributes: parse_attributes(&self.attributes)?,
            name: self.name,
        })
    }
}

impl GroupUpdate {
    fn into_patch(self) -> Result<GroupPatch> {
        let attributes = self.attributes.map(parse_attributes).transpose()?;
        Ok(GroupPatch {
            attributes,
            audit: self.audit,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// Create a new group
    Create(GroupCreate),

    /// Update an existing group
    Update {
        #[arg(help = "ID of the group to update")]
        id: String,
        #[command(flatten)]
        patch: GroupUpdate,
    },

    /// Show a group looked up by its name
    #[command(name = "getbyname")]
    GetByName {
        #[arg(help = "Name of the group to retrieve")]
        name: String,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_group(cmd: GroupCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        GroupCommand::Create(args) => ctx.create(&GROUP, &args.into_body()?).await,
        GroupCommand::Update { id, patch } => ctx.update(&GROUP, &id, &patch.into_patch()?).await,
        GroupCommand::GetByName { name } => ctx.get(&GROUP, &encode_to_urlsafe_base64(&name)).await,
        GroupCommand::Record(cmd) => cmd.run(ctx, &GROUP).await,
    }
}
