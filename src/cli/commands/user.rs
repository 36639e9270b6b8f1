//! User commands.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::error::ValidationError;
use crate::models::resource::USER;
use crate::models::{UpdatedBy, parse_attributes};
use crate::utils::encode_to_urlsafe_base64;

/// Longest password the server accepts.
pub const MAX_PASSWORD_LEN: usize = 100;

#[derive(Debug, Args)]
pub struct UserCreate {
    #[arg(help = "Username (max 100 characters)")]
    pub name: String,

    #[arg(help = "Password (max 100 characters)")]
    pub password: String,

    #[arg(short, long = "attribute", help = "User attribute in key=value format (repeatable)")]
    pub attributes: Vec<String>,

    #[arg(short, long = "role", help = "Role to assign to the user (repeatable)")]
    pub roles: Vec<String>,

    #[arg(short, long = "group", help = "Group to assign to the user (repeatable)")]
    pub groups: Vec<String>,
}

#[derive(Debug, Args)]
pub struct UserUpdate {
    #[arg(short, long, help = "New password (max 100 characters)")]
    pub password: Option<String>,

    #[arg(short, long = "attribute", help = "User attribute in key=value format (repeatable)")]
    pub attributes: Option<Vec<String>>,

    #[arg(short, long = "role", help = "Role to assign to the user (repeatable)")]
    pub roles: Option<Vec<String>>,

    #[arg(short, long = "group", help = "Group to assign to the user (repeatable)")]
    pub groups: Option<Vec<String>>,

    #[command(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Serialize)]
struct UserBody {
    name: String,
    password: String,
    confirm_password: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    roles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    groups: Vec<String>,
}

#[derive(Debug, Serialize)]
struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<String>>,
    #[serde(flatten)]
    audit: UpdatedBy,
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooLong {
            max: MAX_PASSWORD_LEN,
        });
    }
    Ok(())
}

impl UserCreate {
    fn into_body(self) -> Result<UserBody> {
        Ok(UserBody {
            attributes: parse_attributes(&self.attributes)?,
            confirm_password: self.password.clone(),
            name: self.name,
            password: self.password,
            roles: self.roles,
            groups: self.groups,
        })
    }
}

impl UserUpdate {
    fn into_patch(self) -> Result<UserPatch> {
        let attributes = self.attributes.map(parse_attributes).transpose()?;
        if let Some(password) = &self.password {
            check_password(password)?;
        }

        Ok(UserPatch {
            attributes,
            confirm_password: self.password.clone(),
            password: self.password,
            roles: self.roles,
            groups: self.groups,
            audit: self.audit,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a new user
    Create(UserCreate),

    /// Update an existing user
    Update {
        #[arg(help = "ID of the user to update")]
        id: String,
        #[command(flatten)]
        patch: UserUpdate,
    },

    /// Show a user looked up by its name
    #[command(name = "getbyname")]
    GetByName {
        #[arg(help = "Name of the user to retrieve")]
        name: String,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_user(cmd: UserCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        UserCommand::Create(args) => ctx.create(&USER, &args.into_body()?).await,
        UserCommand::Update { id, patch } => ctx.update(&USER, &id, &patch.into_patch()?).await,
        UserCommand::GetByName { name } => ctx.get(&USER, &encode_to_urlsafe_base64(&name)).await,
        UserCommand::Record(cmd) => cmd.run(ctx, &USER).await,
    }
}
