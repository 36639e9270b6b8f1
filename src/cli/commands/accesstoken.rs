//! AccessToken commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::ACCESS_TOKEN;
use crate::models::{CreatedBy, UpdatedBy, join_lines, join_lines_opt};

#[derive(Debug, Args, Serialize)]
pub struct AccessTokenCreate {
    #[arg(long, help = "AccessToken name")]
    pub name: String,

    #[arg(long, help = "Access token string")]
    pub token: Option<String>,

    #[arg(long = "permission", help = "Access permission (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub permissions: Vec<String>,

    #[arg(long, help = "Parameter name used to send the token")]
    pub parameter_name: Option<String>,

    #[arg(long, help = "Expiration time (yyyy-MM-ddTHH:mm:ss)")]
    pub expires: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct AccessTokenUpdate {
    #[arg(long, help = "AccessToken name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[arg(long, help = "Access token string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[arg(long = "permission", help = "Access permission (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub permissions: Option<Vec<String>>,

    #[arg(long, help = "Parameter name used to send the token")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,

    #[arg(long, help = "Expiration time (yyyy-MM-ddTHH:mm:ss)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum AccessTokenCommand {
    /// Create a new AccessToken
    Create(AccessTokenCreate),

    /// Update an existing AccessToken
    Update {
        #[arg(help = "AccessToken ID")]
        id: String,
        #[command(flatten)]
        patch: AccessTokenUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_accesstoken(cmd: AccessTokenCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        AccessTokenCommand::Create(args) => ctx.create(&ACCESS_TOKEN, &args).await,
        AccessTokenCommand::Update { id, patch } => ctx.update(&ACCESS_TOKEN, &id, &patch).await,
        AccessTokenCommand::Record(cmd) => cmd.run(ctx, &ACCESS_TOKEN).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: AccessTokenCommand,
    }

    #[test]
    fn test_create_sends_nulls_for_missing_options() {
        let cli = TestCli::try_parse_from([
            "test",
            "create",
            "--name",
            "bot",
            "--permission",
            "{role}admin",
            "--permission",
            "{role}guest",
            "--created-time",
            "1000",
        ])
        .unwrap();
        let AccessTokenCommand::Create(args) = cli.cmd else {
            panic!("expected create");
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "bot",
                "token": null,
                "permissions": "{role}admin\n{role}guest",
                "parameter_name": null,
                "expires": null,
                "created_by": "admin",
                "created_time": 1000
            })
        );
    }

    #[test]
    fn test_update_only_sends_given_fields() {
        let cli = TestCli::try_parse_from([
            "test",
            "update",
            "tok1",
            "--expires",
            "2030-01-01T00:00:00",
            "--updated-time",
            "5",
        ])
        .unwrap();
        let AccessTokenCommand::Update { id, patch } = cli.cmd else {
            panic!("expected update");
        };

        assert_eq!(id, "tok1");
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            value,
            json!({
                "expires": "2030-01-01T00:00:00",
                "updated_by": "admin",
                "updated_time": 5
            })
        );
    }
}
