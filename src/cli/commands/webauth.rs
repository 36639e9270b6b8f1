//! WebAuth commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::WEB_AUTH;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct WebAuthCreate {
    #[arg(long, help = "Username for authentication")]
    pub username: String,

    #[arg(long, help = "WebConfig ID")]
    pub web_config_id: String,

    #[arg(long, help = "Password")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[arg(long, help = "Target hostname")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[arg(long, help = "Target port")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    #[arg(long, help = "Authentication realm")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_realm: Option<String>,

    #[arg(long, help = "Protocol scheme (e.g. http, https)")]
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
pub struct WebAuthUpdate {
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

    #[arg(long, help = "Authentication realm")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_realm: Option<String>,

    #[arg(long, help = "Protocol scheme (e.g. http, https)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_scheme: Option<String>,

    #[arg(long, help = "Additional parameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,

    #[arg(long, help = "WebConfig ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_config_id: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum WebAuthCommand {
    /// Create a new WebAuth
    Create(WebAuthCreate),

    /// Update an existing WebAuth
    Update {
        #[arg(help = "WebAuth ID")]
        id: String,
        #[command(flatten)]
        patch: WebAuthUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_webauth(cmd: WebAuthCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        WebAuthCommand::Create(args) => ctx.create(&WEB_AUTH, &args).await,
        WebAuthCommand::Update { id, patch } => ctx.update(&WEB_AUTH, &id, &patch).await,
        WebAuthCommand::Record(cmd) => cmd.run(ctx, &WEB_AUTH).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: WebAuthCommand,
    }

    #[test]
    fn test_create_omits_unset_optionals() {
        let cli = TestCli::try_parse_from([
            "test",
            "create",
            "--username",
            "crawler",
            "--web-config-id",
            "wc1",
            "--port",
            "8443",
            "--created-time",
            "1700000000000",
        ])
        .unwrap();
        let WebAuthCommand::Create(args) = cli.cmd else {
            panic!("expected create");
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["port"], 8443);
        assert_eq!(value["created_by"], "admin");
        assert_eq!(value["created_time"], 1_700_000_000_000_i64);
        assert!(value.get("password").is_none());
        assert!(value.get("auth_realm").is_none());
    }

    #[test]
    fn test_update_sends_only_given_fields() {
        let cli = TestCli::try_parse_from(["test", "update", "wa1", "--hostname", "example.com"])
            .unwrap();
        let WebAuthCommand::Update { id, patch } = cli.cmd else {
            panic!("expected update");
        };

        assert_eq!(id, "wa1");
        let value = serde_json::to_value(&patch).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["hostname"], "example.com");
        assert!(object.contains_key("updated_time"));
        assert_eq!(object.len(), 3);
    }
}
