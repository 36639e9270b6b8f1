//! DataConfig commands.

use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::DATA_CONFIG;
use crate::models::{CreatedBy, UpdatedBy, bool_as_string, join_lines, join_lines_opt};

#[derive(Debug, Args, Serialize)]
pub struct DataConfigCreate {
    #[arg(long, help = "DataConfig name")]
    pub name: String,

    #[arg(long, help = "Handler name")]
    pub handler_name: String,

    #[arg(long, default_value_t = 1.0, help = "Boost value")]
    pub boost: f64,

    #[arg(long, default_value_t = true, action = ArgAction::Set, help = "Availability (true/false)")]
    #[serde(serialize_with = "bool_as_string")]
    pub available: bool,

    #[arg(long, default_value_t = 1, help = "Sort order")]
    pub sort_order: u32,

    #[arg(long, default_value = "", help = "Description")]
    pub description: String,

    #[arg(long, default_value = "", help = "Handler parameters")]
    pub handler_parameter: String,

    #[arg(long, default_value = "", help = "Handler script")]
    pub handler_script: String,

    #[arg(long = "permission", default_value = "{role}guest", help = "Access permission (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub permissions: Vec<String>,

    #[arg(long = "virtual-host", help = "Virtual host (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub virtual_hosts: Vec<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct DataConfigUpdate {
    #[arg(long, help = "DataConfig name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[arg(long, help = "Handler name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_name: Option<String>,

    #[arg(long, help = "Boost value")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f64>,

    #[arg(long, help = "Availability (true/false)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[arg(long, help = "Sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,

    #[arg(long, help = "Description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[arg(long, help = "Handler parameters")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_parameter: Option<String>,

    #[arg(long, help = "Handler script")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_script: Option<String>,

    #[arg(long = "permission", help = "Access permission (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub permissions: Option<Vec<String>>,

    #[arg(long = "virtual-host", help = "Virtual host (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub virtual_hosts: Option<Vec<String>>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum DataConfigCommand {
    /// Create a new DataConfig
    Create(DataConfigCreate),

    /// Update an existing DataConfig
    Update {
        #[arg(help = "DataConfig ID")]
        id: String,
        #[command(flatten)]
        patch: DataConfigUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_dataconfig(cmd: DataConfigCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        DataConfigCommand::Create(args) => ctx.create(&DATA_CONFIG, &args).await,
        DataConfigCommand::Update { id, patch } => ctx.update(&DATA_CONFIG, &id, &patch).await,
        DataConfigCommand::Record(cmd) => cmd.run(ctx, &DATA_CONFIG).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: DataConfigCommand,
    }

    fn create(args: &[&str]) -> DataConfigCreate {
        let argv = ["test", "create"].iter().chain(args).copied();
        match TestCli::try_parse_from(argv).unwrap().cmd {
            DataConfigCommand::Create(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_create_defaults() {
        let args = create(&["--name", "csv", "--handler-name", "CsvDataStore"]);
        let value = serde_json::to_value(&args).unwrap();

        assert_eq!(value["available"], "true");
        assert_eq!(value["boost"], 1.0);
        assert_eq!(value["sort_order"], 1);
        assert_eq!(value["permissions"], "{role}guest");
        assert_eq!(value["virtual_hosts"], "");
        assert_eq!(value["handler_script"], "");
        assert_eq!(value["created_by"], "admin");
    }

    #[test]
    fn test_create_disabled_is_string_false() {
        let args = create(&[
            "--name",
            "csv",
            "--handler-name",
            "CsvDataStore",
            "--available",
            "false",
        ]);
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["available"], "false");
    }

    #[test]
    fn test_update_sends_boolean_availability() {
        let cli =
            TestCli::try_parse_from(["test", "update", "d1", "--available", "false"]).unwrap();
        let DataConfigCommand::Update { patch, .. } = cli.cmd else {
            panic!("expected update");
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value["available"], false);
        assert!(value.get("name").is_none());
    }
}
