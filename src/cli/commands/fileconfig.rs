//! FileConfig commands.

use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::FILE_CONFIG;
use crate::models::{CreatedBy, UpdatedBy, join_lines, join_lines_opt};

#[derive(Debug, Args, Serialize)]
pub struct FileConfigCreate {
    #[arg(long, help = "FileConfig name")]
    pub name: String,

    #[arg(long = "path", required = true, help = "Crawling target path (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub paths: Vec<String>,

    #[arg(long, default_value_t = 1, help = "Number of crawling threads")]
    pub num_of_thread: u32,

    #[arg(long, default_value_t = 10000, help = "Crawling interval time (ms)")]
    pub interval_time: u64,

    #[arg(long, default_value_t = 1.0, help = "Boost value")]
    pub boost: f64,

    #[arg(long, default_value_t = true, action = ArgAction::Set, help = "Availability (true/false)")]
    pub available: bool,

    #[arg(long, default_value_t = 1, help = "Sort order")]
    pub sort_order: u32,

    #[arg(long, default_value = "", help = "Description")]
    pub description: String,

    #[arg(long = "label-type-id", help = "Label type ID (repeatable)")]
    pub label_type_ids: Vec<String>,

    #[arg(long = "included-path", help = "Included path pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub included_paths: Vec<String>,

    #[arg(long = "excluded-path", help = "Excluded path pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub excluded_paths: Vec<String>,

    #[arg(long = "included-doc-path", help = "Included document path pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub included_doc_paths: Vec<String>,

    #[arg(long = "excluded-doc-path", help = "Excluded document path pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub excluded_doc_paths: Vec<String>,

    #[arg(long = "config-parameter", help = "Crawling config parameter (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub config_parameter: Vec<String>,

    #[arg(long, default_value_t = 1, help = "Crawling depth")]
    pub depth: u32,

    #[arg(long, default_value_t = 1_000_000, help = "Maximum access count")]
    pub max_access_count: u64,

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
pub struct FileConfigUpdate {
    #[arg(long, help = "FileConfig name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[arg(long = "path", help = "Crawling target path (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub paths: Option<Vec<String>>,

    #[arg(long, help = "Number of crawling threads")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_of_thread: Option<u32>,

    #[arg(long, help = "Crawling interval time (ms)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_time: Option<u64>,

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

    #[arg(long = "label-type-id", help = "Label type ID (repeatable)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_type_ids: Option<Vec<String>>,

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

    #[arg(long = "included-doc-path", help = "Included document path pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub included_doc_paths: Option<Vec<String>>,

    #[arg(long = "excluded-doc-path", help = "Excluded document path pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub excluded_doc_paths: Option<Vec<String>>,

    #[arg(long = "config-parameter", help = "Crawling config parameter (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub config_parameter: Option<Vec<String>>,

    #[arg(long, help = "Crawling depth")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,

    #[arg(long, help = "Maximum access count")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_access_count: Option<u64>,

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
pub enum FileConfigCommand {
    /// Create a new FileConfig
    Create(FileConfigCreate),

    /// Update an existing FileConfig
    Update {
        #[arg(help = "FileConfig ID")]
        id: String,
        #[command(flatten)]
        patch: FileConfigUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_fileconfig(cmd: FileConfigCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        FileConfigCommand::Create(args) => ctx.create(&FILE_CONFIG, &args).await,
        FileConfigCommand::Update { id, patch } => ctx.update(&FILE_CONFIG, &id, &patch).await,
        FileConfigCommand::Record(cmd) => cmd.run(ctx, &FILE_CONFIG).await,
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
        cmd: FileConfigCommand,
    }

    #[test]
    fn test_create_requires_a_path() {
        assert!(TestCli::try_parse_from(["test", "create", "--name", "share"]).is_err());
    }

    #[test]
    fn test_create_encodes_paths_and_labels() {
        let cli = TestCli::try_parse_from([
            "test",
            "create",
            "--name",
            "share",
            "--path",
            "file:///srv/a",
            "--path",
            "smb://host/b",
            "--label-type-id",
            "docs",
            "--excluded-path",
            ".*\\.tmp",
        ])
        .unwrap();
        let FileConfigCommand::Create(args) = cli.cmd else {
            panic!("expected create");
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["paths"], "file:///srv/a\nsmb://host/b");
        assert_eq!(value["label_type_ids"], json!(["docs"]));
        assert_eq!(value["excluded_paths"], ".*\\.tmp");
        assert_eq!(value["included_paths"], "");
        assert_eq!(value["available"], true);
        assert_eq!(value["max_access_count"], 1_000_000);
        assert_eq!(value["interval_time"], 10000);
    }
}
