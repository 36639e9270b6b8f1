//! ElevateWord commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::ELEVATE_WORD;
use crate::models::{CreatedBy, UpdatedBy, join_lines, join_lines_opt};

#[derive(Debug, Args, Serialize)]
pub struct ElevateWordCreate {
    #[arg(long, help = "Suggest word")]
    pub suggest_word: String,

    #[arg(long, help = "Boost value")]
    pub boost: f64,

    #[arg(long, help = "Version number")]
    pub version_no: i64,

    // Sent as a JSON array.
    #[arg(long = "label-type-id", help = "Label type ID (repeatable)")]
    pub label_type_ids: Vec<String>,

    #[arg(long, help = "Reading of the word")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,

    #[arg(long, help = "Target label")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,

    #[arg(long = "permission", help = "Permission (repeatable)")]
    #[serde(serialize_with = "join_lines", skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct ElevateWordUpdate {
    #[arg(long, help = "Suggest word")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest_word: Option<String>,

    #[arg(long, help = "Boost value")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f64>,

    #[arg(long, help = "Version number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_no: Option<i64>,

    #[arg(long = "label-type-id", help = "Label type ID (repeatable)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_type_ids: Option<Vec<String>>,

    #[arg(long, help = "Reading of the word")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,

    #[arg(long, help = "Target label")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,

    #[arg(long = "permission", help = "Permission (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub permissions: Option<Vec<String>>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum ElevateWordCommand {
    /// Create a new ElevateWord
    Create(ElevateWordCreate),

    /// Update an existing ElevateWord
    Update {
        #[arg(help = "ElevateWord ID")]
        id: String,
        #[command(flatten)]
        patch: ElevateWordUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_elevateword(cmd: ElevateWordCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        ElevateWordCommand::Create(args) => ctx.create(&ELEVATE_WORD, &args).await,
        ElevateWordCommand::Update { id, patch } => ctx.update(&ELEVATE_WORD, &id, &patch).await,
        ElevateWordCommand::Record(cmd) => cmd.run(ctx, &ELEVATE_WORD).await,
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
        cmd: ElevateWordCommand,
    }

    #[test]
    fn test_label_type_ids_stay_an_array() {
        let cli = TestCli::try_parse_from([
            "test",
            "create",
            "--suggest-word",
            "fess",
            "--boost",
            "10",
            "--version-no",
            "1",
            "--label-type-id",
            "l1",
            "--label-type-id",
            "l2",
        ])
        .unwrap();
        let ElevateWordCommand::Create(args) = cli.cmd else {
            panic!("expected create");
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["label_type_ids"], json!(["l1", "l2"]));
        assert!(value.get("permissions").is_none());
        assert!(value.get("reading").is_none());
    }
}
