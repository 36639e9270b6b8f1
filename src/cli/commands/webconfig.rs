//! WebConfig commands.

use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::WEB_CONFIG;
use crate::models::{CreatedBy, UpdatedBy, join_lines, join_lines_opt};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; Fess/FessCTL; +http://fess.codelibs.org/bot.html)";

const DEFAULT_EXCLUDED_URLS: &str = "(?i).*(css|js|jpeg|jpg|gif|png|bmp|wmv|xml|ico|exe)";

#[derive(Debug, Args, Serialize)]
pub struct WebConfigCreate {
    #[arg(long, help = "WebConfig name")]
    pub name: String,

    #[arg(long = "url", required = true, help = "Crawling target URL (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub urls: Vec<String>,

    #[arg(long, default_value = DEFAULT_USER_AGENT, help = "User-Agent header sent by the crawler")]
    pub user_agent: String,

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

    #[arg(long = "included-url", help = "Included URL pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub included_urls: Vec<String>,

    #[arg(long = "excluded-url", default_value = DEFAULT_EXCLUDED_URLS, help = "Excluded URL pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub excluded_urls: Vec<String>,

    #[arg(long = "included-doc-url", help = "Included document URL pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub included_doc_urls: Vec<String>,

    #[arg(long = "excluded-doc-url", help = "Excluded document URL pattern (repeatable)")]
    #[serde(serialize_with = "join_lines")]
    pub excluded_doc_urls: Vec<String>,

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
pub struct WebConfigUpdate {
    #[arg(long, help = "WebConfig name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[arg(long = "url", help = "Crawling target URL (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub urls: Option<Vec<String>>,

    #[arg(long, help = "User-Agent header sent by the crawler")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

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

    #[arg(long = "included-url", help = "Included URL pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub included_urls: Option<Vec<String>>,

    #[arg(long = "excluded-url", help = "Excluded URL pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub excluded_urls: Option<Vec<String>>,

    #[arg(long = "included-doc-url", help = "Included document URL pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub included_doc_urls: Option<Vec<String>>,

    #[arg(long = "excluded-doc-url", help = "Excluded document URL pattern (repeatable)")]
    #[serde(
        serialize_with = "join_lines_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub excluded_doc_urls: Option<Vec<String>>,

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
pub enum WebConfigCommand {
    /// Create a new WebConfig
    Create(WebConfigCreate),

    /// Update an existing WebConfig
    Update {
        #[arg(help = "WebConfig ID")]
        id: String,
        #[command(flatten)]
        patch: WebConfigUpdate,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_webconfig(cmd: WebConfigCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        WebConfigCommand::Create(args) => ctx.create(&WEB_CONFIG, &args).await,
        WebConfigCommand::Update { id, patch } => ctx.update(&WEB_CONFIG, &id, &patch).await,
        WebConfigCommand::Record(cmd) => cmd.run(ctx, &WEB_CONFIG).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::client::FessClient;
    use crate::models::{OutputFormat, Settings};

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: WebConfigCommand,
    }

    fn parse(args: &[&str]) -> WebConfigCommand {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().cmd
    }

    #[test]
    fn test_create_defaults() {
        let WebConfigCommand::Create(args) =
            parse(&["create", "--name", "site", "--url", "https://example.com/"])
        else {
            panic!("expected create");
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["urls"], "https://example.com/");
        assert_eq!(value["user_agent"], DEFAULT_USER_AGENT);
        assert_eq!(value["excluded_urls"], DEFAULT_EXCLUDED_URLS);
        assert_eq!(value["permissions"], "{role}guest");
        assert_eq!(value["label_type_ids"], json!([]));
        assert_eq!(value["virtual_hosts"], "");
        assert_eq!(value["depth"], 1);
        assert_eq!(value["available"], true);
    }

    #[test]
    fn test_create_joins_repeated_urls() {
        let WebConfigCommand::Create(args) = parse(&[
            "create",
            "--name",
            "site",
            "--url",
            "https://a.example/",
            "--url",
            "https://b.example/",
            "--permission",
            "{role}admin",
        ]) else {
            panic!("expected create");
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["urls"], "https://a.example/\nhttps://b.example/");
        assert_eq!(value["permissions"], "{role}admin");
    }

    #[test]
    fn test_create_requires_url() {
        assert!(TestCli::try_parse_from(["test", "create", "--name", "site"]).is_err());
    }

    #[tokio::test]
    async fn test_create_posts_body() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/admin/webconfig/setting")
                    .header("Content-Type", "application/json");
                then.status(200)
                    .json_body(json!({"response": {"status": 0, "id": "wc-1"}}));
            })
            .await;

        let client = FessClient::new(&Settings {
            endpoint: server.base_url(),
            ..Settings::default()
        })
        .unwrap();
        let ctx = CommandContext::new(&client, OutputFormat::Text);
        let cmd = parse(&["create", "--name", "site", "--url", "https://example.com/"]);
        handle_webconfig(cmd, &ctx).await.unwrap();

        create.assert_async().await;
    }
}
