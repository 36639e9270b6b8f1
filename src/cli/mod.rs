//! CLI module for the Fess administration client.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::models::OutputFormat;

/// Command-line administration client for the Fess search server.
#[derive(Debug, Parser)]
#[command(name = "fessctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(
        long,
        short = 'o',
        global = true,
        default_value_t = OutputFormat::Text,
        help = "Output format: text, json, or yaml"
    )]
    pub output: OutputFormat,

    #[arg(long, short = 'v', global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the health of the Fess server
    Ping,

    /// Inspect client configuration
    #[command(subcommand)]
    Config(commands::ConfigCommand),

    /// Manage access tokens
    #[command(subcommand)]
    Accesstoken(commands::AccessTokenCommand),

    /// Manage bad words
    #[command(subcommand)]
    Badword(commands::BadWordCommand),

    /// Manage boost document rules
    #[command(subcommand)]
    Boostdoc(commands::BoostDocCommand),

    /// Inspect crawling sessions
    #[command(subcommand)]
    Crawlinginfo(commands::RecordCommand),

    /// Manage data store crawl configurations
    #[command(subcommand)]
    Dataconfig(commands::DataConfigCommand),

    /// Manage duplicate hosts
    #[command(subcommand)]
    Duplicatehost(commands::DuplicateHostCommand),

    /// Manage elevate words
    #[command(subcommand)]
    Elevateword(commands::ElevateWordCommand),

    /// Manage file crawl authentication
    #[command(subcommand)]
    Fileauth(commands::FileAuthCommand),

    /// Manage file system crawl configurations
    #[command(subcommand)]
    Fileconfig(commands::FileConfigCommand),

    /// Manage groups
    #[command(subcommand)]
    Group(commands::GroupCommand),

    /// Inspect job logs
    #[command(subcommand)]
    Joblog(commands::RecordCommand),

    /// Manage key matches
    #[command(subcommand)]
    Keymatch(commands::KeyMatchCommand),

    /// Manage label types
    #[command(subcommand)]
    Labeltype(commands::LabelTypeCommand),

    /// Manage path mappings
    #[command(subcommand)]
    Pathmap(commands::PathMapCommand),

    /// Manage related contents
    #[command(subcommand)]
    Relatedcontent(commands::RelatedContentCommand),

    /// Manage related queries
    #[command(subcommand)]
    Relatedquery(commands::RelatedQueryCommand),

    /// Manage crawler request headers
    #[command(subcommand)]
    Reqheader(commands::ReqHeaderCommand),

    /// Manage roles
    #[command(subcommand)]
    Role(commands::RoleCommand),

    /// Manage job schedulers
    #[command(subcommand)]
    Scheduler(commands::SchedulerCommand),

    /// Manage users
    #[command(subcommand)]
    User(commands::UserCommand),

    /// Manage web crawl authentication
    #[command(subcommand)]
    Webauth(commands::WebAuthCommand),

    /// Manage web crawl configurations
    #[command(subcommand)]
    Webconfig(commands::WebConfigCommand),
}
