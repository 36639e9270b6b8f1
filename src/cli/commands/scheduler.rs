//! Scheduler commands, including start and stop of a scheduled job.

use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::client::Action;
use crate::models::resource::SCHEDULER;
use crate::models::{CreatedBy, UpdatedBy};

#[derive(Debug, Args, Serialize)]
pub struct SchedulerCreate {
    #[arg(long, help = "Scheduler name")]
    pub name: String,

    #[arg(long, help = "Scheduler target")]
    pub target: String,

    #[arg(long, help = "Script type")]
    pub script_type: String,

    #[arg(long, default_value_t = 1, help = "Sort order")]
    pub sort_order: u32,

    #[arg(long, default_value = "", help = "Cron expression")]
    pub cron_expression: String,

    #[arg(long, default_value = "", help = "Script data")]
    pub script_data: String,

    #[arg(long, default_value = "", help = "Crawler settings")]
    pub crawler: String,

    #[arg(long, default_value = "", help = "Job logging settings")]
    pub job_logging: String,

    #[arg(long, default_value_t = true, action = ArgAction::Set, help = "Availability (true/false)")]
    pub available: bool,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: CreatedBy,
}

#[derive(Debug, Args, Serialize)]
pub struct SchedulerUpdate {
    #[arg(long, help = "Scheduler name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[arg(long, help = "Scheduler target")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[arg(long, help = "Cron expression")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,

    #[arg(long, help = "Script type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,

    #[arg(long, help = "Script data")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_data: Option<String>,

    #[arg(long, help = "Crawler settings")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler: Option<String>,

    #[arg(long, help = "Job logging settings")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_logging: Option<String>,

    #[arg(long, help = "Availability (true/false)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[arg(long, help = "Sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,

    #[command(flatten)]
    #[serde(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Subcommand)]
pub enum SchedulerCommand {
    /// Create a new Scheduler
    Create(SchedulerCreate),

    /// Update an existing Scheduler
    Update {
        #[arg(help = "Scheduler ID")]
        id: String,
        #[command(flatten)]
        patch: SchedulerUpdate,
    },

    /// Start a scheduled job now
    Start {
        #[arg(help = "Scheduler ID")]
        id: String,
    },

    /// Stop a running scheduled job
    Stop {
        #[arg(help = "Scheduler ID")]
        id: String,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_scheduler(cmd: SchedulerCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        SchedulerCommand::Create(args) => ctx.create(&SCHEDULER, &args).await,
        SchedulerCommand::Update { id, patch } => ctx.update(&SCHEDULER, &id, &patch).await,
        SchedulerCommand::Start { id } => ctx.trigger(&SCHEDULER, &id, Action::Start).await,
        SchedulerCommand::Stop { id } => ctx.trigger(&SCHEDULER, &id, Action::Stop).await,
        SchedulerCommand::Record(cmd) => cmd.run(ctx, &SCHEDULER).await,
    }
}
