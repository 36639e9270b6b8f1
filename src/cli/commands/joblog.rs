//! JobLog commands. Job logs are read and deleted, never written.

use anyhow::Result;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::JOB_LOG;

pub async fn handle_joblog(cmd: RecordCommand, ctx: &CommandContext<'_>) -> Result<()> {
    cmd.run(ctx, &JOB_LOG).await
}
