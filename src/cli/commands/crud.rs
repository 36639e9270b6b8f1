//! Generic create/update/delete/get/list runner shared by resource commands.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cli::output::{details_table, emit, list_table, print_success, print_warning};
use crate::client::{Action, FessClient};
use crate::error::AppError;
use crate::models::{ApiResponse, CrudRequest, OutputFormat, PageArgs, Record, Resource};

/// Subcommands every resource shares.
#[derive(Debug, Subcommand)]
pub enum RecordCommand {
    /// Delete a record by ID
    Delete {
        #[arg(help = "ID of the record to delete")]
        id: String,
    },

    /// Show a single record
    Get {
        #[arg(help = "ID of the record to retrieve")]
        id: String,
    },

    /// List records page by page
    List(PageArgs),
}

impl RecordCommand {
    pub async fn run(self, ctx: &CommandContext<'_>, resource: &Resource) -> Result<()> {
        match self {
            RecordCommand::Delete { id } => ctx.delete(resource, &id).await,
            RecordCommand::Get { id } => ctx.get(resource, &id).await,
            RecordCommand::List(page) => ctx.list(resource, page.page, page.size).await,
        }
    }
}

/// Everything a command handler needs: the client and the output mode.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub client: &'a FessClient,
    pub format: OutputFormat,
}

/// Overlay the fields of a patch onto a fetched record.
pub fn merge_patch(mut current: Record, patch: Value) -> Record {
    if let Value::Object(fields) = patch {
        current.extend(fields);
    }
    current
}

impl<'a> CommandContext<'a> {
    pub fn new(client: &'a FessClient, format: OutputFormat) -> Self {
        Self { client, format }
    }

    /// Print the raw response in structured modes and turn a non-zero
    /// server status into [`AppError::Server`].
    fn conclude(&self, value: &Value, operation: String) -> Result<ApiResponse> {
        let response = ApiResponse::from_value(value);

        if self.format.is_structured() {
            emit(value, self.format)?;
        }

        if response.is_success() {
            Ok(response)
        } else {
            Err(AppError::Server {
                operation,
                status: response.status(),
                message: response.message().to_string(),
            }
            .into())
        }
    }

    fn text_mode(&self) -> bool {
        !self.format.is_structured()
    }

    pub async fn create<T: Serialize>(&self, resource: &Resource, fields: &T) -> Result<()> {
        debug!(resource = resource.name, action = %Action::Create, "sending request");
        let value = self
            .client
            .create(resource, &CrudRequest::create(fields))
            .await?;

        let response = self.conclude(&value, resource.operation("create"))?;
        if self.text_mode() {
            print_success(&format!(
                "{} created successfully with ID: {}.",
                resource.label,
                response.id()
            ));
        }
        Ok(())
    }

    /// Fetch the record, overlay the patch and send it back as an edit.
    pub async fn update<P: Serialize>(&self, resource: &Resource, id: &str, patch: &P) -> Result<()> {
        debug!(resource = resource.name, id, "fetching record before update");
        let current = ApiResponse::from_value(&self.client.get(resource, id).await?);
        if !current.is_success() {
            return Err(AppError::NotFound {
                label: resource.label.to_string(),
                id: id.to_string(),
                message: current.message().to_string(),
            }
            .into());
        }

        let patch = serde_json::to_value(CrudRequest::edit(patch))?;
        let record = current.into_item(resource.item_key()).unwrap_or_default();
        let body = merge_patch(record, patch);
        debug!(resource = resource.name, id, fields = body.len(), "sending merged update");

        let value = self.client.edit(resource, &body).await?;
        self.conclude(&value, resource.operation("update"))?;
        if self.text_mode() {
            print_success(&format!("{} '{}' updated successfully.", resource.label, id));
        }
        Ok(())
    }

    pub async fn delete(&self, resource: &Resource, id: &str) -> Result<()> {
        debug!(resource = resource.name, id, action = %Action::Delete, "sending request");
        let value = self.client.delete(resource, id).await?;

        self.conclude(&value, resource.operation("delete"))?;
        if self.text_mode() {
            print_success(&format!("{} '{}' deleted successfully.", resource.label, id));
        }
        Ok(())
    }

    pub async fn get(&self, resource: &Resource, id: &str) -> Result<()> {
        debug!(resource = resource.name, id, action = %Action::Get, "sending request");
        let value = self.client.get(resource, id).await?;

        let response = self.conclude(&value, resource.operation("retrieve"))?;
        if self.text_mode() {
            let record = response
                .item(resource.item_key())
                .cloned()
                .unwrap_or_default();
            println!("{}", details_table(resource, &record));
        }
        Ok(())
    }

    pub async fn list(&self, resource: &Resource, page: u32, size: u32) -> Result<()> {
        debug!(resource = resource.name, page, size, action = %Action::List, "sending request");
        let value = self.client.list(resource, page, size).await?;

        let operation = format!("list {}s", resource.label);
        let response = self.conclude(&value, operation)?;
        if self.text_mode() {
            let records = response.items(resource.list_key());
            if records.is_empty() {
                print_warning(&format!("No {} found.", resource.plural));
            } else {
                println!("{}", list_table(resource, records));
            }
        }
        Ok(())
    }

    /// Start or stop a job-like resource.
    pub async fn trigger(&self, resource: &Resource, id: &str, action: Action) -> Result<()> {
        debug!(resource = resource.name, id, %action, "sending request");
        let value = self.client.trigger(resource, id, action).await?;

        let (verb, done) = match action {
            Action::Stop => ("stop", "stopped"),
            _ => ("start", "started"),
        };
        self.conclude(&value, resource.operation(verb))?;
        if self.text_mode() {
            print_success(&format!(
                "{} '{}' {} successfully.",
                resource.label, id, done
            ));
        }
        Ok(())
    }
}
