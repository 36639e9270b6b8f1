//! Role commands.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::crud::{CommandContext, RecordCommand};
use crate::models::resource::ROLE;
use crate::models::{UpdatedBy, parse_attributes};
use crate::utils::encode_to_urlsafe_base64;

#[derive(Debug, Args)]
pub struct RoleCreate {
    #[arg(help = "Role name (max 100 characters)")]
    pub name: String,

    #[arg(short, long = "attribute", help = "Role attribute in key=value format (repeatable)")]
    pub attributes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RoleUpdate {
    #[arg(short, long = "attribute", help = "Role attribute in key=value format (repeatable)")]
    pub attributes: Option<Vec<String>>,

    #[command(flatten)]
    pub audit: UpdatedBy,
}

#[derive(Debug, Serialize)]
struct RoleBody {
    name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct RolePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    audit: UpdatedBy,
}

impl RoleCreate {
    fn into_body(self) -> Result<RoleBody> {
        Ok(RoleBody {
            attributes: parse_attributes(&self.attributes)?,
            name: self.name,
        })
    }
}

impl RoleUpdate {
    fn into_patch(self) -> Result<RolePatch> {
        let attributes = self.attributes.map(parse_attributes).transpose()?;
        Ok(RolePatch {
            attributes,
            audit: self.audit,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Create a new role
    Create(RoleCreate),

    /// Update an existing role
    Update {
        #[arg(help = "ID of the role to update")]
        id: String,
        #[command(flatten)]
        patch: RoleUpdate,
    },

    /// Show a role looked up by its name
    #[command(name = "getbyname")]
    GetByName {
        #[arg(help = "Name of the role to retrieve")]
        name: String,
    },

    #[command(flatten)]
    Record(RecordCommand),
}

pub async fn handle_role(cmd: RoleCommand, ctx: &CommandContext<'_>) -> Result<()> {
    match cmd {
        RoleCommand::Create(args) => ctx.create(&ROLE, &args.into_body()?).await,
        RoleCommand::Update { id, patch } => ctx.update(&ROLE, &id, &patch.into_patch()?).await,
        RoleCommand::GetByName { name } => ctx.get(&ROLE, &encode_to_urlsafe_base64(&name)).await,
        RoleCommand::Record(cmd) => cmd.run(ctx, &ROLE).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::client::FessClient;
    use crate::error::{AppError, ValidationError};
    use crate::models::{OutputFormat, Settings};

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        cmd: RoleCommand,
    }

    fn parse(args: &[&str]) -> RoleCommand {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().cmd
    }

    #[test]
    fn test_create_body_without_attributes() {
        let RoleCommand::Create(args) = parse(&["create", "role-abc123"]) else {
            panic!("expected create");
        };
        let value = serde_json::to_value(args.into_body().unwrap()).unwrap();
        assert_eq!(value, json!({"name": "role-abc123"}));
    }

    #[test]
    fn test_create_body_with_attributes() {
        let RoleCommand::Create(args) = parse(&[
            "create",
            "ops",
            "-a",
            "department=engineering",
            "--attribute",
            "site = tokyo",
        ]) else {
            panic!("expected create");
        };
        let value = serde_json::to_value(args.into_body().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"name": "ops", "attributes": {"department": "engineering", "site": "tokyo"}})
        );
    }

    #[test]
    fn test_bad_attribute_is_validation_error() {
        let RoleCommand::Create(args) = parse(&["create", "ops", "-a", "broken"]) else {
            panic!("expected create");
        };
        let err = args.into_body().unwrap_err();
        let app = AppError::from(err.downcast::<ValidationError>().unwrap());
        assert_eq!(app.exit_code(), 1);
    }

    #[test]
    fn test_update_patch_omits_attributes_when_absent() {
        let RoleCommand::Update { id, patch } = parse(&["update", "r1"]) else {
            panic!("expected update");
        };
        assert_eq!(id, "r1");
        let value = serde_json::to_value(patch.into_patch().unwrap()).unwrap();
        assert!(value.get("attributes").is_none());
        assert_eq!(value["updated_by"], "admin");
    }

    #[tokio::test]
    async fn test_getbyname_requests_encoded_id() {
        let server = MockServer::start_async().await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/role/setting/YWRtaW4=");
                then.status(200).json_body(json!({"response": {
                    "status": 0,
                    "setting": {"id": "YWRtaW4=", "name": "admin"}
                }}));
            })
            .await;

        let client = FessClient::new(&Settings {
            endpoint: server.base_url(),
            ..Settings::default()
        })
        .unwrap();
        let ctx = CommandContext::new(&client, OutputFormat::Text);
        handle_role(parse(&["getbyname", "admin"]), &ctx)
            .await
            .unwrap();

        get.assert_async().await;
    }
}
