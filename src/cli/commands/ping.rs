//! Server health check against the public health endpoint.

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use super::crud::CommandContext;
use crate::cli::output::{emit, print_success, print_warning};
use crate::error::AppError;
use crate::models::{HealthData, HealthResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Health {
    Healthy,
    Degraded(String),
    Unhealthy(String),
}

fn assess(data: &HealthData, raw: &Value) -> Health {
    let summary = format!(
        "Fess server status: {} (timed_out: {})",
        data.status, data.timed_out
    );
    match data.status.as_str() {
        "green" if !data.timed_out => Health::Healthy,
        "yellow" => Health::Degraded(summary),
        _ => {
            let message = raw["response"]["message"].as_str().unwrap_or_default();
            Health::Unhealthy(format!("{} {}", summary, message).trim_end().to_string())
        }
    }
}

pub async fn handle_ping(ctx: &CommandContext<'_>) -> Result<()> {
    debug!(endpoint = ctx.client.base_url(), "checking server health");
    let value = ctx.client.ping().await?;

    if ctx.format.is_structured() {
        return emit(&value, ctx.format);
    }

    let health = HealthResponse::from_value(&value);
    match assess(&health.data, &value) {
        Health::Healthy => {
            print_success("Fess server is healthy (status: green).");
            Ok(())
        }
        Health::Degraded(summary) => {
            print_warning(&summary);
            Ok(())
        }
        Health::Unhealthy(summary) => Err(AppError::Other(summary).into()),
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::client::FessClient;
    use crate::models::{OutputFormat, Settings};

    fn assess_value(value: Value) -> Health {
        assess(&HealthResponse::from_value(&value).data, &value)
    }

    #[test]
    fn test_assess_green() {
        let health = assess_value(json!({"data": {"status": "green", "timed_out": false}}));
        assert_eq!(health, Health::Healthy);
    }

    #[test]
    fn test_assess_green_but_timed_out() {
        let health = assess_value(json!({"data": {"status": "green", "timed_out": true}}));
        assert_eq!(
            health,
            Health::Unhealthy("Fess server status: green (timed_out: true)".to_string())
        );
    }

    #[test]
    fn test_assess_yellow() {
        let health = assess_value(json!({"data": {"status": "yellow", "timed_out": false}}));
        assert_eq!(
            health,
            Health::Degraded("Fess server status: yellow (timed_out: false)".to_string())
        );
    }

    #[test]
    fn test_assess_missing_data_is_unknown() {
        let health = assess_value(json!({"response": {"message": "maintenance"}}));
        assert_eq!(
            health,
            Health::Unhealthy("Fess server status: unknown (timed_out: true) maintenance".to_string())
        );
    }

    #[tokio::test]
    async fn test_ping_red_fails_with_exit_one() {
        let server = MockServer::start_async().await;
        let health = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/health")
                    .header_missing("Authorization");
                then.status(200)
                    .json_body(json!({"data": {"status": "red", "timed_out": false}}));
            })
            .await;

        let client = FessClient::new(&Settings {
            endpoint: server.base_url(),
            access_token: Some("secret".to_string()),
            ..Settings::default()
        })
        .unwrap();
        let ctx = CommandContext::new(&client, OutputFormat::Text);

        let err = handle_ping(&ctx).await.unwrap_err();
        let app = err.downcast_ref::<AppError>().unwrap();
        assert_eq!(app.exit_code(), 1);
        health.assert_async().await;
    }

    #[tokio::test]
    async fn test_ping_structured_output_succeeds() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v1/health");
                then.status(200)
                    .json_body(json!({"data": {"status": "red", "timed_out": true}}));
            })
            .await;

        let client = FessClient::new(&Settings {
            endpoint: server.base_url(),
            ..Settings::default()
        })
        .unwrap();
        let ctx = CommandContext::new(&client, OutputFormat::Json);
        handle_ping(&ctx).await.unwrap();
    }
}
