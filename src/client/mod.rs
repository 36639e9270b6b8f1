//! HTTP client for the Fess admin and health APIs.
//!
//! The server changed its REST verbs between major versions 14 and 15, so
//! every request goes through [`FessClient::send`], which picks the verb
//! from the logical [`Action`] and the configured server version.

pub mod version;

pub use version::{ServerVersion, parse_version};

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ConfigError};
use crate::models::{Resource, Settings};

const HEALTH_PATH: &str = "/api/v1/health";

/// Logical operation, independent of the HTTP verb used to perform it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit,
    Delete,
    List,
    Get,
    Start,
    Stop,
}

impl Action {
    /// HTTP verb used for this action against the given server version.
    pub fn method(self, version: ServerVersion) -> Method {
        let legacy = version.is_legacy();
        match self {
            Action::Create if legacy => Method::PUT,
            Action::Create => Method::POST,
            Action::Edit | Action::Start | Action::Stop if legacy => Method::POST,
            Action::Edit | Action::Start | Action::Stop => Method::PUT,
            Action::Delete => Method::DELETE,
            Action::List | Action::Get => Method::GET,
        }
    }

    /// Whether a JSON body is attached when one is supplied.
    pub fn sends_body(self) -> bool {
        matches!(
            self,
            Action::Create | Action::Edit | Action::Start | Action::Stop
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::List => "list",
            Action::Get => "get",
            Action::Start => "start",
            Action::Stop => "stop",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for a single Fess server. Built once per process.
#[derive(Debug, Clone)]
pub struct FessClient {
    client: Client,
    base_url: String,
    admin_headers: HeaderMap,
    public_headers: HeaderMap,
    version: ServerVersion,
}

impl FessClient {
    /// Create a client using the timeout from the settings.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        Self::with_timeout(settings, Duration::from_secs(settings.timeout_secs))
    }

    /// Create a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Fails when the version string is malformed, the token cannot be used
    /// as a header value, or the HTTP client cannot be built.
    pub fn with_timeout(settings: &Settings, timeout: Duration) -> Result<Self, ConfigError> {
        let version = parse_version(&settings.version)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        let mut public_headers = HeaderMap::new();
        public_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // An absent token still sends "Bearer " and lets the server reject it.
        let token = settings.access_token.as_deref().unwrap_or_default();
        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ConfigError::HttpClient(format!("invalid access token: {e}")))?;
        let mut admin_headers = public_headers.clone();
        admin_headers.insert(AUTHORIZATION, bearer);

        Ok(Self {
            client,
            base_url: settings.endpoint.trim_end_matches('/').to_string(),
            admin_headers,
            public_headers,
            version,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> ServerVersion {
        self.version
    }

    /// Issue one request and return the decoded JSON body.
    ///
    /// The server's own `response.status` is not inspected here. Only
    /// transport failures and non-JSON bodies are errors.
    pub async fn send<B>(
        &self,
        action: Action,
        url: &str,
        body: Option<&B>,
        query: Option<&[(&str, String)]>,
        admin: bool,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let headers = if admin {
            self.admin_headers.clone()
        } else {
            self.public_headers.clone()
        };

        let mut request = self
            .client
            .request(action.method(self.version), url)
            .headers(headers);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body.filter(|_| action.sends_body()) {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::transport)?;
        let status = i32::from(response.status().as_u16());
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::new(status, e.to_string()))?;

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(value),
            Err(_) => Err(ClientError::new(status, text)),
        }
    }

    async fn send_admin(
        &self,
        action: Action,
        url: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value, ClientError> {
        self.send::<Value>(action, url, None, query, true).await
    }

    pub async fn create<B: Serialize + ?Sized>(
        &self,
        resource: &Resource,
        body: &B,
    ) -> Result<Value, ClientError> {
        let url = resource.write_path(&self.base_url);
        self.send(Action::Create, &url, Some(body), None, true)
            .await
    }

    pub async fn edit<B: Serialize + ?Sized>(
        &self,
        resource: &Resource,
        body: &B,
    ) -> Result<Value, ClientError> {
        let url = resource.write_path(&self.base_url);
        self.send(Action::Edit, &url, Some(body), None, true).await
    }

    pub async fn delete(&self, resource: &Resource, id: &str) -> Result<Value, ClientError> {
        let url = resource.item_path(&self.base_url, id);
        self.send_admin(Action::Delete, &url, None).await
    }

    pub async fn get(&self, resource: &Resource, id: &str) -> Result<Value, ClientError> {
        let url = resource.item_path(&self.base_url, id);
        self.send_admin(Action::Get, &url, None).await
    }

    pub async fn list(
        &self,
        resource: &Resource,
        page: u32,
        size: u32,
    ) -> Result<Value, ClientError> {
        let url = resource.list_path(&self.base_url);
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.send_admin(Action::List, &url, Some(&query[..])).await
    }

    /// Start or stop a job. `action` must be [`Action::Start`] or [`Action::Stop`].
    pub async fn trigger(
        &self,
        resource: &Resource,
        id: &str,
        action: Action,
    ) -> Result<Value, ClientError> {
        let url = resource.trigger_path(&self.base_url, id, action.as_str());
        self.send_admin(action, &url, None).await
    }

    /// Query the public health endpoint. No bearer token is sent.
    pub async fn ping(&self) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        self.send::<Value>(Action::Get, &url, None, None, false)
            .await
    }
}
