//! HTTP implementation of the gateway trait

use async_trait::async_trait;
use chat_model::{
    GatewayConfig, ModelCatalog, PluginCatalog, Session, SessionId, SharedSnapshot, UserProfile,
    UserSettings,
};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{GatewayError, Result};
use crate::gateway::ChatGateway;

/// Gateway over the chat service's JSON API.
#[derive(Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    device_id: String,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let device_id = HeaderValue::from_str(&config.device_id).map_err(|_| {
            GatewayError::InvalidConfig(format!(
                "device id {:?} is not a valid header value",
                config.device_id
            ))
        })?;
        let mut headers = HeaderMap::new();
        headers.insert("device-id", device_id);
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            device_id: config.device_id,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response onto the error taxonomy, pulling the
    /// user-displayable message out of the `{ "error": ... }` body.
    /// The body is read before the status is mapped so a 404 keeps the
    /// server's message too.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from)),
            Err(_) => None,
        };
        warn!(
            "Gateway request failed with {}: {}",
            status,
            message.as_deref().unwrap_or("no error body")
        );

        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound { message });
        }

        Err(GatewayError::Remote {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            }),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(Self::check(response).await?).await
    }
}

#[async_trait]
impl ChatGateway for HttpGateway {
    async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.get_json("/api/sessions").await
    }

    async fn create_session(&self) -> Result<Session> {
        debug!("POST /api/sessions");
        let response = self
            .client
            .post(self.url("/api/sessions"))
            .json(&json!({ "device_id": self.device_id }))
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn delete_session(&self, id: SessionId) -> Result<()> {
        debug!("DELETE /api/sessions/{}", id);
        let response = self
            .client
            .delete(self.url(&format!("/api/sessions/{}", id)))
            .send()
            .await?;
        match Self::check(response).await {
            Ok(_) => Ok(()),
            // Already gone on the server side counts as deleted.
            Err(GatewayError::NotFound { .. }) => Ok(()),
            Err(err) => Err(err),
        }
    }

    async fn fetch_shared_session(&self, token: &str) -> Result<SharedSnapshot> {
        debug!("GET /api/shared");
        let response = self
            .client
            .get(self.url("/api/shared"))
            .query(&[("share_id", token)])
            .send()
            .await?;
        let snapshot: SharedSnapshot = Self::decode(Self::check(response).await?).await?;
        Ok(snapshot.with_token(token))
    }

    async fn fetch_user_profile(&self) -> Result<UserProfile> {
        self.get_json("/api/user/profile").await
    }

    async fn fetch_settings(&self) -> Result<UserSettings> {
        self.get_json("/api/user/settings").await
    }

    async fn fetch_model_list(&self) -> Result<ModelCatalog> {
        self.get_json("/api/models").await
    }

    async fn fetch_plugin_list(&self) -> Result<PluginCatalog> {
        self.get_json("/api/plugins").await
    }
}
