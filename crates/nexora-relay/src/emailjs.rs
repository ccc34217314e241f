//! EmailJS Relay
//!
//! Implementation of `MailRelay` over the EmailJS REST API. The same client
//! runs in the browser (fetch) and natively (hyper).

use async_trait::async_trait;
use serde::Serialize;

use nexora_core::{
    error::{Result, SiteError},
    relay::{MailRelay, RelayPayload, RelayReceipt},
};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_moy5n36";
pub const DEFAULT_TEMPLATE_ID: &str = "template_guui0sf";
pub const DEFAULT_PUBLIC_KEY: &str = "iTAVENc8IZkD9BRyA";

/// EmailJS account configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsConfig {
    /// Full URL of the send endpoint
    pub endpoint: String,

    pub service_id: String,

    pub template_id: String,

    /// Public (client-side) key; not a secret
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            service_id: DEFAULT_SERVICE_ID.into(),
            template_id: DEFAULT_TEMPLATE_ID.into(),
            public_key: DEFAULT_PUBLIC_KEY.into(),
        }
    }
}

impl EmailJsConfig {
    /// Read `EMAILJS_*` variables at run time, falling back to defaults
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };

        Self {
            endpoint: var("EMAILJS_ENDPOINT", DEFAULT_ENDPOINT),
            service_id: var("EMAILJS_SERVICE_ID", DEFAULT_SERVICE_ID),
            template_id: var("EMAILJS_TEMPLATE_ID", DEFAULT_TEMPLATE_ID),
            public_key: var("EMAILJS_PUBLIC_KEY", DEFAULT_PUBLIC_KEY),
        }
    }

    /// Read `EMAILJS_*` variables at compile time. Used by the WASM bundle,
    /// which has no process environment.
    pub fn from_build_env() -> Self {
        Self {
            endpoint: option_env!("EMAILJS_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT).into(),
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or(DEFAULT_SERVICE_ID).into(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(DEFAULT_TEMPLATE_ID).into(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(DEFAULT_PUBLIC_KEY).into(),
        }
    }

    /// Reject blank identifiers before any request is made
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("endpoint", &self.endpoint),
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(SiteError::Config(format!("EmailJS {name} is empty"))),
            None => Ok(()),
        }
    }
}

/// Request body of `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a RelayPayload,
}

/// EmailJS mail relay
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    /// Create from configuration
    pub fn from_config(config: EmailJsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Create from run-time environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(EmailJsConfig::from_env())
    }

    /// Create from compile-time environment variables
    pub fn from_build_env() -> Result<Self> {
        Self::from_config(EmailJsConfig::from_build_env())
    }

    pub const fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    fn request_body<'a>(&'a self, payload: &'a RelayPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MailRelay for EmailJsRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<RelayReceipt> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(payload))
            .send()
            .await
            .map_err(|e| SiteError::RelayTransport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SiteError::RelayTransport(e.to_string()))?;

        if status.is_success() {
            Ok(RelayReceipt {
                status: status.as_u16(),
                text,
            })
        } else {
            tracing::warn!(status = status.as_u16(), reason = %text, "EmailJS rejected message");
            Err(SiteError::RelayRejected {
                status: status.as_u16(),
                reason: text,
            })
        }
    }

    fn name(&self) -> &str {
        "EmailJS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const SEND_PATH: &str = "/api/v1.0/email/send";

    fn payload() -> RelayPayload {
        RelayPayload {
            title: "Consulta".into(),
            name: "Ana".into(),
            message: "Hola".into(),
            email: "ana@example.com".into(),
        }
    }

    fn relay_for(server: &MockServer) -> EmailJsRelay {
        EmailJsRelay::from_config(EmailJsConfig {
            endpoint: server.url(SEND_PATH),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = EmailJsConfig::default();
        assert_eq!(config.service_id, "service_moy5n36");
        assert_eq!(config.template_id, "template_guui0sf");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_config_rejected() {
        let config = EmailJsConfig {
            template_id: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            EmailJsRelay::from_config(config),
            Err(SiteError::Config(msg)) if msg.contains("template_id")
        ));
    }

    #[tokio::test]
    async fn test_send_posts_template_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_PATH).json_body(json!({
                    "service_id": "service_moy5n36",
                    "template_id": "template_guui0sf",
                    "user_id": "iTAVENc8IZkD9BRyA",
                    "template_params": {
                        "title": "Consulta",
                        "name": "Ana",
                        "message": "Hola",
                        "email": "ana@example.com"
                    }
                }));
                then.status(200).body("OK");
            })
            .await;

        let receipt = relay_for(&server).send(&payload()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(receipt, RelayReceipt { status: 200, text: "OK".into() });
    }

    #[tokio::test]
    async fn test_rejection_carries_reason() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(SEND_PATH);
                then.status(400).body("The Public Key is invalid");
            })
            .await;

        let err = relay_for(&server).send(&payload()).await.unwrap_err();

        match err {
            SiteError::RelayRejected { status, reason } => {
                assert_eq!(status, 400);
                assert_eq!(reason, "The Public Key is invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let relay = EmailJsRelay::from_config(EmailJsConfig {
            endpoint: "http://127.0.0.1:9/api/v1.0/email/send".into(),
            ..Default::default()
        })
        .unwrap();

        let err = relay.send(&payload()).await.unwrap_err();
        assert!(matches!(err, SiteError::RelayTransport(_)));
        assert!(err.is_retryable());
    }
}
