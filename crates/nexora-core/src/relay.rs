//! Mail Relay Strategy
//!
//! The contact form only talks to this trait. `nexora-relay` provides the
//! EmailJS implementation; tests use an in-memory one.

use async_trait::async_trait;
use serde::Serialize;

use crate::contact::ContactForm;
use crate::error::Result;

/// Template parameters sent to the relay
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub title: String,
    pub name: String,
    pub message: String,
    pub email: String,
}

impl From<&ContactForm> for RelayPayload {
    fn from(form: &ContactForm) -> Self {
        Self {
            title: form.title.clone(),
            name: form.name.clone(),
            message: form.message.clone(),
            email: form.email.clone(),
        }
    }
}

/// Successful relay acknowledgment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReceipt {
    pub status: u16,
    pub text: String,
}

/// Strategy trait for mail relays
///
/// One call per submission; implementations do not retry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MailRelay {
    /// Deliver one contact message
    async fn send(&self, payload: &RelayPayload) -> Result<RelayReceipt>;

    /// Relay name for diagnostics
    fn name(&self) -> &str;
}

/// Send through a relay, logging the outcome
pub async fn deliver<R>(relay: &R, payload: &RelayPayload) -> Result<RelayReceipt>
where
    R: MailRelay + ?Sized,
{
    match relay.send(payload).await {
        Ok(receipt) => {
            tracing::info!(relay = relay.name(), text = %receipt.text, "contact message sent");
            Ok(receipt)
        }
        Err(e) => {
            tracing::error!(relay = relay.name(), error = %e, "contact message failed");
            Err(e)
        }
    }
}
