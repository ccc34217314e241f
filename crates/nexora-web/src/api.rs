//! Mail Relay Client

use nexora_core::{RelayPayload, RelayReceipt, Result, relay::deliver};
use nexora_relay::EmailJsRelay;

use crate::dom;

/// Send a contact message through EmailJS.
///
/// Failures are written to the browser console before being returned.
pub async fn send_contact(payload: RelayPayload) -> Result<RelayReceipt> {
    let outcome = match EmailJsRelay::from_build_env() {
        Ok(relay) => deliver(&relay, &payload).await,
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(receipt) => dom::console_log(&format!("Correo enviado: {}", receipt.text)),
        Err(e) => dom::console_error(&format!("Error: {e}")),
    }

    outcome
}
