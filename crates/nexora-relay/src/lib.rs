//! # nexora-relay
//!
//! Mail relay implementations for the Nexora contact form.
//!
//! ## Relays
//!
//! - **EmailJS** (default): transactional email through the EmailJS REST API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nexora_core::ContactFlow;
//! use nexora_relay::EmailJsRelay;
//!
//! let relay = EmailJsRelay::from_env()?;
//! let mut flow = ContactFlow::new();
//! // ... field changes ...
//! flow.submit(&relay).await?;
//! ```

#[cfg(feature = "emailjs")]
pub mod emailjs;

#[cfg(feature = "emailjs")]
pub use emailjs::{EmailJsConfig, EmailJsRelay};

// Re-export core types for convenience
pub use nexora_core::{MailRelay, RelayPayload, RelayReceipt, Result, SiteError};
