//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug)]
pub enum SiteError {
    /// The relay answered with a non-success status
    #[error("Relay rejected the message ({status}): {reason}")]
    RelayRejected { status: u16, reason: String },

    /// The relay could not be reached
    #[error("Relay transport error: {0}")]
    RelayTransport(String),

    /// A submission is already waiting for the relay
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Check if a new attempt could succeed without user changes
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::RelayTransport(_) => true,
            Self::RelayRejected { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Message shown to the visitor in the contact form
    pub fn user_message(&self) -> String {
        match self {
            Self::RelayTransport(_) => {
                "No pudimos conectar con el servicio de correo. Revisa tu conexión e inténtalo de nuevo.".into()
            }
            Self::RelayRejected { status, .. } if *status == 429 => {
                "Hemos recibido demasiados mensajes. Espera un momento e inténtalo de nuevo.".into()
            }
            Self::RelayRejected { .. } if self.is_retryable() => {
                "No pudimos enviar tu mensaje. Inténtalo de nuevo más tarde.".into()
            }
            Self::RelayRejected { .. } => {
                "No pudimos enviar tu mensaje. Escríbenos por correo o WhatsApp.".into()
            }
            Self::SubmissionInFlight => "Tu mensaje ya se está enviando.".into(),
            Self::Config(_) => "Ocurrió un error inesperado.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(SiteError::RelayTransport("offline".into()).is_retryable());
        assert!(SiteError::RelayRejected { status: 503, reason: "busy".into() }.is_retryable());
        assert!(SiteError::RelayRejected { status: 429, reason: "slow down".into() }.is_retryable());
        assert!(!SiteError::RelayRejected { status: 400, reason: "bad template".into() }.is_retryable());
        assert!(!SiteError::SubmissionInFlight.is_retryable());
    }

    #[test]
    fn test_user_message_hides_relay_details() {
        let err = SiteError::RelayRejected {
            status: 400,
            reason: "The template ID is invalid".into(),
        };
        assert!(!err.user_message().contains("template"));
    }

    #[test]
    fn test_user_message_follows_retryability() {
        let busy = SiteError::RelayRejected { status: 503, reason: "busy".into() };
        let refused = SiteError::RelayRejected { status: 400, reason: "bad template".into() };

        assert!(busy.user_message().contains("Inténtalo de nuevo"));
        assert!(!refused.user_message().contains("Inténtalo de nuevo"));
        assert!(refused.user_message().contains("correo"));
    }
}
