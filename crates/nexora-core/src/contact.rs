//! Contact Form Controller
//!
//! Owns the four-field form and the submission status. The UI feeds it
//! input events and relay outcomes; it decides what is shown.
//!
//! ```text
//!            submit              relay ok
//! Pending ──────────▶ Sending ──────────▶ Submitted
//!    ▲                 │   ▲                  │
//!    │        relay err│   │submit            │ reset
//!    │                 ▼   │                  │
//!    │               Failed                   │
//!    └────────────────────────────────────────┘
//! ```

use crate::error::{Result, SiteError};
use crate::relay::{MailRelay, RelayPayload, RelayReceipt, deliver};

/// Form fields, in the order they are rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Title,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Title, Self::Message];

    /// Input `name`/`id` attribute
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Title => "title",
            Self::Message => "message",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre Completo",
            Self::Email => "Correo Electrónico",
            Self::Title => "Asunto",
            Self::Message => "Mensaje",
        }
    }

    /// HTML input type; `None` renders a textarea
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Name | Self::Title => Some("text"),
            Self::Email => Some("email"),
            Self::Message => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

/// The contact form record
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub title: String,
    pub name: String,
    pub message: String,
    pub email: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Title => &self.title,
            ContactField::Name => &self.name,
            ContactField::Message => &self.message,
            ContactField::Email => &self.email,
        }
    }

    /// Overwrite one field, leaving the others untouched
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Title => &mut self.title,
            ContactField::Name => &mut self.name,
            ContactField::Message => &mut self.message,
            ContactField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where the submission stands
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Sending,
    Submitted,
    /// The relay failed; `reason` is visitor-facing
    Failed { reason: String },
}

/// Confirmation line shown after a successful submission
pub fn confirmation_message(name: &str) -> String {
    format!("Gracias por contactarnos, {name}. Hemos recibido tu mensaje.")
}

/// Form data plus submission status
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFlow {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub const fn is_sending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Sending)
    }

    pub const fn is_submitted(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitted)
    }

    /// Visitor-facing error from the last attempt
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Confirmation text, once the relay has acknowledged
    pub fn confirmation(&self) -> Option<String> {
        self.is_submitted().then(|| confirmation_message(&self.form.name))
    }

    pub fn on_field_change(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Start a submission and hand back the payload to relay.
    ///
    /// Refused while another submission is waiting on the relay.
    pub fn begin_submit(&mut self) -> Result<RelayPayload> {
        if self.is_sending() {
            return Err(SiteError::SubmissionInFlight);
        }
        self.status = SubmissionStatus::Sending;
        Ok(RelayPayload::from(&self.form))
    }

    /// Apply the relay outcome. Ignored unless a submission is in flight.
    pub fn finish(&mut self, outcome: &Result<RelayReceipt>) {
        if !self.is_sending() {
            tracing::debug!("dropping relay outcome with no submission in flight");
            return;
        }
        self.status = match outcome {
            Ok(_) => SubmissionStatus::Submitted,
            Err(e) => SubmissionStatus::Failed {
                reason: e.user_message(),
            },
        };
    }

    /// "Send another message": clear the form and show it again
    pub fn on_reset(&mut self) {
        self.form.clear();
        self.status = SubmissionStatus::Pending;
    }

    /// Run a whole submission against a relay
    pub async fn submit<R>(&mut self, relay: &R) -> Result<RelayReceipt>
    where
        R: MailRelay + ?Sized,
    {
        let payload = self.begin_submit()?;
        let outcome = deliver(relay, &payload).await;
        self.finish(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records payloads and answers with a fixed outcome
    struct MockRelay {
        fail_with: Option<u16>,
        sent: Mutex<Vec<RelayPayload>>,
    }

    impl MockRelay {
        fn ok() -> Self {
            Self { fail_with: None, sent: Mutex::new(Vec::new()) }
        }

        fn failing(status: u16) -> Self {
            Self { fail_with: Some(status), sent: Mutex::new(Vec::new()) }
        }

        fn sent(&self) -> Vec<RelayPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MailRelay for MockRelay {
        async fn send(&self, payload: &RelayPayload) -> Result<RelayReceipt> {
            self.sent.lock().unwrap().push(payload.clone());
            match self.fail_with {
                None => Ok(RelayReceipt { status: 200, text: "OK".into() }),
                Some(status) => Err(SiteError::RelayRejected {
                    status,
                    reason: "rejected".into(),
                }),
            }
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.on_field_change(ContactField::Name, "Ana");
        flow.on_field_change(ContactField::Email, "ana@example.com");
        flow.on_field_change(ContactField::Title, "Consulta");
        flow.on_field_change(ContactField::Message, "Hola");
        flow
    }

    #[test]
    fn test_field_updates_are_independent() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "A");
        form.set(ContactField::Email, "a@x.io");
        form.set(ContactField::Name, "Ana");
        form.set(ContactField::Message, "Hola");
        form.set(ContactField::Email, "ana@example.com");

        assert_eq!(form.get(ContactField::Name), "Ana");
        assert_eq!(form.get(ContactField::Email), "ana@example.com");
        assert_eq!(form.get(ContactField::Message), "Hola");
        assert_eq!(form.get(ContactField::Title), "");
    }

    #[test]
    fn test_field_names() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::from_name("phone"), None);
        assert_eq!(ContactField::Message.input_type(), None);
        assert_eq!(ContactField::Email.input_type(), Some("email"));
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let relay = MockRelay::ok();
        let mut flow = filled();

        flow.submit(&relay).await.unwrap();

        assert_eq!(
            relay.sent(),
            [RelayPayload {
                title: "Consulta".into(),
                name: "Ana".into(),
                message: "Hola".into(),
                email: "ana@example.com".into(),
            }]
        );
        assert_eq!(flow.status(), &SubmissionStatus::Submitted);
        assert!(flow.confirmation().unwrap().starts_with("Gracias por contactarnos, Ana."));
        // Fields survive until the visitor asks for a fresh form
        assert_eq!(flow.form().name, "Ana");
    }

    #[tokio::test]
    async fn test_reset_after_success() {
        let relay = MockRelay::ok();
        let mut flow = filled();
        flow.submit(&relay).await.unwrap();

        flow.on_reset();

        assert_eq!(flow.form(), &ContactForm::default());
        assert_eq!(flow.status(), &SubmissionStatus::Pending);
        assert_eq!(flow.confirmation(), None);
    }

    #[tokio::test]
    async fn test_failure_keeps_data_and_shows_error() {
        let relay = MockRelay::failing(500);
        let mut flow = filled();

        assert!(flow.submit(&relay).await.is_err());

        assert!(flow.error_message().is_some());
        assert!(!flow.is_submitted());
        assert_eq!(flow.form().message, "Hola");

        // The visitor can try again with the same data
        assert!(flow.begin_submit().is_ok());
    }

    #[test]
    fn test_second_submit_rejected_while_sending() {
        let mut flow = filled();
        flow.begin_submit().unwrap();
        assert!(matches!(flow.begin_submit(), Err(SiteError::SubmissionInFlight)));
    }

    #[test]
    fn test_one_transition_per_submission() {
        let mut flow = filled();
        flow.begin_submit().unwrap();
        flow.finish(&Ok(RelayReceipt { status: 200, text: "OK".into() }));
        assert!(flow.is_submitted());

        // A stray second acknowledgment changes nothing
        flow.on_reset();
        flow.finish(&Ok(RelayReceipt { status: 200, text: "OK".into() }));
        assert_eq!(flow.status(), &SubmissionStatus::Pending);
    }
}
