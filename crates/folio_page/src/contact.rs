use bevy::prelude::*;
use folio_core::ContactConfig;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Variables handed to the relay's message template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

/// Acknowledgement from the relay
#[derive(Debug, Clone, PartialEq)]
pub struct RelayReceipt {
    pub status: u16,
    pub text: String,
}

/// Errors that can occur while handing a message to the relay.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayError {
    /// The relay client is not loaded or configured
    Unavailable,
    /// The service answered with an error
    Rejected { status: u16, text: String },
    /// The request never got an answer
    Transport(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Unavailable => write!(f, "Email service not loaded"),
            RelayError::Rejected { status, text } => {
                write!(f, "Email service rejected the message ({}): {}", status, text)
            }
            RelayError::Transport(msg) => write!(f, "Email service unreachable: {}", msg),
        }
    }
}

impl std::error::Error for RelayError {}

/// Third-party email relay ("send this template with these values")
pub trait EmailRelay: Send + Sync {
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayReceipt, RelayError>;
}

/// Relay that logs the envelope and reports success without sending.
/// Used when no real relay is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRelay;

impl EmailRelay for DryRunRelay {
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayReceipt, RelayError> {
        info!(
            "Dry run: {}/{} from {} <{}>, {} chars",
            service_id,
            template_id,
            params.from_name,
            params.from_email,
            params.message.chars().count()
        );
        Ok(RelayReceipt {
            status: 200,
            text: "OK".into(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormStatus {
    pub message: String,
    pub kind: StatusKind,
    pub visible: bool,
}

impl FormStatus {
    fn shown(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
            visible: true,
        }
    }
}

/// Contact form fields plus submission state
#[derive(Resource, Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    sending: bool,
    status: Option<FormStatus>,
    hide_at: Option<Duration>,
    config: ContactConfig,
}

impl ContactForm {
    pub const SEND_LABEL: &'static str = "Send Message";
    pub const SENDING_LABEL: &'static str = "Sending...";

    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.sending {
            Self::SENDING_LABEL
        } else {
            Self::SEND_LABEL
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// Validate and lock the form for sending. On success the returned
    /// params go to the relay and the result comes back via
    /// [`ContactForm::finish`].
    pub fn prepare(&mut self) -> Option<TemplateParams> {
        if self.sending {
            return None;
        }
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            self.show("Please fill in all required fields.", StatusKind::Error);
            return None;
        }

        self.sending = true;
        info!(
            "Attempting to send email: name={} email={} subject={}",
            self.name, self.email, self.subject
        );
        Some(TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            to_name: self.config.to_name.clone(),
        })
    }

    /// Record the relay's answer and unlock the form
    pub fn finish(&mut self, result: Result<RelayReceipt, RelayError>, now: Duration) {
        self.sending = false;
        match result {
            Ok(receipt) => {
                info!("Email sent successfully: {} {}", receipt.status, receipt.text);
                self.show(
                    "Message sent successfully! I'll get back to you soon. ✓",
                    StatusKind::Success,
                );
                self.reset_fields();
                self.hide_at = Some(now + Duration::from_millis(self.config.status_hide_ms));
            }
            Err(err) => {
                error!("Email relay error: {err}");
                let message = self.failure_message(&err);
                self.show(message, StatusKind::Error);
            }
        }
    }

    /// Validate, send and record in one go
    pub fn submit(&mut self, relay: &dyn EmailRelay, now: Duration) -> bool {
        let Some(params) = self.prepare() else {
            return false;
        };
        let result = relay.send(&self.config.service_id, &self.config.template_id, &params);
        let sent = result.is_ok();
        self.finish(result, now);
        sent
    }

    /// Hide a success status once its time is up
    pub fn poll(&mut self, now: Duration) {
        if self.hide_at.is_some_and(|at| now >= at) {
            self.hide_at = None;
            if let Some(status) = self.status.as_mut() {
                status.visible = false;
            }
        }
    }

    fn failure_message(&self, err: &RelayError) -> String {
        match err {
            RelayError::Unavailable => "Email service not loaded. Please refresh the page.".into(),
            RelayError::Rejected { text, .. } if !text.is_empty() => {
                format!("Failed to send message. {text}")
            }
            RelayError::Transport(msg) if !msg.is_empty() => {
                format!("Failed to send message. {msg}")
            }
            _ => format!(
                "Failed to send message. Please try again or email directly at {}",
                self.config.fallback_address
            ),
        }
    }

    fn show(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status = Some(FormStatus::shown(message, kind));
        self.hide_at = None;
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}
