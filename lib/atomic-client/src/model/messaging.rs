//! Outbound messages: e-mail and SMS.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Metadata, email, required};
use crate::{Validate, ValidationError};

/// Input of `send_mail`.
///
/// Either `template_id` or a `subject` with a `html` or `text` body is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct SendMailInput {
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<Uuid>,
    /// Template variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<Timestamp>,
}

impl Validate for SendMailInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.to.is_empty() {
            return Err(ValidationError::new("to", "at least one recipient is required"));
        }
        for address in &self.to {
            email("to", address)?;
        }
        for address in &self.cc {
            email("cc", address)?;
        }
        for address in &self.bcc {
            email("bcc", address)?;
        }
        if let Some(address) = &self.from {
            email("from", address)?;
        }
        if let Some(address) = &self.reply_to {
            email("reply_to", address)?;
        }
        if self.template_id.is_none() {
            required("subject", self.subject.as_deref().unwrap_or_default())?;
            if self.html.is_none() && self.text.is_none() {
                return Err(ValidationError::new("text", "html or text is required"));
            }
        }
        Ok(())
    }
}

/// A mail accepted by the service, one per recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct MailMessage {
    pub id: Option<String>,
    pub to: Vec<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub status: Option<String>,
    pub sent_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}

/// Input of `send_sms`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct SendSmsInput {
    /// Recipients, in E.164 format.
    pub to: Vec<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<Timestamp>,
}

impl Validate for SendSmsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.to.is_empty() {
            return Err(ValidationError::new("to", "at least one recipient is required"));
        }
        for number in &self.to {
            let digits = number.strip_prefix('+').unwrap_or(number);
            if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(ValidationError::new(
                    "to",
                    format!("'{number}' is not a phone number"),
                ));
            }
        }
        required("body", &self.body)
    }
}

/// An SMS accepted by the service, one per recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct SmsMessage {
    pub id: Option<String>,
    pub to: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub segments: Option<u32>,
    pub sent_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Metadata,
}
