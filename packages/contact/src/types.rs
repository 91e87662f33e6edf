use serde::Serialize;
use thiserror::Error;

use crate::sanitize::sanitize;

/// Raw values of the contact form, including the hidden honeypot field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot. Hidden from people, so only bots fill it in.
    pub gotcha: String,
}

impl ContactFields {
    /// Fields as the browser submitted them, keyed by input `name`.
    /// Unknown names are ignored.
    pub fn from_submitted<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fields = Self::default();
        for (name, value) in values {
            let slot = match name.as_ref() {
                "name" => &mut fields.name,
                "email" => &mut fields.email,
                "message" => &mut fields.message,
                "_gotcha" => &mut fields.gotcha,
                _ => continue,
            };
            *slot = value.into();
        }
        fields
    }

    pub fn is_spam(&self) -> bool {
        !self.gotcha.is_empty()
    }

    /// Trimmed and tag-stripped copy of the visible fields.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: sanitize(self.name.trim()),
            email: sanitize(self.email.trim()),
            message: sanitize(self.message.trim()),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Form-encoded body of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    /// Honeypot tripped; nothing was sent.
    Spam,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("form endpoint rejected the message (status {status})")]
    Rejected { status: u16 },
    #[error("could not reach form endpoint: {0}")]
    Transport(String),
}
