use tracing::{debug, info};

use crate::types::{ContactFields, ContactPayload, SubmitOutcome};

/// Label and enabled state of the submit button across one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    disabled: bool,
    original: Option<String>,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            original: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_sending(&self) -> bool {
        self.original.is_some()
    }

    /// Relabel an idle button, e.g. after a language switch.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        match self.original.as_mut() {
            Some(original) => *original = label,
            None => self.label = label,
        }
    }

    pub fn begin(&mut self, loading_label: &str) {
        if self.original.is_none() {
            self.original = Some(std::mem::replace(
                &mut self.label,
                loading_label.to_string(),
            ));
        }
        self.disabled = true;
    }

    pub fn restore(&mut self) {
        if let Some(original) = self.original.take() {
            self.label = original;
        }
        self.disabled = false;
    }
}

/// What [`ContactForm::begin`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ready(ContactPayload),
    Spam,
    /// A previous submission is still in flight.
    Busy,
}

/// Contact form state: `idle -> sending -> (sent | failed) -> idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub button: SubmitButton,
}

impl ContactForm {
    pub fn new(button_label: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            button: SubmitButton::new(button_label),
        }
    }

    /// Enter the sending state and build the payload.
    ///
    /// A tripped honeypot never reaches the network. The button is put back
    /// straight away so the page does not look stuck.
    pub fn begin(&mut self, loading_label: &str) -> Submission {
        if self.button.is_sending() {
            return Submission::Busy;
        }
        self.button.begin(loading_label);

        if self.fields.is_spam() {
            info!(
                "contact.spam_detected: gotcha_len={}",
                self.fields.gotcha.len()
            );
            self.button.restore();
            return Submission::Spam;
        }

        Submission::Ready(self.fields.payload())
    }

    /// Leave the sending state. Fields are cleared only after a delivery.
    pub fn complete(&mut self, outcome: SubmitOutcome) {
        debug!("contact.complete: outcome={outcome:?}");
        if outcome == SubmitOutcome::Sent {
            self.fields.clear();
        }
        self.button.restore();
    }
}
