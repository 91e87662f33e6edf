use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, info, warn};

use crate::types::{ContactError, ContactPayload, SubmitOutcome};

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

fn email_label(email: &str) -> String {
    format!("{} (len={})", email_domain(email), email.len())
}

/// Sends one contact submission somewhere.
///
/// Futures are not `Send`: in the browser the request runs on the page's
/// single event loop.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn post_form(&self, payload: &ContactPayload) -> Result<(), ContactError>;
}

/// Posts to a Formspree-style endpoint (production).
pub struct FormspreeTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl FormspreeTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ContactTransport for FormspreeTransport {
    async fn post_form(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        debug!(
            "contact.formspree.post_form: from={} name_len={} message_len={}",
            email_label(&payload.email),
            payload.name.len(),
            payload.message.len()
        );
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(payload)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

/// Logs the submission instead of sending it (local development).
pub struct ConsoleTransport;

#[async_trait(?Send)]
impl ContactTransport for ConsoleTransport {
    async fn post_form(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        info!(
            "contact.console.post_form (local mode, not sent): from={} name={:?} message={:?}",
            email_label(&payload.email),
            payload.name,
            payload.message
        );
        Ok(())
    }
}

/// Send one payload and collapse every failure into [`SubmitOutcome::Failed`].
pub async fn deliver<T>(transport: &T, payload: &ContactPayload) -> SubmitOutcome
where
    T: ContactTransport + ?Sized,
{
    match transport.post_form(payload).await {
        Ok(()) => {
            info!("contact.deliver: sent from={}", email_label(&payload.email));
            SubmitOutcome::Sent
        }
        Err(e) => {
            warn!("contact.deliver: failed: {e}");
            SubmitOutcome::Failed
        }
    }
}
