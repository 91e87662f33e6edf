//! This crate contains the platform-free side of the portfolio contact form:
//! configuration, the form model, sanitization and delivery.

pub mod config;
pub mod form;
pub mod sanitize;
pub mod transport;
pub mod types;

pub use config::{AppMode, SiteConfig};
pub use form::{ContactForm, SubmitButton, Submission};
pub use sanitize::sanitize;
pub use transport::{deliver, ConsoleTransport, ContactTransport, FormspreeTransport};
pub use types::{ContactError, ContactFields, ContactPayload, SubmitOutcome};
