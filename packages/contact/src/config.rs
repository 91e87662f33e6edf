use crate::transport::{ConsoleTransport, ContactTransport, FormspreeTransport};

/// Endpoint used when `PORTFOLIO_FORM_ENDPOINT` is not configured.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/your-form-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&read_setting("APP_MODE", option_env!("APP_MODE")).unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Runtime settings for the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub mode: AppMode,
}

impl SiteConfig {
    /// Reads the process environment first, then the values baked in at
    /// compile time (the only source available inside the browser).
    pub fn from_env() -> Self {
        let form_endpoint = read_setting(
            "PORTFOLIO_FORM_ENDPOINT",
            option_env!("PORTFOLIO_FORM_ENDPOINT"),
        )
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FORM_ENDPOINT.to_string());

        Self {
            form_endpoint,
            mode: AppMode::from_env(),
        }
    }

    pub fn uses_default_endpoint(&self) -> bool {
        self.form_endpoint == DEFAULT_FORM_ENDPOINT
    }

    pub fn transport(&self) -> Box<dyn ContactTransport> {
        match self.mode {
            AppMode::Local => Box::new(ConsoleTransport),
            AppMode::Production => Box::new(FormspreeTransport::new(self.form_endpoint.clone())),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            mode: AppMode::Production,
        }
    }
}

fn read_setting(key: &str, baked: Option<&'static str>) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| baked.map(str::to_string))
}
