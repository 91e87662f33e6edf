use anyhow::Result;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// A running portfolio server.
///
/// Set `E2E_BASE_URL` to reuse an already running instance (for example
/// `dx serve`, which also serves the wasm bundle); otherwise the `web`
/// package is started with the `server` feature on a random port.
pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        if let Ok(url) = std::env::var("E2E_BASE_URL") {
            wait_for_server(&url).await?;
            return Ok(Self { url, process: None });
        }

        let port = get_random_port()?;

        // Local mode: the contact form logs instead of posting.
        let process = Command::new("cargo")
            .args(["run", "--package", "web", "--features", "server"])
            .env("APP_MODE", "local")
            .env("PORT", port.to_string())
            .env("IP", "127.0.0.1")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let url = format!("http://localhost:{}", port);
        let server = Self {
            url,
            process: Some(process),
        };

        // Wait for server to be ready
        wait_for_server(&server.url).await?;

        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the client bundle is being served, so handlers run.
    pub fn serves_client_bundle(&self) -> bool {
        self.process.is_none()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // Wait up to 60 seconds for server to start (compilation + startup)
    for i in 0..600 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Log progress every 5 seconds
        if i > 0 && i % 50 == 0 {
            eprintln!("Still waiting for server... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Server did not start in time (waited 60s)")
}
