use contact::{AppMode, SiteConfig};
use dioxus::prelude::*;
use std::env;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PortfolioShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let config = SiteConfig::from_env();

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!("startup: APP_MODE={:?}", config.mode);
    eprintln!("startup: FORM_ENDPOINT={}", config.form_endpoint);

    if config.uses_default_endpoint() && config.mode == AppMode::Production {
        eprintln!(
            "startup: WARNING PORTFOLIO_FORM_ENDPOINT is not set; contact form posts to a placeholder"
        );
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Alex Martin · Portfolio" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::PortfolioTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

/// Fixed header around the single page.
#[component]
fn PortfolioShell() -> Element {
    rsx! {
        ui::Navbar {}
        main { class: "portfolio", Outlet::<Route> {} }
    }
}
