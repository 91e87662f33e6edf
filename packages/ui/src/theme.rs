use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// Global stylesheet plus the icon font used by the menu toggle.
#[component]
pub fn PortfolioTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        document::Link { rel: "stylesheet", href: THEME_CSS }
    }
}
