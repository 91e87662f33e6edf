use dioxus::prelude::*;

use crate::content::{HERO_CTA_CONTACT, HERO_CTA_WORK, HERO_GREETING, HERO_NAME, HERO_TAGLINE};
use crate::scroll::AnchorLink;
use crate::Tr;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            class: "hero",
            div { class: "hero-content",
                p { class: "hero-greeting", Tr { text: HERO_GREETING } }
                h1 { class: "hero-name", {HERO_NAME} }
                p { class: "hero-tagline", Tr { text: HERO_TAGLINE } }

                div { class: "cta_row",
                    AnchorLink { class: "btn primary", href: "#projects", label: HERO_CTA_WORK }
                    AnchorLink { class: "btn", href: "#contact", label: HERO_CTA_CONTACT }
                }
            }
        }
    }
}
