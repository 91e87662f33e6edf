use dioxus::prelude::*;

use crate::content::{BRAND, NAV_LINKS};
use crate::i18n::{toggle_label, toggle_lang, use_lang};
use crate::scroll::AnchorLink;

const NAV_CSS: Asset = asset!("/assets/styling/nav.css");

/// Open/closed state of the mobile navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn nav_class(self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    pub fn icon_class(self) -> &'static str {
        if self.open {
            "fa-solid fa-xmark"
        } else {
            "fa-solid fa-bars"
        }
    }
}

/// Fixed header: brand, section links, language switch, mobile toggle.
#[component]
pub fn Navbar() -> Element {
    let lang_sig = use_lang();
    let lang = lang_sig();
    let mut menu = use_signal(MenuState::default);
    let state = menu();

    rsx! {
        document::Link { rel: "stylesheet", href: NAV_CSS }

        header { class: "site-header",
            nav { class: "navbar",
                AnchorLink {
                    class: "logo",
                    href: "#hero",
                    label: BRAND,
                    onnavigate: move |_| menu.write().close(),
                }
                ul { class: state.nav_class(),
                    for link in NAV_LINKS {
                        li { key: "{link.href}",
                            AnchorLink {
                                href: link.href,
                                label: link.label,
                                onnavigate: move |_| menu.write().close(),
                            }
                        }
                    }
                }
                div { class: "nav-actions",
                    button {
                        id: "lang-switch",
                        class: "lang-switch",
                        r#type: "button",
                        onclick: move |_| toggle_lang(lang_sig),
                        {toggle_label(lang)}
                    }
                    button {
                        class: "mobile-toggle",
                        r#type: "button",
                        "aria-label": crate::t(lang, "menu.toggle"),
                        "aria-expanded": if state.is_open() { "true" } else { "false" },
                        onclick: move |_| menu.write().toggle(),
                        i { class: state.icon_class() }
                    }
                }
            }
        }
    }
}
