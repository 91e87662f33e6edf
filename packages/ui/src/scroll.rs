use dioxus::prelude::*;

use crate::i18n::Bilingual;

/// Clearance for the fixed header, in CSS pixels.
pub const HEADER_OFFSET: f64 = 100.0;

/// Element id an in-page link points at, if it is one.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_offset(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET
}

/// Smooth-scroll to the element `href` names. Returns whether a scroll was
/// issued; unknown targets are ignored.
pub fn scroll_to_fragment(href: &str) -> bool {
    scroll_with(href, crate::dom::element_offset_top, crate::dom::smooth_scroll_to)
}

fn scroll_with(
    href: &str,
    offset_of: impl Fn(&str) -> Option<f64>,
    scroll_to: impl FnOnce(f64),
) -> bool {
    let Some(top) = fragment_target(href).and_then(offset_of) else {
        tracing::debug!("scroll.no_target: href={href}");
        return false;
    };
    scroll_to(scroll_offset(top));
    true
}

/// In-page link that scrolls smoothly instead of jumping.
#[component]
pub fn AnchorLink(
    #[props(into)] href: String,
    label: Bilingual,
    #[props(default, into)] class: String,
    onnavigate: Option<EventHandler<()>>,
) -> Element {
    let target = href.clone();
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt| {
                evt.prevent_default();
                scroll_to_fragment(&target);
                if let Some(handler) = &onnavigate {
                    handler.call(());
                }
            },
            crate::Tr { text: label }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn page(id: &str) -> Option<f64> {
        match id {
            "about" => Some(640.0),
            "contact" => Some(2400.0),
            _ => None,
        }
    }

    #[test]
    fn only_hash_links_have_targets() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#about"), None);
    }

    #[test]
    fn scrolls_to_offset_minus_header() {
        let scrolled = Cell::new(None);
        let issued = scroll_with("#about", page, |top| scrolled.set(Some(top)));

        assert!(issued);
        assert_eq!(scrolled.get(), Some(540.0));
    }

    #[test]
    fn missing_target_does_not_scroll() {
        let scrolled = Cell::new(None);
        let issued = scroll_with("#nowhere", page, |top| scrolled.set(Some(top)));

        assert!(!issued);
        assert_eq!(scrolled.get(), None);
    }

    #[test]
    fn offset_can_go_negative_near_top() {
        assert_eq!(scroll_offset(40.0), -60.0);
    }
}
