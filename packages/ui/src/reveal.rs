use std::collections::BTreeSet;

use dioxus::prelude::*;

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = "section, .skill-card, .project-card, .timeline-item";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(40px)";
pub const VISIBLE_OPACITY: &str = "1";
pub const VISIBLE_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "all 1.2s cubic-bezier(0.165, 0.84, 0.44, 1)";

/// Attribute tying a DOM element to its tracker key.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Which elements are still waiting to be revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    pending: BTreeSet<usize>,
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn observe(&mut self, key: usize) {
        if !self.revealed.contains(&key) {
            self.pending.insert(key);
        }
    }

    /// Returns `true` exactly once per observed key: on its first
    /// intersecting entry. The caller then stops observing it.
    pub fn on_entry(&mut self, key: usize, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.pending.remove(&key) {
            return false;
        }
        self.revealed.insert(key);
        true
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    fn is_revealed(&self, key: usize) -> bool {
        self.revealed.contains(&key)
    }
}

/// Hide every reveal target and start watching them. Call once, after the
/// page has mounted.
#[cfg(target_arch = "wasm32")]
pub fn install_reveal_animations() {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{
        Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    fn set_style(element: &Element, opacity: &str, transform: &str) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            let style = element.style();
            let _ = style.set_property("opacity", opacity);
            let _ = style.set_property("transform", transform);
        }
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };

    let tracker = Rc::new(RefCell::new(RevealTracker::default()));
    let callback_tracker = Rc::clone(&tracker);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(key) = target
                    .get_attribute(REVEAL_KEY_ATTR)
                    .and_then(|k| k.parse::<usize>().ok())
                else {
                    continue;
                };
                if callback_tracker
                    .borrow_mut()
                    .on_entry(key, entry.is_intersecting())
                {
                    set_style(&target, VISIBLE_OPACITY, VISIBLE_TRANSFORM);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                tracing::warn!("reveal.install: IntersectionObserver unavailable");
                return;
            }
        };
    // The observer holds the callback for the lifetime of the page.
    callback.forget();

    for key in 0..targets.length() {
        let Some(element) = targets
            .item(key)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let key = key as usize;
        let _ = element.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
        set_style(&element, HIDDEN_OPACITY, HIDDEN_TRANSFORM);
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("transition", REVEAL_TRANSITION);
        }
        tracker.borrow_mut().observe(key);
        observer.observe(&element);
    }
    tracing::debug!("reveal.install: observing={}", tracker.borrow().pending());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_reveal_animations() {}

/// Install the reveal watcher once the calling component has mounted.
pub fn use_reveal_animations() {
    use_effect(install_reveal_animations);
}
