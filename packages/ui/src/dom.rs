//! Thin browser bindings. Every call is a no-op off wasm and when the window,
//! document or element is missing.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    pub fn set_document_lang(code: &str) {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            return;
        };
        if root.set_attribute("lang", code).is_err() {
            tracing::warn!("dom.set_document_lang: rejected code={code}");
        }
    }

    pub fn element_offset_top(id: &str) -> Option<f64> {
        let element = document()?.get_element_by_id(id)?;
        let element: HtmlElement = element.dyn_into().ok()?;
        Some(f64::from(element.offset_top()))
    }

    pub fn smooth_scroll_to(top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    pub fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub fn set_document_lang(_code: &str) {}

    pub fn element_offset_top(_id: &str) -> Option<f64> {
        None
    }

    pub fn smooth_scroll_to(_top: f64) {}

    pub fn alert(message: &str) {
        tracing::info!("dom.alert: {message}");
    }
}

pub use imp::{alert, element_offset_top, set_document_lang, smooth_scroll_to};
