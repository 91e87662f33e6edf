use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value persistence, e.g. browser local storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Outside the browser it stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn set(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!("storage.set: localStorage unavailable, key={key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("storage.set: write rejected, key={key}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set(&self, _key: &str, _value: &str) {}
}

/// In-memory store for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
