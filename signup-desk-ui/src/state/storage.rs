//! Browser Session Storage
//!
//! [`SessionStore`] backed by `window.localStorage`.

use signup_desk::{SessionStore, StoreError};
use web_sys::Storage;

/// Keeps the logged-in username under one `localStorage` key
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Result<Storage, StoreError> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;

    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

fn js_error(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", err))
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        local_storage()?.get_item(&self.key).map_err(js_error)
    }

    fn save(&self, username: &str) -> Result<(), StoreError> {
        local_storage()?.set_item(&self.key, username).map_err(js_error)
    }

    fn clear(&self) -> Result<(), StoreError> {
        local_storage()?.remove_item(&self.key).map_err(js_error)
    }
}
