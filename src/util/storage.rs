//! Durable key/value storage behind a trait.
//!
//! DESIGN
//! ======
//! The session store takes a `StorageBackend` instead of touching
//! `localStorage` directly, so its transitions can be exercised in native
//! tests with `MemoryStorage`. `LocalStorage` is the browser-backed
//! implementation; outside a browser every read returns `None` and writes
//! are dropped.

/// Minimal key/value surface over browser-persistent storage.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove `key` and its value.
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage standing in for `localStorage` in native tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}
