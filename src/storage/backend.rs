//! Key-value backends for the persistent store.

/// Minimal key-value contract the store is written against.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage backend.
///
/// An absent window or storage object degrades every operation to a no-op
/// read of nothing, matching the rest of the error model.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backend for unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryBackend {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trips_a_value() {
        let backend = LocalStorageBackend;
        backend.set("wastenet_test_key", "sol 7");
        assert_eq!(backend.get("wastenet_test_key").as_deref(), Some("sol 7"));
        backend.remove("wastenet_test_key");
        assert_eq!(backend.get("wastenet_test_key"), None);
    }
}
