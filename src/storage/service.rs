use log::{error, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, StorageError};

pub const DEFAULT_PREFIX: &str = "math-app:";

/// JSON persistence under a key namespace. Reads never fail: missing keys
/// and corrupt payloads both come back as `None`. Writes report errors.
pub struct StorageService {
    store: Box<dyn KeyValueStore>,
    prefix: String,
}

impl StorageService {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_prefix(store, DEFAULT_PREFIX)
    }

    pub fn with_prefix(store: Box<dyn KeyValueStore>, prefix: &str) -> Self {
        Self {
            store,
            prefix: prefix.to_string(),
        }
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, data: &T) -> Result<(), StorageError> {
        let prefixed_key = self.prefixed(key);
        let serialized = serde_json::to_string(data)?;
        trace!(target: "storage", "Saving {} ({} bytes)", prefixed_key, serialized.len());
        self.store.set(&prefixed_key, serialized).map_err(|e| {
            error!(target: "storage", "Failed to save {}: {}", prefixed_key, e);
            e
        })
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let prefixed_key = self.prefixed(key);
        let serialized = self.store.get(&prefixed_key)?;
        match serde_json::from_str(&serialized) {
            Ok(data) => Some(data),
            Err(e) => {
                error!(target: "storage", "Failed to load {}: {}", prefixed_key, e);
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) {
        let prefixed_key = self.prefixed(key);
        if let Err(e) = self.store.delete(&prefixed_key) {
            error!(target: "storage", "Failed to remove {}: {}", prefixed_key, e);
        }
    }

    /// Removes every key in this namespace and nothing else.
    pub fn clear(&mut self) {
        for key in self.get_all_keys() {
            if let Err(e) = self.store.delete(&key) {
                error!(target: "storage", "Failed to clear {}: {}", key, e);
            }
        }
    }

    /// Full (prefixed) keys that belong to this namespace
    pub fn get_all_keys(&self) -> Vec<String> {
        self.store
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(&self.prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_round_trips_json_values() {
        let mut storage = StorageService::new(Box::new(MemoryStore::new()));

        let object = json!({"soundEnabled": true, "theme": "dark"});
        storage.save("object", &object).unwrap();
        assert_eq!(storage.load::<serde_json::Value>("object"), Some(object));

        storage.save("array", &vec![1, 2, 3]).unwrap();
        assert_eq!(storage.load::<Vec<u32>>("array"), Some(vec![1, 2, 3]));

        storage.save("number", &42).unwrap();
        assert_eq!(storage.load::<i32>("number"), Some(42));

        storage.save("text", "hello").unwrap();
        assert_eq!(storage.load::<String>("text").as_deref(), Some("hello"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let storage = StorageService::new(Box::new(MemoryStore::new()));
        assert_eq!(storage.load::<u32>("nothing"), None);
    }

    #[test]
    fn test_corrupt_payload_is_none() {
        let mut store = MemoryStore::new();
        store.set("math-app:user-stats", "{broken".to_string()).unwrap();
        let storage = StorageService::new(Box::new(store));

        assert_eq!(storage.load::<serde_json::Value>("user-stats"), None);
    }

    #[test]
    fn test_keys_are_prefixed_and_filtered() {
        let mut store = MemoryStore::new();
        store.set("someone-else", "1".to_string()).unwrap();
        let mut storage = StorageService::new(Box::new(store));
        storage.save("preferences", &true).unwrap();

        assert_eq!(storage.get_all_keys(), vec!["math-app:preferences".to_string()]);
    }

    #[test]
    fn test_clear_leaves_foreign_keys() {
        let mut store = MemoryStore::new();
        store.set("someone-else", "1".to_string()).unwrap();
        let mut storage = StorageService::new(Box::new(store));
        storage.save("a", &1).unwrap();
        storage.save("b", &2).unwrap();

        storage.clear();

        assert!(storage.get_all_keys().is_empty());
        assert_eq!(storage.load::<u32>("a"), None);
        assert_eq!(storage.store.get("someone-else").as_deref(), Some("1"));
    }

    #[test]
    fn test_remove_only_touches_one_key() {
        let mut storage = StorageService::new(Box::new(MemoryStore::new()));
        storage.save("a", &1).unwrap();
        storage.save("b", &2).unwrap();
        storage.remove("a");
        assert_eq!(storage.load::<u32>("a"), None);
        assert_eq!(storage.load::<u32>("b"), Some(2));
    }

    #[test]
    fn test_quota_error_surfaces() {
        let mut storage = StorageService::new(Box::new(MemoryStore::with_quota(16)));
        let result = storage.save("session-history", &vec![0u8; 64]);
        assert!(matches!(result, Err(StorageError::QuotaExceeded { .. })));
    }
}
