use serde::{de::DeserializeOwned, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StorageError {
	#[error("storage backend unavailable: {0}")]
	Backend(String),
	#[error("failed to encode {key:?}: {error}")]
	Encode { key: String, error: String },
	#[error("failed to decode {key:?}: {error}")]
	Decode { key: String, error: String },
}

/// A flat string-keyed store. Values are opaque strings, callers decide the encoding.
pub trait Store {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
	fn delete(&self, key: &str);
	fn keys(&self) -> Result<Vec<String>, StorageError>;
}

pub trait StoreExt {
	fn get_json<T>(&self, key: &str) -> Result<Option<T>, StorageError>
	where
		T: DeserializeOwned;

	fn set_json<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
	where
		T: Serialize + ?Sized;
}
impl<S> StoreExt for S
where
	S: Store + ?Sized,
{
	fn get_json<T>(&self, key: &str) -> Result<Option<T>, StorageError>
	where
		T: DeserializeOwned,
	{
		let Some(raw) = self.get(key)? else {
			return Ok(None);
		};
		match serde_json::from_str(&raw) {
			Ok(value) => Ok(Some(value)),
			Err(err) => Err(StorageError::Decode {
				key: key.to_owned(),
				error: err.to_string(),
			}),
		}
	}

	fn set_json<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
	where
		T: Serialize + ?Sized,
	{
		let raw = serde_json::to_string(value).map_err(|err| StorageError::Encode {
			key: key.to_owned(),
			error: err.to_string(),
		})?;
		self.set(key, &raw)
	}
}

/// The browser's `localStorage`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LocalStore;
impl LocalStore {
	fn raw() -> web_sys::Storage {
		use gloo_storage::Storage;
		gloo_storage::LocalStorage::raw()
	}
}

impl Store for LocalStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Self::raw()
			.get_item(key)
			.map_err(|err| StorageError::Backend(format!("{err:?}")))
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		Self::raw()
			.set_item(key, value)
			.map_err(|err| StorageError::Backend(format!("{err:?}")))
	}

	fn delete(&self, key: &str) {
		if let Err(err) = Self::raw().remove_item(key) {
			log::warn!(target: "storage", "failed to delete {key:?}: {err:?}");
		}
	}

	fn keys(&self) -> Result<Vec<String>, StorageError> {
		let storage = Self::raw();
		let length = storage
			.length()
			.map_err(|err| StorageError::Backend(format!("{err:?}")))?;
		let mut keys = Vec::with_capacity(length as usize);
		for idx in 0..length {
			if let Ok(Some(key)) = storage.key(idx) {
				keys.push(key);
			}
		}
		Ok(keys)
	}
}

/// In-process store, used wherever the browser is not available.
#[derive(Debug, Default)]
pub struct MemoryStore(RefCell<BTreeMap<String, String>>);
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_entry(self, key: &str, value: &str) -> Self {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
		self
	}
}

impl Store for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.0.borrow().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn delete(&self, key: &str) {
		self.0.borrow_mut().remove(key);
	}

	fn keys(&self) -> Result<Vec<String>, StorageError> {
		Ok(self.0.borrow().keys().cloned().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;

	#[derive(Debug, PartialEq, Serialize, Deserialize)]
	struct Sample {
		name: String,
		count: u32,
	}

	#[test]
	fn missing_key_reads_as_none() {
		let store = MemoryStore::new();
		assert_eq!(store.get_json::<Sample>("absent"), Ok(None));
	}

	#[test]
	fn json_values_survive_the_store() {
		let store = MemoryStore::new();
		let sample = Sample {
			name: "widgets".into(),
			count: 3,
		};
		store.set_json("sample", &sample).unwrap();
		assert_eq!(store.get("sample").unwrap().as_deref(), Some(r#"{"name":"widgets","count":3}"#));
		assert_eq!(store.get_json::<Sample>("sample").unwrap(), Some(sample));
	}

	#[test]
	fn garbage_fails_to_decode() {
		let store = MemoryStore::new().with_entry("sample", "not json");
		let err = store.get_json::<Sample>("sample").unwrap_err();
		assert!(matches!(err, StorageError::Decode { ref key, .. } if key == "sample"));
	}

	#[test]
	fn keys_lists_everything_stored() {
		let store = MemoryStore::new().with_entry("b", "2").with_entry("a", "1");
		assert_eq!(store.keys().unwrap(), vec!["a".to_owned(), "b".to_owned()]);
		store.delete("a");
		assert_eq!(store.keys().unwrap(), vec!["b".to_owned()]);
	}
}
