use crate::storage::{StorageError, Store, StoreExt};
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;
use yew::prelude::*;

mod import_log;
pub use import_log::*;
mod settings;
pub use settings::*;
mod user;
pub use user::*;

/// A record kept as one element of a JSON array under [`Record::store_id`].
pub trait Record: Serialize + DeserializeOwned + Clone {
	fn store_id() -> &'static str;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DatabaseError {
	#[error(transparent)]
	Storage(#[from] StorageError),
	#[error("a user named {0:?} already exists")]
	DuplicateUsername(String),
}

/// Collections of records over a flat key-value store. There are no indices,
/// lookups scan the whole collection.
#[derive(Clone)]
pub struct Database(Rc<dyn Store>);

impl PartialEq for Database {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}
impl Database {
	pub fn new(store: Rc<dyn Store>) -> Self {
		Self(store)
	}

	pub fn store(&self) -> &dyn Store {
		&*self.0
	}

	pub fn all<T: Record>(&self) -> Result<Vec<T>, StorageError> {
		Ok(self.0.get_json::<Vec<T>>(T::store_id())?.unwrap_or_default())
	}

	fn put_all<T: Record>(&self, records: &[T]) -> Result<(), StorageError> {
		self.0.set_json(T::store_id(), records)
	}

	fn find<T, F>(&self, predicate: F) -> Result<Option<T>, StorageError>
	where
		T: Record,
		F: Fn(&T) -> bool,
	{
		Ok(self.all::<T>()?.into_iter().find(|record| predicate(record)))
	}

	fn push<T: Record>(&self, record: T) -> Result<T, StorageError> {
		let mut records = self.all::<T>()?;
		records.push(record.clone());
		self.put_all(&records)?;
		Ok(record)
	}

	/// Replaces the first record matching `predicate`, returning false when there is none.
	fn replace<T, F>(&self, record: T, predicate: F) -> Result<bool, StorageError>
	where
		T: Record,
		F: Fn(&T) -> bool,
	{
		let mut records = self.all::<T>()?;
		let Some(slot) = records.iter_mut().find(|existing| predicate(existing)) else {
			return Ok(false);
		};
		*slot = record;
		self.put_all(&records)?;
		Ok(true)
	}
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
	pub database: Database,
	pub children: Html,
}

#[function_component]
pub fn Provider(props: &ProviderProps) -> Html {
	html! {
		<ContextProvider<Database> context={props.database.clone()}>
			{props.children.clone()}
		</ContextProvider<Database>>
	}
}

#[cfg(test)]
pub(crate) fn in_memory() -> Database {
	Database::new(Rc::new(crate::storage::MemoryStore::new()))
}
