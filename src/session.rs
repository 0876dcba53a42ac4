use crate::{
	database::User,
	storage::{LocalStore, Store, StoreExt},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static SESSION_KEY: &str = "user";

/// The signed-in identity, as persisted under the session key. Never carries the password.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionUser {
	pub id: Uuid,
	pub username: String,
	pub email: String,
}

impl From<&User> for SessionUser {
	fn from(user: &User) -> Self {
		Self {
			id: user.id,
			username: user.username.clone(),
			email: user.email.clone(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
	pub user: Option<SessionUser>,
}
impl Session {
	/// Reads the persisted session. A value that no longer decodes is removed.
	pub fn restore(store: &dyn Store) -> Self {
		match store.get_json::<SessionUser>(SESSION_KEY) {
			Ok(user) => Self { user },
			Err(err) => {
				log::error!(target: "session", "discarding stored session: {err}");
				store.delete(SESSION_KEY);
				Self::default()
			}
		}
	}

	pub fn persist(store: &dyn Store, user: &SessionUser) -> Result<Self, crate::storage::StorageError> {
		store.set_json(SESSION_KEY, user)?;
		Ok(Self {
			user: Some(user.clone()),
		})
	}

	pub fn clear(store: &dyn Store) -> Self {
		store.delete(SESSION_KEY);
		Self::default()
	}

	pub fn is_authenticated(&self) -> bool {
		self.user.is_some()
	}
}

impl yewdux::store::Store for Session {
	fn new(_cx: &yewdux::Context) -> Self {
		Self::restore(&LocalStore)
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;

	fn alice() -> SessionUser {
		SessionUser {
			id: Uuid::new_v4(),
			username: "alice".into(),
			email: "alice@example.com".into(),
		}
	}

	#[test]
	fn persisted_sessions_are_restored() {
		let store = MemoryStore::new();
		assert_eq!(Session::restore(&store), Session::default());
		let session = Session::persist(&store, &alice()).unwrap();
		assert!(session.is_authenticated());
		assert_eq!(Session::restore(&store), session);
		assert_eq!(Session::clear(&store), Session::default());
		assert_eq!(store.get(SESSION_KEY).unwrap(), None);
	}

	#[test]
	fn corrupt_sessions_are_deleted() {
		let store = MemoryStore::new().with_entry(SESSION_KEY, "{not json");
		assert_eq!(Session::restore(&store), Session::default());
		assert_eq!(store.get(SESSION_KEY).unwrap(), None);
	}

	#[test]
	fn passwords_stay_out_of_the_session() {
		let user = User {
			id: Uuid::new_v4(),
			username: "bob".into(),
			email: "bob@example.com".into(),
			password: "swordfish".into(),
		};
		let store = MemoryStore::new();
		Session::persist(&store, &SessionUser::from(&user)).unwrap();
		let raw = store.get(SESSION_KEY).unwrap().unwrap();
		assert!(!raw.contains("swordfish"));
	}
}
