use super::{Database, DatabaseError, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Someone who can sign in. The password is compared as-is, nothing here is meant to be secure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
	pub id: Uuid,
	pub username: String,
	pub email: String,
	pub password: String,
}
impl Record for User {
	fn store_id() -> &'static str {
		"users"
	}
}

impl Database {
	pub fn create_user(&self, username: &str, email: &str, password: &str) -> Result<User, DatabaseError> {
		if self.user_by_username(username)?.is_some() {
			return Err(DatabaseError::DuplicateUsername(username.to_owned()));
		}
		let user = User {
			id: Uuid::new_v4(),
			username: username.to_owned(),
			email: email.to_owned(),
			password: password.to_owned(),
		};
		log::debug!(target: "database", "creating user {:?} ({})", user.username, user.id);
		Ok(self.push(user)?)
	}

	pub fn user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
		Ok(self.find::<User, _>(|user| user.username == username)?)
	}

	pub fn user(&self, id: &Uuid) -> Result<Option<User>, DatabaseError> {
		Ok(self.find::<User, _>(|user| &user.id == id)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn created_users_can_be_found() {
		let database = super::super::in_memory();
		let alice = database.create_user("alice", "alice@example.com", "hunter2").unwrap();
		let bob = database.create_user("bob", "bob@example.com", "swordfish").unwrap();
		assert_ne!(alice.id, bob.id);
		assert_eq!(database.user_by_username("bob").unwrap(), Some(bob.clone()));
		assert_eq!(database.user(&alice.id).unwrap(), Some(alice));
		assert_eq!(database.user_by_username("carol").unwrap(), None);
		assert_eq!(database.all::<User>().unwrap().len(), 2);
	}

	#[test]
	fn usernames_are_unique() {
		let database = super::super::in_memory();
		database.create_user("alice", "alice@example.com", "a").unwrap();
		let err = database.create_user("alice", "other@example.com", "b").unwrap_err();
		assert_eq!(err, DatabaseError::DuplicateUsername("alice".into()));
	}
}
