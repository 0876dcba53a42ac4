use crate::{
	database::{Database, DatabaseError},
	session::{Session, SessionUser},
	simulation::Simulation,
	storage::StorageError,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AuthError {
	#[error("Please fill in all fields")]
	MissingFields,
	#[error("Please enter a valid email address")]
	InvalidEmail,
	#[error("Invalid username or password")]
	InvalidCredentials,
	#[error("Username {0:?} is already taken")]
	UsernameTaken(String),
	#[error(transparent)]
	Database(DatabaseError),
}
impl From<DatabaseError> for AuthError {
	fn from(err: DatabaseError) -> Self {
		match err {
			DatabaseError::DuplicateUsername(username) => Self::UsernameTaken(username),
			err => Self::Database(err),
		}
	}
}

impl From<StorageError> for AuthError {
	fn from(err: StorageError) -> Self {
		Self::Database(err.into())
	}
}

fn is_email(email: &str) -> bool {
	match email.split_once('@') {
		Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
		None => false,
	}
}

/// Account operations. Each one takes a simulated round trip before answering.
pub struct Auth<'a> {
	pub database: &'a Database,
	pub simulation: &'a Simulation,
}
impl<'a> Auth<'a> {
	pub fn new(database: &'a Database, simulation: &'a Simulation) -> Self {
		Self { database, simulation }
	}

	/// Signs in an existing account, or registers an unknown username on the spot.
	pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
		let username = username.trim();
		if username.is_empty() || password.is_empty() {
			return Err(AuthError::MissingFields);
		}
		self.simulation.wait(self.simulation.config.latency.auth()).await;

		let user = match self.database.user_by_username(username)? {
			Some(user) if user.password == password => user,
			Some(_) => {
				log::warn!(target: "auth", "wrong password for {username:?}");
				return Err(AuthError::InvalidCredentials);
			}
			None => {
				log::info!(target: "auth", "registering unknown user {username:?} on login");
				self.database.create_user(username, &format!("{username}@example.com"), password)?
			}
		};
		log::info!(target: "auth", "signed in as {:?}", user.username);
		Ok(Session::persist(self.database.store(), &SessionUser::from(&user))?)
	}

	pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Session, AuthError> {
		let (username, email) = (username.trim(), email.trim());
		if username.is_empty() || email.is_empty() || password.is_empty() {
			return Err(AuthError::MissingFields);
		}
		if !is_email(email) {
			return Err(AuthError::InvalidEmail);
		}
		self.simulation.wait(self.simulation.config.latency.auth()).await;

		let user = self.database.create_user(username, email, password)?;
		log::info!(target: "auth", "account created for {:?}", user.username);
		Ok(Session::persist(self.database.store(), &SessionUser::from(&user))?)
	}

	pub fn logout(&self) -> Session {
		log::info!(target: "auth", "signed out");
		Session::clear(self.database.store())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;

	fn fixture() -> (Database, Simulation) {
		(crate::database::in_memory(), Simulation::instant())
	}

	#[test]
	fn login_registers_unknown_users() {
		let (database, simulation) = fixture();
		let auth = Auth::new(&database, &simulation);
		let session = block_on(auth.login("alice", "hunter2")).unwrap();
		let user = session.user.clone().unwrap();
		assert_eq!(user.username, "alice");
		assert_eq!(user.email, "alice@example.com");
		assert_eq!(Session::restore(database.store()), session);
		assert!(database.user_by_username("alice").unwrap().is_some());
	}

	#[test]
	fn login_checks_known_passwords() {
		let (database, simulation) = fixture();
		let auth = Auth::new(&database, &simulation);
		database.create_user("bob", "bob@example.com", "swordfish").unwrap();
		assert_eq!(block_on(auth.login("bob", "trout")), Err(AuthError::InvalidCredentials));
		assert_eq!(Session::restore(database.store()), Session::default());
		let session = block_on(auth.login("bob", "swordfish")).unwrap();
		assert_eq!(session.user.map(|user| user.email), Some("bob@example.com".into()));
	}

	#[test]
	fn empty_fields_are_rejected() {
		let (database, simulation) = fixture();
		let auth = Auth::new(&database, &simulation);
		assert_eq!(block_on(auth.login(" ", "x")), Err(AuthError::MissingFields));
		assert_eq!(block_on(auth.register("carol", "", "x")), Err(AuthError::MissingFields));
		assert!(database.all::<crate::database::User>().unwrap().is_empty());
	}

	#[test]
	fn register_validates_and_signs_in() {
		let (database, simulation) = fixture();
		let auth = Auth::new(&database, &simulation);
		assert_eq!(block_on(auth.register("carol", "carol", "pw")), Err(AuthError::InvalidEmail));
		let session = block_on(auth.register("carol", "carol@example.org", "pw")).unwrap();
		assert!(session.is_authenticated());
		assert_eq!(
			block_on(auth.register("carol", "other@example.org", "pw")),
			Err(AuthError::UsernameTaken("carol".into()))
		);
	}

	#[test]
	fn logout_forgets_the_session() {
		let (database, simulation) = fixture();
		let auth = Auth::new(&database, &simulation);
		block_on(auth.login("dave", "pw")).unwrap();
		assert_eq!(auth.logout(), Session::default());
		assert_eq!(Session::restore(database.store()), Session::default());
	}

	#[test]
	fn email_shapes() {
		assert!(is_email("a@b.co"));
		assert!(!is_email("a@b"));
		assert!(!is_email("@b.co"));
		assert!(!is_email("a@.co"));
	}
}
