use super::{Database, DatabaseError, Record};
use crate::import::{ImportState, ImportStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// The persisted summary of one import run, rewritten as the run progresses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImportLog {
	pub id: Uuid,
	pub user_id: Uuid,
	#[serde(with = "time::serde::rfc3339")]
	pub import_date: OffsetDateTime,
	pub total_products: usize,
	#[serde(default)]
	pub processed: usize,
	pub successful_imports: usize,
	pub failed_imports: usize,
	pub status: ImportState,
	pub errors: Vec<String>,
}
impl Record for ImportLog {
	fn store_id() -> &'static str {
		"import_logs"
	}
}

impl ImportLog {
	pub fn apply(&mut self, status: &ImportStatus) {
		self.total_products = status.total;
		self.processed = status.processed;
		self.successful_imports = status.successful;
		self.failed_imports = status.failed;
		self.status = status.status;
		self.errors = status.errors.clone();
	}

	pub fn to_status(&self) -> ImportStatus {
		ImportStatus {
			total: self.total_products,
			processed: self.processed,
			successful: self.successful_imports,
			failed: self.failed_imports,
			status: self.status,
			errors: self.errors.clone(),
		}
	}
}

impl Database {
	pub fn create_import_log(&self, user_id: Uuid, status: &ImportStatus) -> Result<ImportLog, DatabaseError> {
		let mut log = ImportLog {
			id: Uuid::new_v4(),
			user_id,
			import_date: OffsetDateTime::now_utc(),
			total_products: 0,
			processed: 0,
			successful_imports: 0,
			failed_imports: 0,
			status: ImportState::Pending,
			errors: Vec::new(),
		};
		log.apply(status);
		Ok(self.push(log)?)
	}

	/// Overwrites the stored log with the same id. Returns false if it was never created.
	pub fn update_import_log(&self, log: &ImportLog) -> Result<bool, DatabaseError> {
		Ok(self.replace(log.clone(), |existing: &ImportLog| existing.id == log.id)?)
	}

	/// The user's import runs, most recent first.
	pub fn import_logs_for_user(&self, user_id: &Uuid) -> Result<Vec<ImportLog>, DatabaseError> {
		let mut logs = self.all::<ImportLog>()?;
		logs.retain(|log| &log.user_id == user_id);
		logs.sort_by(|a, b| b.import_date.cmp(&a.import_date));
		Ok(logs)
	}

	pub fn import_log(&self, id: &Uuid) -> Result<Option<ImportLog>, DatabaseError> {
		Ok(self.find::<ImportLog, _>(|log| &log.id == id)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn processing(total: usize) -> ImportStatus {
		ImportStatus {
			status: ImportState::Processing,
			..ImportStatus::new(total)
		}
	}

	#[test]
	fn logs_are_created_then_overwritten() {
		let database = super::super::in_memory();
		let user_id = Uuid::new_v4();
		let mut log = database.create_import_log(user_id, &processing(3)).unwrap();
		assert_eq!(log.total_products, 3);
		assert_eq!(log.status, ImportState::Processing);

		let mut status = processing(3);
		status.processed = 1;
		status.failed = 1;
		status.errors.push("Error importing product: Widget".into());
		log.apply(&status);
		assert!(database.update_import_log(&log).unwrap());

		let stored = database.import_log(&log.id).unwrap().unwrap();
		assert_eq!(stored.failed_imports, 1);
		assert_eq!(stored.to_status(), status);
		assert_eq!(database.all::<ImportLog>().unwrap().len(), 1);
	}

	#[test]
	fn updating_an_unknown_log_is_a_no_op() {
		let database = super::super::in_memory();
		let mut log = database.create_import_log(Uuid::new_v4(), &processing(1)).unwrap();
		log.id = Uuid::new_v4();
		assert!(!database.update_import_log(&log).unwrap());
		assert_eq!(database.all::<ImportLog>().unwrap().len(), 1);
	}

	#[test]
	fn logs_filter_by_owner() {
		let database = super::super::in_memory();
		let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
		database.create_import_log(alice, &processing(1)).unwrap();
		database.create_import_log(bob, &processing(2)).unwrap();
		database.create_import_log(alice, &processing(3)).unwrap();
		let logs = database.import_logs_for_user(&alice).unwrap();
		assert_eq!(logs.len(), 2);
		assert!(logs.iter().all(|log| log.user_id == alice));
		assert!(logs[0].import_date >= logs[1].import_date);
	}
}
