use crate::{
	database::{Database, DatabaseError},
	mapping::MappedRecord,
	simulation::Simulation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static UNEXPECTED_FAILURE: &str = "An unexpected error occurred during import.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportState {
	#[default]
	Pending,
	Processing,
	Completed,
	Failed,
}
impl ImportState {
	pub fn is_finished(&self) -> bool {
		matches!(self, Self::Completed | Self::Failed)
	}
}

/// Cumulative progress of one import run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImportStatus {
	pub total: usize,
	pub processed: usize,
	pub successful: usize,
	pub failed: usize,
	pub status: ImportState,
	pub errors: Vec<String>,
}
impl ImportStatus {
	pub fn new(total: usize) -> Self {
		Self {
			total,
			..Default::default()
		}
	}

	/// Rounded completion percentage, 0 when there is nothing to import.
	pub fn percent(&self) -> u32 {
		if self.total == 0 {
			return 0;
		}
		((self.processed as f64 / self.total as f64) * 100.0).round() as u32
	}

	/// Marks the run failed after an error nothing else accounted for.
	pub fn fail_unexpectedly(&mut self) {
		self.status = ImportState::Failed;
		self.errors.push(UNEXPECTED_FAILURE.to_owned());
	}

	pub fn summary(&self) -> String {
		match self.status {
			ImportState::Completed if self.failed == 0 => "Import completed successfully!".to_owned(),
			ImportState::Completed => format!("Import completed with {} errors.", self.failed),
			ImportState::Failed => "Import failed. Please try again.".to_owned(),
			ImportState::Pending | ImportState::Processing => "Importing products...".to_owned(),
		}
	}

	/// Plain-text report offered for download once the run is over.
	pub fn export_text(&self) -> String {
		let mut text = String::new();
		text.push_str(&format!("{}\n", self.summary()));
		text.push_str(&format!("Total: {}\n", self.total));
		text.push_str(&format!("Processed: {}\n", self.processed));
		text.push_str(&format!("Successful: {}\n", self.successful));
		text.push_str(&format!("Failed: {}\n", self.failed));
		if !self.errors.is_empty() {
			text.push_str("\nErrors:\n");
			for error in &self.errors {
				text.push_str(&format!("- {error}\n"));
			}
		}
		text
	}

	fn record(&mut self, idx: usize, record: &MappedRecord, succeeded: bool) {
		self.processed += 1;
		if succeeded {
			self.successful += 1;
		} else {
			self.failed += 1;
			let label = match record.name() {
				Some(name) if !name.is_empty() => name.to_owned(),
				_ => format!("Product {}", idx + 1),
			};
			self.errors.push(format!("Error importing product: {label}"));
		}
		if self.processed == self.total {
			// Row failures are reported through `failed` and `errors`, the run itself still completes.
			self.status = ImportState::Completed;
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImportError {
	#[error(transparent)]
	Database(#[from] DatabaseError),
}

/// Pushes mapped records to the (simulated) store one at a time, mirroring
/// every step into an import log owned by `user_id`.
pub struct Importer<'a> {
	pub database: &'a Database,
	pub simulation: &'a Simulation,
	pub user_id: Uuid,
}
impl<'a> Importer<'a> {
	/// Runs the import, handing `on_progress` a snapshot after initialization and after every row.
	pub async fn run<F>(&self, records: &[MappedRecord], mut on_progress: F) -> Result<ImportStatus, ImportError>
	where
		F: FnMut(&ImportStatus),
	{
		let mut status = ImportStatus::new(records.len());
		status.status = match records.is_empty() {
			true => ImportState::Completed,
			false => ImportState::Processing,
		};
		let mut import_log = self.database.create_import_log(self.user_id, &status)?;
		log::info!(target: "import", "starting import {} of {} products", import_log.id, status.total);
		on_progress(&status);

		let row_delay = self.simulation.config.latency.import_row();
		for (idx, record) in records.iter().enumerate() {
			self.simulation.wait(row_delay).await;
			let succeeded = self.simulation.import_outcome.succeeds();
			status.record(idx, record, succeeded);
			if !succeeded {
				log::debug!(target: "import", "row {} rejected", idx + 1);
			}

			import_log.apply(&status);
			if !self.database.update_import_log(&import_log)? {
				log::warn!(target: "import", "import log {} is gone, row {} was not recorded", import_log.id, idx + 1);
			}
			on_progress(&status);
		}

		log::info!(
			target: "import",
			"import {} finished: {} successful, {} failed",
			import_log.id,
			status.successful,
			status.failed
		);
		Ok(status)
	}
}
