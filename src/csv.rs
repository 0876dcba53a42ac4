//! Naive comma separated input: no quoting, no escapes, the first row is always the header.

use std::rc::Rc;
use yewdux::prelude::*;

/// Rows of trimmed cells.
pub type Grid = Vec<Vec<String>>;

/// The file handed from the upload screen to the mapping screen. Lives only in memory.
#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct Upload {
	pub file_name: Option<String>,
	pub grid: Option<Rc<Grid>>,
}
impl Upload {
	pub fn new(file_name: String, grid: Grid) -> Self {
		Self {
			file_name: Some(file_name),
			grid: Some(Rc::new(grid)),
		}
	}

	pub fn headers(&self) -> &[String] {
		match self.grid.as_deref().and_then(|grid| grid.first()) {
			Some(headers) => headers.as_slice(),
			None => &[],
		}
	}

	/// Data rows, excluding the header.
	pub fn row_count(&self) -> usize {
		self.grid.as_ref().map_or(0, |grid| grid.len().saturating_sub(1))
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UploadError {
	#[error("Please upload a CSV file")]
	NotCsv,
	#[error("File is too large (max {}MB)", .limit / (1024 * 1024))]
	TooLarge { size: u64, limit: u64 },
	#[error("Failed to read file")]
	Unreadable,
	#[error("CSV file appears to be empty or invalid")]
	Empty,
}

pub fn parse(text: &str) -> Grid {
	let mut grid = text
		.split('\n')
		.map(|line| line.split(',').map(|cell| cell.trim().to_owned()).collect::<Vec<_>>())
		.collect::<Grid>();
	while grid.last().map_or(false, |row| row.iter().all(String::is_empty)) {
		grid.pop();
	}
	grid
}

/// Accepts files named `*.csv` or typed `text/csv`, up to `limit` bytes.
pub fn check_file(name: &str, mime: &str, size: u64, limit: u64) -> Result<(), UploadError> {
	if !name.ends_with(".csv") && mime != "text/csv" {
		return Err(UploadError::NotCsv);
	}
	if size > limit {
		return Err(UploadError::TooLarge { size, limit });
	}
	Ok(())
}

/// A usable grid has a header and at least one data row.
pub fn check_grid(grid: &Grid) -> Result<(), UploadError> {
	match grid.len() < 2 {
		true => Err(UploadError::Empty),
		false => Ok(()),
	}
}

pub async fn read_file(file: &web_sys::File) -> Result<Grid, UploadError> {
	let text = match wasm_bindgen_futures::JsFuture::from(file.text()).await {
		Ok(value) => value.as_string().ok_or(UploadError::Unreadable)?,
		Err(err) => {
			log::error!(target: "upload", "failed to read {:?}: {err:?}", file.name());
			return Err(UploadError::Unreadable);
		}
	};
	let grid = parse(&text);
	check_grid(&grid)?;
	log::info!(target: "upload", "read {:?}: {} rows", file.name(), grid.len());
	Ok(grid)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_and_trims() {
		let grid = parse("Name, Price ,SKU\r\nWidget,9.99, W-1\nGadget,,\n");
		assert_eq!(
			grid,
			vec![
				vec!["Name".to_owned(), "Price".into(), "SKU".into()],
				vec!["Widget".to_owned(), "9.99".into(), "W-1".into()],
				vec!["Gadget".to_owned(), "".into(), "".into()],
			]
		);
	}

	#[test]
	fn quotes_are_not_special() {
		let grid = parse("name,description\n\"Mug\",\"Big, blue\"");
		assert_eq!(grid[1], vec!["\"Mug\"".to_owned(), "\"Big".into(), "blue\"".into()]);
	}

	#[test]
	fn trailing_blank_lines_are_dropped() {
		assert_eq!(parse("a,b\n1,2\n\n \n").len(), 2);
		assert!(parse("").is_empty());
	}

	#[test]
	fn file_checks() {
		let limit = 5 * 1024 * 1024;
		assert_eq!(check_file("products.csv", "", 10, limit), Ok(()));
		assert_eq!(check_file("export", "text/csv", 10, limit), Ok(()));
		assert_eq!(check_file("products.xlsx", "application/vnd.ms-excel", 10, limit), Err(UploadError::NotCsv));
		let too_large = check_file("big.csv", "text/csv", limit + 1, limit).unwrap_err();
		assert_eq!(too_large.to_string(), "File is too large (max 5MB)");
	}

	#[test]
	fn uploads_expose_the_header() {
		let upload = Upload::new("products.csv".into(), parse("name,price\nA,1\nB,2"));
		assert_eq!(upload.headers(), ["name".to_owned(), "price".to_owned()]);
		assert_eq!(upload.row_count(), 2);
		assert!(Upload::default().headers().is_empty());
		assert_eq!(Upload::default().row_count(), 0);
	}

	#[test]
	fn header_only_grids_are_rejected() {
		assert_eq!(check_grid(&parse("name,price")), Err(UploadError::Empty));
		assert_eq!(check_grid(&parse("name,price\nA,1")), Ok(()));
	}
}
