use crate::csv::Grid;
use enum_map::{Enum, EnumMap};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product field a CSV column can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
	Name,
	Description,
	Price,
	Sku,
	Category,
	Stock,
	Image,
}
impl Field {
	pub fn all() -> [Self; 7] {
		[
			Self::Name,
			Self::Description,
			Self::Price,
			Self::Sku,
			Self::Category,
			Self::Stock,
			Self::Image,
		]
	}

	pub fn required() -> [Self; 2] {
		[Self::Name, Self::Price]
	}

	pub fn key(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Description => "description",
			Self::Price => "price",
			Self::Sku => "sku",
			Self::Category => "category",
			Self::Stock => "stock",
			Self::Image => "image",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Name => "Product Name",
			Self::Description => "Description",
			Self::Price => "Price",
			Self::Sku => "SKU",
			Self::Category => "Category",
			Self::Stock => "Stock Quantity",
			Self::Image => "Image URL",
		}
	}

	pub fn is_required(&self) -> bool {
		Self::required().contains(self)
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, Self::Price | Self::Stock)
	}

	fn matches_header(&self, header: &str) -> bool {
		let header = header.to_lowercase();
		header.contains(self.key()) || self.key().contains(header.as_str())
	}
}

impl std::fmt::Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.key())
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MappingError {
	#[error("Required fields missing: {}", .0.iter().join(", "))]
	MissingRequired(Vec<Field>),
}

/// Which source column feeds each product field. A column feeds at most one field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnMapping(EnumMap<Field, Option<usize>>);
impl ColumnMapping {
	/// Guesses a mapping from the header row. Each header goes to the first field
	/// whose key it contains (or is contained in); a field keeps the first header it gets.
	pub fn suggest(headers: &[String]) -> Self {
		let mut mapping = Self::default();
		for (column, header) in headers.iter().enumerate() {
			let Some(field) = Field::all().into_iter().find(|field| field.matches_header(header)) else {
				continue;
			};
			if mapping.0[field].is_none() {
				mapping.0[field] = Some(column);
			}
		}
		mapping
	}

	pub fn column(&self, field: Field) -> Option<usize> {
		self.0[field]
	}

	pub fn field_for(&self, column: usize) -> Option<Field> {
		self.0
			.iter()
			.find_map(|(field, assigned)| (*assigned == Some(column)).then_some(field))
	}

	/// Points `field` at `column`, taking the column away from whichever field had it.
	pub fn assign(&mut self, field: Field, column: usize) {
		self.ignore_column(column);
		self.0[field] = Some(column);
	}

	/// The "ignore" choice: `field` is no longer fed by any column.
	pub fn clear(&mut self, field: Field) {
		self.0[field] = None;
	}

	pub fn ignore_column(&mut self, column: usize) {
		for (_, assigned) in self.0.iter_mut() {
			if *assigned == Some(column) {
				*assigned = None;
			}
		}
	}

	pub fn assignments(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
		self.0.iter().filter_map(|(field, column)| column.map(|column| (field, column)))
	}

	pub fn missing_required(&self) -> Vec<Field> {
		Field::required().into_iter().filter(|field| self.0[*field].is_none()).collect()
	}

	pub fn validate(&self) -> Result<(), MappingError> {
		let missing = self.missing_required();
		match missing.is_empty() {
			true => Ok(()),
			false => Err(MappingError::MissingRequired(missing)),
		}
	}

	/// Builds one record per data row (every row after the header).
	pub fn apply(&self, grid: &Grid) -> Result<Vec<MappedRecord>, MappingError> {
		self.validate()?;
		let records = grid.iter().skip(1).map(|row| self.map_row(row)).collect::<Vec<_>>();
		log::debug!(target: "mapping", "mapped {} rows", records.len());
		Ok(records)
	}

	fn map_row(&self, row: &[String]) -> MappedRecord {
		let mut record = MappedRecord::default();
		for (field, column) in self.assignments() {
			let Some(cell) = row.get(column) else {
				continue;
			};
			let value = match field.is_numeric() {
				true => normalize_number(cell),
				false => cell.clone(),
			};
			record.insert(field, value);
		}
		record
	}
}

lazy_static! {
	static ref FLOAT_PREFIX: Regex = Regex::new(r"^[+-]?(Infinity|(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)").unwrap();
}

/// Lenient float parse: the longest numeric prefix after leading whitespace.
pub fn parse_float(text: &str) -> Option<f64> {
	let text = text.trim_start();
	let prefix = FLOAT_PREFIX.find(text)?.as_str();
	match prefix.trim_start_matches(|c: char| c == '+' || c == '-') {
		"Infinity" if prefix.starts_with('-') => Some(f64::NEG_INFINITY),
		"Infinity" => Some(f64::INFINITY),
		_ => prefix.parse::<f64>().ok(),
	}
}

fn format_float(value: f64) -> String {
	match value {
		v if v == 0.0 => "0".to_owned(),
		v if v == f64::INFINITY => "Infinity".to_owned(),
		v if v == f64::NEG_INFINITY => "-Infinity".to_owned(),
		v if v.abs() >= 1e21 || v.abs() < 1e-6 => {
			let text = format!("{v:e}");
			match text.contains("e-") {
				true => text,
				false => text.replacen('e', "e+", 1),
			}
		}
		v => v.to_string(),
	}
}

/// Numeric cells become the parsed number's canonical text; anything else is kept verbatim.
pub fn normalize_number(cell: &str) -> String {
	match parse_float(cell) {
		Some(value) => format_float(value),
		None => cell.to_owned(),
	}
}

/// A product-shaped record built from one CSV row. Only mapped fields are present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MappedRecord(BTreeMap<Field, String>);
impl MappedRecord {
	pub fn insert(&mut self, field: Field, value: String) {
		self.0.insert(field, value);
	}

	pub fn get(&self, field: Field) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn name(&self) -> Option<&str> {
		self.get(Field::Name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<const N: usize> From<[(Field, &str); N]> for MappedRecord {
	fn from(entries: [(Field, &str); N]) -> Self {
		Self(entries.into_iter().map(|(field, value)| (field, value.to_owned())).collect())
	}
}

/// The first few data rows, for showing alongside the mapping controls.
pub const PREVIEW_ROWS: usize = 3;

pub fn preview(grid: &Grid, rows: usize) -> &[Vec<String>] {
	let end = grid.len().min(rows + 1);
	grid.get(1..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn grid(rows: &[&[&str]]) -> Grid {
		rows.iter().map(|row| row.iter().map(|cell| cell.to_string()).collect()).collect()
	}

	fn headers(names: &[&str]) -> Vec<String> {
		names.iter().map(|name| name.to_string()).collect()
	}

	#[test]
	fn suggests_by_substring_both_ways() {
		let mapping = ColumnMapping::suggest(&headers(&["Product Name", "SKU", "Price (USD)", "Stock", "image"]));
		assert_eq!(mapping.column(Field::Name), Some(0));
		assert_eq!(mapping.column(Field::Sku), Some(1));
		assert_eq!(mapping.column(Field::Price), Some(2));
		assert_eq!(mapping.column(Field::Stock), Some(3));
		assert_eq!(mapping.column(Field::Image), Some(4));
		assert_eq!(mapping.column(Field::Description), None);

		// "desc" is contained in "description"
		let mapping = ColumnMapping::suggest(&headers(&["DESC"]));
		assert_eq!(mapping.column(Field::Description), Some(0));
	}

	#[test]
	fn first_header_keeps_the_field() {
		let mapping = ColumnMapping::suggest(&headers(&["name", "Product Name", "price"]));
		assert_eq!(mapping.column(Field::Name), Some(0));
		assert_eq!(mapping.field_for(1), None);
		assert_eq!(mapping.column(Field::Price), Some(2));
	}

	#[test]
	fn suggestion_never_shares_a_column() {
		let samples = [
			headers(&["name", "price", "sku", "stock", "category", "description", "image"]),
			headers(&["Name", "Name", "Price", "price", "", "ignore", "x"]),
			headers(&["e", "a", "i", "c", "s", "p", "n"]),
			headers(&["Stock Price Name", "sku image"]),
		];
		for headers in samples {
			let mapping = ColumnMapping::suggest(&headers);
			let columns = mapping.assignments().map(|(_, column)| column).collect::<Vec<_>>();
			assert_eq!(columns.len(), columns.iter().unique().count(), "{headers:?}");
		}
	}

	#[test]
	fn blank_header_is_taken_for_name() {
		let mapping = ColumnMapping::suggest(&headers(&["", "Cost", "Price"]));
		assert_eq!(mapping.column(Field::Name), Some(0));
		assert_eq!(mapping.column(Field::Price), Some(2));
		assert_eq!(mapping.field_for(1), None);
	}

	#[test]
	fn assigning_steals_the_column() {
		let mut mapping = ColumnMapping::suggest(&headers(&["Name", "Cost", "Notes"]));
		assert_eq!(mapping.column(Field::Name), Some(0));
		mapping.assign(Field::Description, 0);
		assert_eq!(mapping.column(Field::Name), None);
		assert_eq!(mapping.column(Field::Description), Some(0));
		assert_eq!(mapping.field_for(0), Some(Field::Description));
	}

	#[test]
	fn reassigning_frees_the_previous_column() {
		let mut mapping = ColumnMapping::default();
		mapping.assign(Field::Name, 0);
		mapping.assign(Field::Name, 2);
		assert_eq!(mapping.column(Field::Name), Some(2));
		assert_eq!(mapping.field_for(0), None);
		mapping.assign(Field::Sku, 0);
		assert_eq!(mapping.column(Field::Sku), Some(0));
		assert_eq!(mapping.column(Field::Name), Some(2));
	}

	#[test]
	fn clearing_and_ignoring() {
		let mut mapping = ColumnMapping::default();
		mapping.assign(Field::Name, 0);
		mapping.assign(Field::Price, 1);
		mapping.clear(Field::Name);
		assert_eq!(mapping.column(Field::Name), None);
		mapping.ignore_column(1);
		assert_eq!(mapping.assignments().count(), 0);
	}

	#[test]
	fn requires_name_and_price() {
		let err = ColumnMapping::default().apply(&grid(&[&["a"], &["b"]])).unwrap_err();
		assert_eq!(err, MappingError::MissingRequired(vec![Field::Name, Field::Price]));
		assert_eq!(err.to_string(), "Required fields missing: name, price");

		let mut mapping = ColumnMapping::default();
		mapping.assign(Field::Name, 0);
		assert_eq!(mapping.validate(), Err(MappingError::MissingRequired(vec![Field::Price])));
	}

	#[test]
	fn maps_the_documented_example() {
		let mut mapping = ColumnMapping::default();
		mapping.assign(Field::Name, 0);
		mapping.assign(Field::Price, 1);
		let records = mapping
			.apply(&grid(&[&["Name", "Cost"], &["Widget", "9.99"], &["Gadget", "abc"]]))
			.unwrap();
		assert_eq!(
			records,
			vec![
				MappedRecord::from([(Field::Name, "Widget"), (Field::Price, "9.99")]),
				MappedRecord::from([(Field::Name, "Gadget"), (Field::Price, "abc")]),
			]
		);
	}

	#[test]
	fn short_rows_skip_missing_cells() {
		let mut mapping = ColumnMapping::default();
		mapping.assign(Field::Name, 0);
		mapping.assign(Field::Price, 1);
		mapping.assign(Field::Sku, 3);
		let records = mapping.apply(&grid(&[&["n", "p", "x", "s"], &["Widget"]])).unwrap();
		assert_eq!(records, vec![MappedRecord::from([(Field::Name, "Widget")])]);
		assert_eq!(records[0].len(), 1);
	}

	#[test]
	fn numeric_fields_are_normalized() {
		let mut mapping = ColumnMapping::default();
		mapping.assign(Field::Name, 0);
		mapping.assign(Field::Price, 1);
		mapping.assign(Field::Stock, 2);
		mapping.assign(Field::Sku, 3);
		let records = mapping
			.apply(&grid(&[&["n", "p", "s", "k"], &["A", "10.50", "007", "0010"], &["B", "1e3", "n/a", "x"]]))
			.unwrap();
		assert_eq!(records[0].get(Field::Price), Some("10.5"));
		assert_eq!(records[0].get(Field::Stock), Some("7"));
		assert_eq!(records[0].get(Field::Sku), Some("0010"));
		assert_eq!(records[1].get(Field::Price), Some("1000"));
		assert_eq!(records[1].get(Field::Stock), Some("n/a"));
	}

	#[test]
	fn float_parsing_is_lenient() {
		assert_eq!(parse_float("9.99"), Some(9.99));
		assert_eq!(parse_float("  -2.5kg"), Some(-2.5));
		assert_eq!(parse_float(".5"), Some(0.5));
		assert_eq!(parse_float("12."), Some(12.0));
		assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
		assert_eq!(parse_float("$5"), None);
		assert_eq!(parse_float(""), None);
		assert_eq!(parse_float("abc"), None);
		assert_eq!(normalize_number("-0"), "0");
		assert_eq!(normalize_number("3.0"), "3");
		assert_eq!(normalize_number("$5"), "$5");
	}

	#[test]
	fn extreme_magnitudes_use_exponents() {
		assert_eq!(normalize_number("1e21"), "1e+21");
		assert_eq!(normalize_number("-1.5e22"), "-1.5e+22");
		assert_eq!(normalize_number("1e-7"), "1e-7");
		assert_eq!(normalize_number("1e20"), "100000000000000000000");
		assert_eq!(normalize_number("0.000001"), "0.000001");
	}

	#[test]
	fn preview_skips_the_header() {
		let data = grid(&[&["h"], &["1"], &["2"], &["3"], &["4"]]);
		assert_eq!(preview(&data, 3), &data[1..4]);
		let short = grid(&[&["h"], &["1"]]);
		assert_eq!(preview(&short, 3), &short[1..]);
		assert!(preview(&Grid::new(), 3).is_empty());
		assert_eq!(preview(&data, PREVIEW_ROWS).len(), 3);
	}
}
