use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, HtmlSelectElement};

pub trait InputExt {
	fn input_value(&self) -> Option<String>;
	fn select_value(&self) -> Option<String>;
	fn input_file(&self) -> Option<File>;
}

impl InputExt for Event {
	fn input_value(&self) -> Option<String> {
		let input = self.target()?.dyn_into::<HtmlInputElement>().ok()?;
		Some(input.value())
	}

	fn select_value(&self) -> Option<String> {
		let select = self.target()?.dyn_into::<HtmlSelectElement>().ok()?;
		Some(select.value())
	}

	fn input_file(&self) -> Option<File> {
		let input = self.target()?.dyn_into::<HtmlInputElement>().ok()?;
		first_file(input.files())
	}
}

pub fn dropped_file(event: &DragEvent) -> Option<File> {
	first_file(event.data_transfer()?.files())
}

fn first_file(files: Option<FileList>) -> Option<File> {
	files?.get(0)
}
