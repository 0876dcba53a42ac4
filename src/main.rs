#[cfg(target_family = "wasm")]
fn main() {
	import_genie::logging::wasm::init(import_genie::logging::wasm::Config::default().prefer_target());
	yew::Renderer::<import_genie::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	import_genie::logging::native::init(log::LevelFilter::Info);
	log::error!(target: "main", "import-genie runs in the browser; build it for wasm32-unknown-unknown and serve it with trunk");
}
