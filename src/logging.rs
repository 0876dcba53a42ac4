pub mod wasm {
	use log::{Level, LevelFilter, Log, Metadata, Record};

	#[derive(Debug, Clone, Copy)]
	pub struct Config {
		pub level: LevelFilter,
		pub prefer_target: bool,
	}

	impl Default for Config {
		fn default() -> Self {
			Self {
				level: LevelFilter::Debug,
				prefer_target: false,
			}
		}
	}

	impl Config {
		pub fn with_level(mut self, level: LevelFilter) -> Self {
			self.level = level;
			self
		}

		/// Label records with their `target:` instead of the module path.
		pub fn prefer_target(mut self) -> Self {
			self.prefer_target = true;
			self
		}
	}

	struct ConsoleLogger(Config);

	impl ConsoleLogger {
		fn origin<'a>(&self, record: &Record<'a>) -> &'a str {
			match (self.0.prefer_target, record.module_path_static()) {
				(false, Some(module)) => module,
				_ => record.target(),
			}
		}
	}

	impl Log for ConsoleLogger {
		fn enabled(&self, metadata: &Metadata) -> bool {
			metadata.level() <= self.0.level
		}

		fn log(&self, record: &Record) {
			if !self.enabled(record.metadata()) {
				return;
			}
			let message = format!("[{}] {}", self.origin(record), record.args());
			let message = wasm_bindgen::JsValue::from_str(&message);
			match record.level() {
				Level::Error => web_sys::console::error_1(&message),
				Level::Warn => web_sys::console::warn_1(&message),
				Level::Info => web_sys::console::info_1(&message),
				Level::Debug => web_sys::console::log_1(&message),
				Level::Trace => web_sys::console::debug_1(&message),
			}
		}

		fn flush(&self) {}
	}

	pub fn init(config: Config) {
		let level = config.level;
		match log::set_boxed_logger(Box::new(ConsoleLogger(config))) {
			Ok(()) => log::set_max_level(level),
			Err(err) => web_sys::console::warn_1(&format!("logger already installed: {err}").into()),
		}
	}
}

pub mod native {
	use simplelog::{ConfigBuilder, LevelFilter, SimpleLogger};

	/// Records on stderr with their target, for the host binary and tooling.
	pub fn init(level: LevelFilter) {
		let config = ConfigBuilder::new().set_target_level(LevelFilter::Error).build();
		if let Err(err) = SimpleLogger::init(level, config) {
			eprintln!("logger already installed: {err}");
		}
	}
}
