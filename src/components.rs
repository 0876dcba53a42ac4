mod auth_switch;
pub use auth_switch::*;
mod file_upload;
pub use file_upload::*;
mod import_progress;
pub use import_progress::*;
mod layout;
pub use layout::*;
mod mapping_table;
pub use mapping_table::*;
mod pagination;
pub use pagination::*;
