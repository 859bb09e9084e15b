pub mod toml_loader;

pub use toml_loader::{load_import_plan, parse_import_plan};
