pub mod config;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod invert;
pub mod keys;
pub mod loader;

pub use errors::{InvertError, Result};
pub use export::{write_csv, write_csv_rows, write_json};
pub use file_io::open_file;
pub use invert::{invert, invert_by, invert_by_fn, invert_fn, Inverted, Pipe};
pub use keys::{invert_json, invert_json_last_wins, to_property_key};
pub use loader::{load_mapping, read_mapping, InputFormat};
