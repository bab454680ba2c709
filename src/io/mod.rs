pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod sniff;
pub mod table;

// Re-export commonly used types
pub use csv_reader::{load_table, read_table};
pub use csv_writer::{encode_table, write_table};
pub use error::IoError;
pub use sniff::detect_delimiter;
pub use table::{ColumnKind, Table};
