//! Dataset ingestion and export

pub mod frame;
pub mod ingest;
pub mod schema;

pub use frame::{export_records, records_to_dataframe, ExportError, ExportFormat};
pub use ingest::{load_dataset, parse_date, LoadError};
pub use schema::{RecordSchema, SchemaError};
