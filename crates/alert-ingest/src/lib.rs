//! Alert Ingest
//!
//! Reads the JSON alert document from disk and parses it into alert records.
//! Malformed input is fatal to the run; the pipeline never sees partial data.

mod error;
mod loader;

pub use error::IngestError;
pub use loader::{load_alerts, parse_alerts};
