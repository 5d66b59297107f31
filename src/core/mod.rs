//! Output-side building blocks.
//!
//! - [`models`]: [`OutputConfig`]
//! - [`stats`]: [`ParseStats`], counters from a parse
//! - [`output`]: JSON, JSONL and CSV writers

pub mod models;
pub mod output;
pub mod stats;

pub use models::OutputConfig;
pub use stats::ParseStats;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
