//! Batch name table report engine.
//!
//! Turns a sequence of discovered fonts into a deterministic,
//! human-readable report of their name tables, continuing past
//! per-font failures.

pub mod batch;
pub mod error;
pub mod filter;
pub mod format;
pub mod record;
pub mod wrap;

pub use batch::{BatchOutcome, BatchStatus, NameSource, run};
pub use error::{Error, Result};
pub use filter::{MINIMAL_NAME_IDS, admits};
pub use format::{DEFAULT_WIDTH, FontNames, ReportOptions, format_names};
pub use record::{NameEntry, name_id_description};
pub use wrap::{TRUNCATION_MARKER, wrap};
