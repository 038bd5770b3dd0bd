//! Remove reads from a FASTQ stream whose identifiers appear in a blocklist.
//!
//! - Exact identifier match (`read1` and `read1/1` are different ids).
//! - Streaming, record-by-record; only the ID set is held in memory.
//! - Plain and `.gz` input (auto-detect), `.gz` output by extension.
//! - Malformed FASTQ aborts the run; nothing is skipped or repaired.
//! - Single-line FASTQ by default; wrapped records via `LineMode::Multi`.

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod ids;
pub mod options;
pub mod reader;
pub mod record;
pub mod writer;
mod util;

pub use crate::config::FilterConfig;
pub use crate::error::{FastqError, FilterError, FormatError, IoContext};
pub use crate::filter::{FilterStats, filter_records, remove_ids, run};
pub use crate::ids::IdSet;
pub use crate::options::{LineMode, ReaderOptions};
pub use crate::reader::{FastqReader, Source};
pub use crate::record::FastqRecord;
pub use crate::writer::{FastqWriter, FileSink};
