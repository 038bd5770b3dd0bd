use std::fmt;
use std::io;
use thiserror::Error;

/// Where the reader was when an error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
    /// 1-based index of the record being parsed.
    pub record_num: u64,
}

impl IoContext {
    pub(crate) const START: IoContext = IoContext {
        byte_pos: 0,
        line_num: 0,
        record_num: 0,
    };
}

impl fmt::Display for IoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {}, line {} (byte {})",
            self.record_num, self.line_num, self.byte_pos
        )
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected header '@' at start of record")]
    MissingHeader,
    #[error("found FASTA header '>' where FASTQ '@' expected")]
    FastaHeaderDetected,
    #[error("missing '+' separator line")]
    MissingPlus,
    #[error("unexpected EOF inside record")]
    UnexpectedEof,
    #[error("quality length ({qual}) does not match sequence length ({seq})")]
    LengthMismatch { seq: usize, qual: usize },
}

#[derive(Debug, Error)]
pub enum FastqError {
    #[error("I/O error at {ctx}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("format error at {ctx}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
}

impl FastqError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }

    pub fn context(&self) -> IoContext {
        match self {
            Self::Io { ctx, .. } | Self::Format { ctx, .. } => *ctx,
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

/// Failures of the whole remove-ids pipeline.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to read ID list at line {line_num}: {source}")]
    IdList {
        #[source]
        source: io::Error,
        line_num: u64,
    },
    #[error(transparent)]
    Read(#[from] FastqError),
    #[error("failed to write FASTQ output after {records_written} records: {source}")]
    Write {
        #[source]
        source: io::Error,
        records_written: u64,
    },
}
