use crate::error::{FastqError, FormatError, IoContext};
use crate::options::{LineMode, ReaderOptions};
use crate::record::FastqRecord;
use crate::util::open_maybe_gz;

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

/// Sync FASTQ reader (plain/.gz), streaming.
pub struct FastqReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    opts: ReaderOptions,
    line_num: u64,
    byte_pos: u64,
    record_num: u64,
    line: String,
    // Set after the first error; the stream is not resynchronised.
    failed: bool,
}

impl FastqReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: ReaderOptions) -> Result<Self, FastqError> {
        let path = path.as_ref();
        let rdr = open_maybe_gz(path).map_err(|e| FastqError::io_err(e, IoContext::START))?;
        log::debug!("reading FASTQ from {}", path.display());
        Ok(Self::with_source(Source::Path(path.to_path_buf()), rdr, opts))
    }

    /// Wrap an arbitrary `BufRead` (stdin, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, opts: ReaderOptions) -> Self {
        Self::with_source(Source::Reader, Box::new(reader), opts)
    }

    fn with_source(src: Source, rdr: Box<dyn BufRead + Send>, opts: ReaderOptions) -> Self {
        Self {
            src,
            rdr,
            opts,
            line_num: 0,
            byte_pos: 0,
            record_num: 0,
            line: String::with_capacity(256),
            failed: false,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Iterator-style `next` record. Yields `None` for good after an error.
    pub fn next(&mut self) -> Option<Result<FastqRecord, FastqError>> {
        if self.failed {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn read_line(&mut self) -> io::Result<usize> {
        self.line.clear();
        let n = self.rdr.read_line(&mut self.line)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if self.line.ends_with('\n') {
                self.line.pop();
            }
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(n)
    }

    /// Read the next line of the current record; EOF here is a format error.
    fn read_required_line(&mut self) -> Result<(), FastqError> {
        let n = self
            .read_line()
            .map_err(|e| FastqError::io_err(e, self.ctx()))?;
        if n == 0 {
            return Err(FastqError::fmt_err(FormatError::UnexpectedEof, self.ctx()));
        }
        Ok(())
    }

    fn read_one(&mut self) -> Result<Option<FastqRecord>, FastqError> {
        // seek first non-empty line
        loop {
            let n = self
                .read_line()
                .map_err(|e| FastqError::io_err(e, self.ctx()))?;
            if n == 0 {
                return Ok(None);
            }
            if !self.line.is_empty() {
                break;
            }
        }
        self.record_num += 1;

        let Some(title) = self.line.strip_prefix('@') else {
            let err = if self.line.starts_with('>') {
                FormatError::FastaHeaderDetected
            } else {
                FormatError::MissingHeader
            };
            return Err(FastqError::fmt_err(err, self.ctx()));
        };
        let title = title.to_string();

        let (seq, qual) = match self.opts.line_mode {
            LineMode::Single => self.read_single_line_body()?,
            LineMode::Multi => self.read_multi_line_body()?,
        };

        if qual.len() != seq.len() {
            return Err(FastqError::fmt_err(
                FormatError::LengthMismatch {
                    seq: seq.len(),
                    qual: qual.len(),
                },
                self.ctx(),
            ));
        }
        Ok(Some(FastqRecord::from_header(&title, seq, qual)))
    }

    fn read_single_line_body(&mut self) -> Result<(Vec<u8>, Vec<u8>), FastqError> {
        // sequence: exactly one line
        self.read_required_line()?;
        let seq = self.line.as_bytes().to_vec();

        // plus line; any text after '+' is discarded
        self.read_required_line()?;
        if !self.line.starts_with('+') {
            return Err(FastqError::fmt_err(FormatError::MissingPlus, self.ctx()));
        }

        // qual: exactly one line
        self.read_required_line()?;
        let qual = self.line.as_bytes().to_vec();
        Ok((seq, qual))
    }

    fn read_multi_line_body(&mut self) -> Result<(Vec<u8>, Vec<u8>), FastqError> {
        // Read sequence until '+' line
        let mut seq = Vec::<u8>::with_capacity(256);
        loop {
            self.read_required_line()?;
            if self.line.starts_with('+') {
                break;
            }
            if self.line.starts_with('@') && seq.is_empty() {
                return Err(FastqError::fmt_err(FormatError::MissingPlus, self.ctx()));
            }
            seq.extend_from_slice(self.line.as_bytes());
        }

        // Read quality until length matches seq
        let mut qual = Vec::<u8>::with_capacity(seq.len());
        while qual.len() < seq.len() {
            self.read_required_line()?;
            qual.extend_from_slice(self.line.as_bytes());
        }
        Ok((seq, qual))
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
            record_num: self.record_num,
        }
    }
}

impl Iterator for FastqReader {
    type Item = Result<FastqRecord, FastqError>;
    fn next(&mut self) -> Option<Self::Item> {
        FastqReader::next(self)
    }
}
