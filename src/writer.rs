use crate::record::FastqRecord;
use crate::util::{BUF_CAPACITY, has_gz_extension};

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered FASTQ sink.
pub struct FastqWriter<W: Write> {
    out: BufWriter<W>,
    written: u64,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            out: BufWriter::with_capacity(BUF_CAPACITY, inner),
            written: 0,
        }
    }

    pub fn write_record(&mut self, rec: &FastqRecord) -> io::Result<()> {
        rec.write_to(&mut self.out)?;
        self.written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.written
    }

    /// Flush buffered records and hand back the underlying sink.
    pub fn finish(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

/// File destination, gzip-compressed when the path ends in `.gz`.
pub enum FileSink {
    Plain(File),
    Gzip(GzEncoder<File>),
}

impl FileSink {
    pub fn create(path: &Path) -> io::Result<Self> {
        let f = File::create(path)?;
        if has_gz_extension(path) {
            Ok(Self::Gzip(GzEncoder::new(f, Compression::default())))
        } else {
            Ok(Self::Plain(f))
        }
    }

    /// Flush, writing the gzip trailer for compressed sinks.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Plain(mut f) => f.flush(),
            Self::Gzip(enc) => enc.finish().map(|_| ()),
        }
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(f) => f.write(buf),
            Self::Gzip(enc) => enc.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(f) => f.flush(),
            Self::Gzip(enc) => enc.flush(),
        }
    }
}

impl FastqWriter<FileSink> {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        log::debug!("writing FASTQ to {}", path.display());
        Ok(Self::new(FileSink::create(path)?))
    }
}
