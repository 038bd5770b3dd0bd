//! Pull records from a reader, drop blocklisted ids, write the rest.

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::ids::IdSet;
use crate::options::ReaderOptions;
use crate::reader::FastqReader;
use crate::writer::FastqWriter;

use anyhow::{Context, Result};
use std::io::{self, BufRead, BufReader, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub records_read: u64,
    pub records_kept: u64,
    pub records_removed: u64,
}

/// Stream every record of `reader` whose id is not in `ids` to `writer`,
/// in input order. Stops at the first parse or write error.
pub fn filter_records<W: Write>(
    reader: FastqReader,
    ids: &IdSet,
    writer: &mut FastqWriter<W>,
) -> Result<FilterStats, FilterError> {
    let mut stats = FilterStats::default();
    for rec in reader {
        let rec = rec?;
        stats.records_read += 1;
        if ids.contains(&rec.id) {
            stats.records_removed += 1;
            continue;
        }
        writer
            .write_record(&rec)
            .map_err(|source| FilterError::Write {
                source,
                records_written: writer.records_written(),
            })?;
        stats.records_kept += 1;
    }
    Ok(stats)
}

/// Filter an arbitrary FASTQ stream into `output`, flushing it on success.
pub fn remove_ids<R, W>(
    input: R,
    ids: &IdSet,
    output: W,
    opts: ReaderOptions,
) -> Result<FilterStats, FilterError>
where
    R: BufRead + Send + 'static,
    W: Write,
{
    let reader = FastqReader::from_bufread(input, opts);
    let mut writer = FastqWriter::new(output);
    let stats = filter_records(reader, ids, &mut writer)?;
    let written = writer.records_written();
    writer.finish().map_err(|source| FilterError::Write {
        source,
        records_written: written,
    })?;
    Ok(stats)
}

/// Load the ID list, then filter the configured input into the configured
/// output. Files are closed when this returns, on success or error.
pub fn run(cfg: &FilterConfig) -> Result<FilterStats> {
    let ids = IdSet::from_path(&cfg.id_list)
        .with_context(|| format!("failed to load ID list {}", cfg.id_list.display()))?;
    log::info!(
        "loaded {} IDs to remove from {}",
        ids.len(),
        cfg.id_list.display()
    );

    let reader = match &cfg.input {
        Some(path) => FastqReader::from_path(path, cfg.reader.clone())
            .with_context(|| format!("failed to open FASTQ input {}", path.display()))?,
        None => FastqReader::from_bufread(BufReader::new(io::stdin()), cfg.reader.clone()),
    };

    let stats = match &cfg.output {
        Some(path) => {
            let mut writer = FastqWriter::create(path)
                .with_context(|| format!("failed to create FASTQ output {}", path.display()))?;
            let stats = filter_records(reader, &ids, &mut writer)?;
            writer
                .finish()
                .and_then(|sink| sink.finish())
                .with_context(|| format!("failed to finish FASTQ output {}", path.display()))?;
            stats
        }
        None => {
            let mut writer = FastqWriter::new(io::stdout().lock());
            let stats = filter_records(reader, &ids, &mut writer)?;
            writer
                .finish()
                .context("failed to flush FASTQ output to stdout")?;
            stats
        }
    };

    log::info!(
        "kept {} of {} records ({} removed)",
        stats.records_kept,
        stats.records_read,
        stats.records_removed
    );
    Ok(stats)
}
