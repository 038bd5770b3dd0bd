use crate::error::FilterError;
use crate::util::open_maybe_gz;

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

/// Read identifiers to exclude, matched exactly against FASTQ record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: HashSet<String>,
}

impl IdSet {
    /// One identifier per line (`\n`, `\r\n` or bare `\r` endings);
    /// surrounding whitespace is trimmed and duplicates collapse. A blank line yields the empty identifier, which
    /// only a bare `@` header would match.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, FilterError> {
        let mut ids = HashSet::new();
        let mut line = String::new();
        let mut line_num = 0u64;
        loop {
            line.clear();
            let n = reader
                .read_line(&mut line)
                .map_err(|source| FilterError::IdList {
                    source,
                    line_num: line_num + 1,
                })?;
            if n == 0 {
                break;
            }
            let text = line.strip_suffix('\n').unwrap_or(&line);
            let text = text.strip_suffix('\r').unwrap_or(text);
            for id in text.split('\r') {
                line_num += 1;
                ids.insert(id.trim().to_string());
            }
        }

        let set = Self { ids };
        if set.contains("") {
            log::warn!("ID list contains a blank line, kept as an empty identifier");
        }
        log::debug!("loaded {} IDs from {line_num} lines", set.len());
        Ok(set)
    }

    /// Load from a plain or gzip-compressed text file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let rdr = open_maybe_gz(path)
            .map_err(|source| FilterError::IdList { source, line_num: 0 })?;
        log::debug!("reading ID list from {}", path.display());
        Self::from_reader(rdr)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl FromIterator<String> for IdSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for IdSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
