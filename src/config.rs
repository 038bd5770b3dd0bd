use crate::options::ReaderOptions;
use std::path::{Path, PathBuf};

/// Everything one filtering run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Text file of identifiers to remove, one per line.
    pub id_list: PathBuf,
    /// FASTQ input; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// FASTQ output; `None` writes stdout.
    pub output: Option<PathBuf>,
    pub reader: ReaderOptions,
}

impl FilterConfig {
    pub fn new<P: Into<PathBuf>>(id_list: P) -> Self {
        Self {
            id_list: id_list.into(),
            input: None,
            output: None,
            reader: ReaderOptions::default(),
        }
    }

    pub fn input<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input = stdio_or_path(path.into());
        self
    }

    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = stdio_or_path(path.into());
        self
    }

    pub fn reader(mut self, opts: ReaderOptions) -> Self {
        self.reader = opts;
        self
    }
}

/// `-` names the standard stream.
fn stdio_or_path(path: PathBuf) -> Option<PathBuf> {
    if path.as_path() == Path::new("-") {
        None
    } else {
        Some(path)
    }
}
