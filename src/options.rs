/// How sequence/quality lines are laid out in FASTQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Sequence and quality occupy exactly one line each.
    #[default]
    Single,
    /// Sequence/quality may be wrapped over several lines.
    Multi,
}

#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    pub line_mode: LineMode,
}

impl ReaderOptions {
    pub fn with_line_mode(line_mode: LineMode) -> Self {
        Self { line_mode }
    }
}
