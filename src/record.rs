use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    /// Split a header line (without the leading '@') into id and description.
    pub(crate) fn from_header(title: &str, seq: Vec<u8>, qual: Vec<u8>) -> Self {
        let mut parts = title.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim_end())
            .filter(|s| !s.trim_start().is_empty())
            .map(str::to_string);
        Self {
            id,
            desc,
            seq,
            qual,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Four-line FASTQ with a bare '+' separator.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(b"@")?;
        w.write_all(self.id.as_bytes())?;
        if let Some(desc) = self.desc.as_deref().filter(|d| !d.is_empty()) {
            w.write_all(b" ")?;
            w.write_all(desc.as_bytes())?;
        }
        w.write_all(b"\n")?;
        w.write_all(&self.seq)?;
        w.write_all(b"\n+\n")?;
        w.write_all(&self.qual)?;
        w.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rec: &FastqRecord) -> String {
        let mut out = Vec::new();
        rec.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_split_at_first_whitespace() {
        let rec = FastqRecord::from_header("r1/1 1:N:0\tlane=2", b"A".to_vec(), b"#".to_vec());
        assert_eq!(rec.id, "r1/1");
        assert_eq!(rec.desc.as_deref(), Some("1:N:0\tlane=2"));

        let bare = FastqRecord::from_header("r2", Vec::new(), Vec::new());
        assert_eq!(bare.id, "r2");
        assert_eq!(bare.desc, None);

        let trailing = FastqRecord::from_header("r3   ", Vec::new(), Vec::new());
        assert_eq!(trailing.id, "r3");
        assert_eq!(trailing.desc, None);

        let spaced = FastqRecord::from_header("r4  two\tfields \t", Vec::new(), Vec::new());
        assert_eq!(spaced.desc.as_deref(), Some(" two\tfields"));
    }

    #[test]
    fn writes_description_after_single_space() {
        let rec = FastqRecord {
            id: "read7".into(),
            desc: Some("sample=x".into()),
            seq: b"ACGT".to_vec(),
            qual: b"IIII".to_vec(),
        };
        assert_eq!(render(&rec), "@read7 sample=x\nACGT\n+\nIIII\n");
    }

    #[test]
    fn empty_description_is_not_emitted() {
        let rec = FastqRecord {
            id: "read8".into(),
            desc: Some(String::new()),
            seq: b"AC".to_vec(),
            qual: b"!!".to_vec(),
        };
        assert_eq!(render(&rec), "@read8\nAC\n+\n!!\n");
    }
}
