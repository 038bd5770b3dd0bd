use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

pub(crate) const BUF_CAPACITY: usize = 256 * 1024;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn has_gz_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open a text source, decompressing `.gz` by extension or magic bytes.
pub fn open_maybe_gz(path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
    let mut f = File::open(path)?;
    let is_gz = has_gz_extension(path) || looks_like_gzip(&mut f).unwrap_or(false);

    if is_gz {
        #[cfg(feature = "gzip")]
        {
            let dec = MultiGzDecoder::new(f);
            return Ok(Box::new(BufReader::with_capacity(BUF_CAPACITY, dec)));
        }
        #[cfg(not(feature = "gzip"))]
        {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "gzip input requires the `gzip` feature",
            ));
        }
    }
    open_plain(f)
}

#[cfg(not(feature = "mmap"))]
fn open_plain(f: File) -> io::Result<Box<dyn BufRead + Send>> {
    Ok(Box::new(BufReader::with_capacity(BUF_CAPACITY, f)))
}

#[cfg(feature = "mmap")]
fn open_plain(f: File) -> io::Result<Box<dyn BufRead + Send>> {
    use memmap2::Mmap;
    use std::io::Cursor;
    if f.metadata()?.len() == 0 {
        // zero-length files cannot be mapped
        return Ok(Box::new(io::empty()));
    }
    // Own the Mmap inside Cursor to avoid self-ref problems
    let mmap = unsafe { Mmap::map(&f) }?;
    Ok(Box::new(BufReader::with_capacity(
        2 * BUF_CAPACITY,
        Cursor::new(mmap),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn gzip_magic_detected_without_consuming() {
        let mut c = Cursor::new(vec![0x1F, 0x8B, 0x08, 0x00]);
        assert!(looks_like_gzip(&mut c).unwrap());
        assert_eq!(c.position(), 0);

        let mut plain = Cursor::new(b"@r1\n".to_vec());
        assert!(!looks_like_gzip(&mut plain).unwrap());
    }
}
