// file_io/mod.rs

use crate::errors::Result;
use bzip2::read::BzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Opens `path` for reading, decompressing it on the fly when it ends in `.bz2`.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);
    match path.extension().and_then(|s| s.to_str()) {
        Some("bz2") => {
            debug!(path = %path.display(), "reading bzip2-compressed input");
            Ok(Box::new(BzDecoder::new(file)))
        }
        _ => Ok(Box::new(file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzip2::write::BzEncoder;
    use bzip2::Compression;
    use std::io::Write;

    #[test]
    fn test_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.json");
        std::fs::write(&path, b"{\"a\": 1}").unwrap();

        let mut contents = String::new();
        open_file(&path).unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "{\"a\": 1}");
    }

    #[test]
    fn test_bz2_file_is_decompressed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json.bz2");
        let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"{\"a\": \"x\"}").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let mut contents = String::new();
        open_file(&path).unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "{\"a\": \"x\"}");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_file(dir.path().join("nope.json")).err().unwrap();
        assert!(matches!(err, crate::errors::InvertError::Io(_)));
    }
}
