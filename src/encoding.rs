//! Dictionary file loading
//!
//! Reads a whole dictionary into memory and decodes it strictly as UTF-8.

use crate::error::DictError;
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Read a dictionary file and decode it as UTF-8
///
/// A leading UTF-8 byte order mark is skipped. A UTF-16 byte order mark or any
/// malformed byte sequence is an error; nothing is replaced lossily.
pub fn read_dictionary(path: &Path) -> Result<String, DictError> {
    let bytes = fs::read(path).map_err(|source| DictError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read {} bytes from {:?}", bytes.len(), path);

    let body = strip_bom(path, &bytes)?;

    decode_utf8(body).ok_or_else(|| DictError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Skip a UTF-8 BOM, reject BOMs of other encodings
fn strip_bom<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a [u8], DictError> {
    match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) if encoding == encoding_rs::UTF_8 => Ok(&bytes[bom_len..]),
        Some((encoding, _)) => Err(DictError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        }),
        None => Ok(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    encoding_rs::UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello").unwrap();
        writeln!(file, "señor").unwrap();

        let text = read_dictionary(file.path()).unwrap();
        assert_eq!(text, "hello\nseñor\n");
    }

    #[test]
    fn test_utf8_bom_is_skipped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xEF, 0xBB, 0xBF]).unwrap();
        file.write_all(b"apple\n").unwrap();

        let text = read_dictionary(file.path()).unwrap();
        assert_eq!(text, "apple\n");
    }

    #[test]
    fn test_utf16_bom_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'a', 0x00]).unwrap();

        let err = read_dictionary(file.path()).unwrap_err();
        assert!(matches!(err, DictError::UnsupportedEncoding { encoding: "UTF-16LE", .. }));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        // Latin-1 "señor"
        file.write_all(b"se\xF1or\n").unwrap();

        let err = read_dictionary(file.path()).unwrap_err();
        assert!(matches!(err, DictError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_dictionary(&path).unwrap_err();
        match err {
            DictError::Read { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
