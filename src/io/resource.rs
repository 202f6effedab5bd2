use std::fs;
use std::path::Path;

use crate::error::Error;

/// Reads a model table file into memory.
///
/// Only IO failures are reported here; the bytes are checked by the parser.
pub fn read_model_file(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|e| Error::ResourceMissing {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");

        match read_model_file(&path) {
            Err(Error::ResourceMissing { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ResourceMissing, got {other:?}"),
        }
    }

    #[test]
    fn existing_file_is_returned_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(read_model_file(&path).unwrap(), b"{}");
    }

    #[test]
    fn invalid_utf8_is_still_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        fs::write(&path, b"{\"m\": \xff}").unwrap();

        assert_eq!(read_model_file(&path).unwrap().len(), 8);
    }
}
