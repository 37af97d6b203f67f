// ── File-backed slot storage ──
//
// One JSON file per slot under a data directory. Writes go to a sibling
// temp file and are renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SlotStorage, validate_key};
use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the data directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_err(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.into(),
            source,
        }
    }
}

impl SlotStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| Self::io_err(key, e))?;

        let path = self.slot_path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value).map_err(|e| Self::io_err(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| Self::io_err(key, e))?;

        debug!(slot = key, path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_err(key, e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("not-yet-created"));
        assert!(storage.get("mx-ix-locations").unwrap().is_none());
    }

    #[test]
    fn write_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("data"));

        storage.set("mx-ix-services", "[]").unwrap();
        assert!(storage.slot_path("mx-ix-services").exists());
        assert_eq!(
            storage.get("mx-ix-services").unwrap().as_deref(),
            Some("[]")
        );

        storage.set("mx-ix-services", "[{}]").unwrap();
        assert_eq!(
            storage.get("mx-ix-services").unwrap().as_deref(),
            Some("[{}]")
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("mx-ix-locations", "[]").unwrap();
        storage.remove("mx-ix-locations").unwrap();
        storage.remove("mx-ix-locations").unwrap();
        assert!(storage.get("mx-ix-locations").unwrap().is_none());
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::InvalidKey { .. })
        ));
    }
}
