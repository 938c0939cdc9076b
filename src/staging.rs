//! Scoped staging of image bytes for external recognizers.
//!
//! Some engines only consume files on disk; staging puts the in-memory image
//! bytes into a uniquely named temp file for the duration of one call. The
//! file is deleted when the value drops, on every exit path.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::instrument;

use crate::Error;

/// A temporary file holding staged bytes, removed on drop.
#[derive(Debug)]
pub struct StagedFile {
    file: NamedTempFile,
}

impl StagedFile {
    /// Writes `bytes` to a fresh temp file carrying the given suffix
    /// (e.g. `".png"`), so suffix-sniffing consumers see the right kind.
    #[instrument(level = "debug", skip(bytes))]
    pub fn from_bytes(suffix: &str, bytes: &[u8]) -> Result<Self, Error> {
        let mut file = tempfile::Builder::new()
            .prefix("charlayout-")
            .suffix(suffix)
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;
        log::debug!("staged {} bytes at {}", bytes.len(), file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(fs::read(self.file.path())?)
    }

    /// Copies the staged content to a durable location, creating parent
    /// directories as needed. The staged file itself stays scoped.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(self.file.path(), path)?;
        Ok(())
    }
}
