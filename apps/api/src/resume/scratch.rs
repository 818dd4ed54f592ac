use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tempfile::TempPath;
use tokio_util::io::ReaderStream;
use tracing::{debug, warn};

/// A uniquely named file in scratch space, deleted when dropped.
///
/// Deletion failures are logged and otherwise ignored: by the time the guard
/// drops, the response has already been decided.
pub struct ScratchFile {
    path: Option<TempPath>,
}

impl ScratchFile {
    /// Writes `contents` to a fresh `resume-*.txt` file under `dir`.
    pub async fn create(dir: &Path, contents: &'static [u8]) -> io::Result<Self> {
        let dir = dir.to_path_buf();
        let path = tokio::task::spawn_blocking(move || -> io::Result<TempPath> {
            let mut file = tempfile::Builder::new()
                .prefix("resume-")
                .suffix(".txt")
                .tempfile_in(&dir)?;
            file.write_all(contents)?;
            file.flush()?;
            Ok(file.into_temp_path())
        })
        .await
        .map_err(io::Error::other)??;

        debug!("Created scratch file {}", path.display());
        Ok(Self { path: Some(path) })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Opens the file as a byte stream. The stream owns the guard, so the
    /// file is removed once the stream finishes, fails or is dropped.
    pub async fn into_stream(self) -> io::Result<impl Stream<Item = io::Result<Bytes>>> {
        let path: PathBuf = self
            .path()
            .map(Path::to_path_buf)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "scratch file already removed"))?;
        let file = tokio::fs::File::open(&path).await?;

        let guard = self;
        Ok(ReaderStream::new(file).map(move |chunk| {
            let _keep_alive = &guard;
            if let Err(e) = &chunk {
                warn!("Failed streaming {}: {e}", path.display());
            }
            chunk
        }))
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            let shown = path.display().to_string();
            match path.close() {
                Ok(()) => debug!("Removed scratch file {shown}"),
                Err(e) => warn!("Failed to remove scratch file {shown}: {e}"),
            }
        }
    }
}
