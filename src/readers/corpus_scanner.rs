use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ProcessingError, Result};

/// Walks the corpus root and yields every regular file underneath it.
///
/// File naming and directory nesting convey no semantics; the scanner visits
/// entries in a deterministic order (file-name sorted, depth first) so that
/// runs over the same tree are reproducible.
pub struct CorpusScanner;

impl CorpusScanner {
    pub fn new() -> Self {
        Self
    }

    /// Start a lazy scan of `root`. A missing root is fatal; per-entry
    /// failures are surfaced as recoverable `Access` errors from the
    /// iterator so the caller can skip and warn.
    pub fn scan(&self, root: &Path) -> Result<CorpusIter> {
        if !root.is_dir() {
            return Err(ProcessingError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        Ok(CorpusIter {
            inner: WalkDir::new(root).sort_by_file_name().into_iter(),
        })
    }
}

impl Default for CorpusScanner {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CorpusIter {
    inner: walkdir::IntoIter,
}

impl Iterator for CorpusIter {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        return Some(Ok(entry.into_path()));
                    }
                    // Directories are descended into, not yielded
                }
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_default();
                    let source = err.into_io_error().unwrap_or_else(|| {
                        std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected")
                    });
                    return Some(Err(ProcessingError::Access { path, source }));
                }
            }
        }
    }
}
