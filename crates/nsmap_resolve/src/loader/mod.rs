//! Loading resolved source files.
//!
//! The resolver decides *which* path an identifier maps to; a
//! [`SourceLoader`] decides what loading that path means. Any load failure
//! makes the resolver move on to the next candidate.

use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Why a candidate file could not be loaded.
///
/// Never surfaced by resolution itself; the resolver logs it and keeps
/// searching.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("loader rejected `{}`: {reason}", path.display())]
    Rejected { path: PathBuf, reason: String },
}

/// Capability to probe and load candidate files.
pub trait SourceLoader {
    /// Whether a candidate is worth loading.
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Load a candidate that [`exists`](Self::exists) reported present.
    fn load(&mut self, path: &Path) -> Result<(), LoadError>;
}

/// Loader that reads candidates from disk and keeps their raw bytes.
///
/// Contents are not decoded; sources in any encoding load.
#[derive(Debug, Default)]
pub struct FsLoader {
    sources: FxHashMap<PathBuf, Vec<u8>>,
}

impl FsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a previously loaded file.
    pub fn source(&self, path: &Path) -> Option<&[u8]> {
        self.sources.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Paths loaded so far, sorted.
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.sources.keys().map(PathBuf::as_path).collect();
        paths.sort_unstable();
        paths
    }
}

impl SourceLoader for FsLoader {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        let content = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.sources.insert(path.to_path_buf(), content);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
