//! Longest-prefix-first resolution of identifiers to source files.
//!
//! For `App\Models\User` the resolver considers the prefixes `App\Models\`
//! and then `App\`, each paired with the rest of the identifier (`User`,
//! then `Models\User`). For every prefix that is registered, its base
//! directories are tried in order. The first candidate that exists and
//! loads is the result.
//!
//! ```text
//! identifier    App\Models\User
//!   ├── App\Models\  →  /src/models/User.php, /vendor/models/User.php
//!   └── App\         →  /src/app/Models/User.php
//! ```
//!
//! Failure to resolve is a normal outcome and is reported as `None`; the
//! identifier may belong to another resolver in a [`ResolverChain`].

use std::path::PathBuf;

use crate::chain::{Resolve, ResolverChain};
use crate::config::ResolverConfig;
use crate::loader::{FsLoader, SourceLoader};
use crate::normalize::{normalize_base_dir, normalize_prefix};
use crate::table::PrefixTable;

/// One probe the resolver makes: the matched prefix and the file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Normalized prefix that matched, e.g. `App\Models\`.
    pub prefix: String,
    /// Base directory joined with the relative file name.
    pub path: PathBuf,
}

/// Resolves identifiers against registered namespace prefixes.
pub struct PrefixResolver<L = FsLoader> {
    config: ResolverConfig,
    table: PrefixTable,
    loader: L,
}

impl PrefixResolver<FsLoader> {
    /// Resolver with the default configuration reading from disk.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_loader(config, FsLoader::new())
    }
}

impl Default for PrefixResolver<FsLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SourceLoader> PrefixResolver<L> {
    pub fn with_loader(config: ResolverConfig, loader: L) -> Self {
        PrefixResolver {
            config,
            table: PrefixTable::new(),
            loader,
        }
    }

    /// Register `base_dir` as the last fallback for `prefix`.
    ///
    /// Both arguments are normalized first. Registering the same pair twice
    /// keeps both entries.
    pub fn register(&mut self, prefix: &str, base_dir: &str) {
        let (prefix, base_dir) = self.normalize(prefix, base_dir);
        tracing::debug!(%prefix, %base_dir, "registered base directory");
        self.table.push(prefix, base_dir);
    }

    /// Register `base_dir` ahead of the directories already known for `prefix`.
    pub fn register_prepend(&mut self, prefix: &str, base_dir: &str) {
        let (prefix, base_dir) = self.normalize(prefix, base_dir);
        tracing::debug!(%prefix, %base_dir, "registered base directory (prepended)");
        self.table.push_front(prefix, base_dir);
    }

    /// Forget every base directory registered for `prefix`.
    pub fn unregister(&mut self, prefix: &str) -> Option<Vec<String>> {
        let prefix = normalize_prefix(prefix, self.config.delimiter);
        self.table.remove(&prefix)
    }

    /// Base directories for `prefix`, in lookup order.
    pub fn base_dirs(&self, prefix: &str) -> &[String] {
        let prefix = normalize_prefix(prefix, self.config.delimiter);
        self.table.base_dirs(&prefix).unwrap_or_default()
    }

    /// Every path [`resolve`](Self::resolve) would probe, in order.
    ///
    /// Does not touch the file system. An identifier without a delimiter
    /// yields no candidates.
    pub fn candidates(&self, identifier: &str) -> Vec<Candidate> {
        let delimiter = self.config.delimiter;
        let mut candidates = Vec::new();
        let mut end = identifier.len();

        while let Some(pos) = identifier[..end].rfind(delimiter) {
            let split = pos + delimiter.len_utf8();
            let prefix = &identifier[..split];

            if let Some(dirs) = self.table.base_dirs(prefix) {
                let file_name = self.config.file_name_for(&identifier[split..]);
                candidates.extend(dirs.iter().map(|dir| Candidate {
                    prefix: prefix.to_string(),
                    path: PathBuf::from(format!("{dir}{file_name}")),
                }));
            }

            // Drop exactly one delimiter: after `A\\B` comes prefix `A\`
            // with relative name `\B`, so consecutive delimiters yield `//`.
            end = pos;
        }

        candidates
    }

    /// Resolve `identifier` and load the first candidate that exists.
    ///
    /// Returns the loaded path, or `None` when no candidate exists or every
    /// existing candidate failed to load.
    pub fn resolve(&mut self, identifier: &str) -> Option<PathBuf> {
        for Candidate { prefix, path } in self.candidates(identifier) {
            if !self.loader.exists(&path) {
                tracing::trace!(identifier, %prefix, path = %path.display(), "candidate missing");
                continue;
            }

            match self.loader.load(&path) {
                Ok(()) => {
                    tracing::debug!(identifier, %prefix, path = %path.display(), "resolved");
                    return Some(path);
                }
                Err(err) => {
                    tracing::debug!(identifier, %prefix, error = %err, "candidate failed to load");
                }
            }
        }

        tracing::trace!(identifier, "not resolved");
        None
    }

    /// Append this resolver to `chain`, returning its position.
    pub fn install(self, chain: &mut ResolverChain) -> usize
    where
        L: 'static,
    {
        chain.install(self)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn table(&self) -> &PrefixTable {
        &self.table
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    pub fn into_loader(self) -> L {
        self.loader
    }

    fn normalize(&self, prefix: &str, base_dir: &str) -> (String, String) {
        (
            normalize_prefix(prefix, self.config.delimiter),
            normalize_base_dir(base_dir, self.config.separator),
        )
    }
}

impl<L: SourceLoader> Resolve for PrefixResolver<L> {
    fn resolve(&mut self, identifier: &str) -> Option<PathBuf> {
        PrefixResolver::resolve(self, identifier)
    }
}
