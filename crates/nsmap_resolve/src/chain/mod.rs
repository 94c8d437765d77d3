//! Ordered chain of resolvers.
//!
//! The embedding application owns a [`ResolverChain`] and installs resolvers
//! into it. When an identifier is needed, each resolver is asked in
//! installation order until one produces a path. Identifiers resolved once
//! are remembered, so a resolver is consulted at most once per identifier
//! that it successfully loads.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

/// Anything that can turn an identifier into a loaded file path.
///
/// `None` means "not mine"; the chain moves on to the next resolver.
pub trait Resolve {
    fn resolve(&mut self, identifier: &str) -> Option<PathBuf>;
}

impl<F> Resolve for F
where
    F: FnMut(&str) -> Option<PathBuf>,
{
    fn resolve(&mut self, identifier: &str) -> Option<PathBuf> {
        self(identifier)
    }
}

/// Resolvers consulted in installation order.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolve>>,
    loaded: FxHashMap<String, PathBuf>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver and return its position in the chain.
    pub fn install(&mut self, resolver: impl Resolve + 'static) -> usize {
        self.resolvers.push(Box::new(resolver));
        let position = self.resolvers.len() - 1;
        tracing::debug!(position, "installed resolver");
        position
    }

    /// Resolve `identifier` with the first resolver that can.
    ///
    /// An identifier that was resolved before returns its remembered path
    /// without consulting any resolver.
    pub fn resolve(&mut self, identifier: &str) -> Option<PathBuf> {
        if let Some(path) = self.loaded.get(identifier) {
            tracing::trace!(identifier, "already loaded");
            return Some(path.clone());
        }

        for (position, resolver) in self.resolvers.iter_mut().enumerate() {
            if let Some(path) = resolver.resolve(identifier) {
                tracing::debug!(identifier, position, path = %path.display(), "chain resolved");
                self.loaded.insert(identifier.to_string(), path.clone());
                return Some(path);
            }
        }

        tracing::debug!(identifier, resolvers = self.resolvers.len(), "no resolver matched");
        None
    }

    /// Path an identifier was loaded from, if it has been resolved.
    pub fn loaded(&self, identifier: &str) -> Option<&Path> {
        self.loaded.get(identifier).map(PathBuf::as_path)
    }

    /// Number of installed resolvers.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}
