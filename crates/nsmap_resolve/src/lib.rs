//! Namespace-prefix resolution.
//!
//! Maps a fully-qualified identifier such as `App\Models\User` to a source
//! file by matching registered namespace prefixes against base directories.
//! The longest registered prefix wins; within a prefix, base directories are
//! tried in registration order.
//!
//! # Architecture
//!
//! ```text
//! register(prefix, base_dir)
//!   └── normalize ──→ PrefixTable { "App\Models\" → ["/src/models/", ...] }
//!
//! resolve("App\Models\User")
//!   ├── candidates: "App\Models\" + "User", then "App\" + "Models\User"
//!   └── SourceLoader::exists → SourceLoader::load (first success wins)
//!
//! ResolverChain
//!   └── [PrefixResolver, closure, ...] consulted in installation order
//! ```
//!
//! Path resolution and loading are separate concerns: the resolver only
//! computes and probes paths, and the [`SourceLoader`] decides what loading
//! a file means. [`FsLoader`] reads the file into memory.

mod chain;
mod config;
mod loader;
mod normalize;
mod resolver;
mod table;

pub use chain::{Resolve, ResolverChain};
pub use config::{ResolverConfig, DEFAULT_DELIMITER, DEFAULT_EXTENSION};
pub use loader::{FsLoader, LoadError, SourceLoader};
pub use normalize::{normalize_base_dir, normalize_prefix};
pub use resolver::{Candidate, PrefixResolver};
pub use table::PrefixTable;
