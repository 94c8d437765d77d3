//! `resolve` and `candidates` commands.
//!
//! Both write to a caller-supplied writer and report success as a `bool`
//! so `main` decides the exit status.

use std::io::{self, Write};

use nsmap_resolve::{PrefixResolver, ResolverConfig, SourceLoader};

use crate::args::Options;

/// Build a disk-backed resolver from command-line options.
pub fn build_resolver(options: &Options) -> PrefixResolver {
    let mut config = ResolverConfig::default();
    if let Some(delimiter) = options.delimiter {
        config = config.with_delimiter(delimiter);
    }
    if let Some(extension) = &options.extension {
        config = config.with_extension(extension.as_str());
    }

    let mut resolver = PrefixResolver::with_config(config);
    for mapping in &options.mappings {
        if mapping.prepend {
            resolver.register_prepend(&mapping.prefix, &mapping.base_dir);
        } else {
            resolver.register(&mapping.prefix, &mapping.base_dir);
        }
    }
    tracing::debug!(
        prefixes = resolver.table().len(),
        delimiter = %resolver.config().delimiter,
        extension = %resolver.config().extension,
        "built resolver from command line"
    );
    resolver
}

/// Resolve every identifier. Returns `false` if any was not found.
pub fn run_resolve(options: &Options, out: &mut impl Write) -> io::Result<bool> {
    let mut resolver = build_resolver(options);
    let mut all_found = true;

    for identifier in &options.identifiers {
        match resolver.resolve(identifier) {
            Some(path) => writeln!(out, "{identifier} -> {}", path.display())?,
            None => {
                all_found = false;
                writeln!(out, "{identifier}: not found")?;
            }
        }
    }

    Ok(all_found)
}

/// List every probe for each identifier, marking files that exist.
///
/// Returns `false` if some identifier has no existing candidate.
pub fn run_candidates(options: &Options, out: &mut impl Write) -> io::Result<bool> {
    let resolver = build_resolver(options);
    let mut all_found = true;

    for identifier in &options.identifiers {
        writeln!(out, "{identifier}")?;
        let candidates = resolver.candidates(identifier);
        if candidates.is_empty() {
            writeln!(out, "  (no registered prefix)")?;
        }

        let mut any_exists = false;
        for candidate in candidates {
            let exists = resolver.loader().exists(&candidate.path);
            any_exists |= exists;
            let marker = if exists { "found" } else { "-" };
            writeln!(
                out,
                "  {marker:<5} {}  [{}]",
                candidate.path.display(),
                candidate.prefix
            )?;
        }
        all_found &= any_exists;
    }

    Ok(all_found)
}

pub fn print_usage() {
    eprintln!("Usage: nsmap <command> [options] <identifier>...");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  resolve      Resolve identifiers to files and load them");
    eprintln!("  candidates   List every path that would be probed");
    eprintln!("  help         Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --map <prefix>=<dir>      Register a base directory (repeatable, also -m)");
    eprintln!("  --prepend <prefix>=<dir>  Register ahead of earlier directories");
    eprintln!("  --delimiter <char>        Namespace delimiter (default: \\)");
    eprintln!("  --ext <extension>         Source file extension (default: php)");
    eprintln!();
    eprintln!("Options take their value either after `=` or as the next argument.");
    eprintln!();
    eprintln!("Set RUST_LOG=nsmap_resolve=trace to log every probe.");
}
