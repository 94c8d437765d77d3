//! Normalization of registered prefixes and base directories.
//!
//! Keys in the prefix table never start with a delimiter and always end
//! with exactly one. Base directories always end with exactly one
//! separator. Both functions are idempotent.

/// Normalize a namespace prefix into a table key.
///
/// Leading and trailing delimiters are trimmed and a single delimiter is
/// appended, so `::A::`, `A::` and `A` all become `A:` with `:` as delimiter.
/// An empty prefix becomes the bare delimiter.
pub fn normalize_prefix(prefix: &str, delimiter: char) -> String {
    let trimmed = prefix.trim_matches(delimiter);
    let mut key = String::with_capacity(trimmed.len() + delimiter.len_utf8());
    key.push_str(trimmed);
    key.push(delimiter);
    key
}

/// Normalize a base directory so it ends with exactly one separator.
///
/// Leading separators are kept: `/` stays `/` and `//srv//` becomes `//srv/`.
pub fn normalize_base_dir(base_dir: &str, separator: char) -> String {
    let trimmed = base_dir.trim_end_matches(separator);
    let mut dir = String::with_capacity(trimmed.len() + separator.len_utf8());
    dir.push_str(trimmed);
    dir.push(separator);
    dir
}
