//! Resolver configuration.

/// Namespace delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = '\\';

/// Source file extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "php";

/// Characters and extension that shape prefix keys and candidate paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Separates namespace segments in identifiers and prefixes.
    pub delimiter: char,
    /// Separates path components in base directories and file paths.
    pub separator: char,
    /// File extension appended to every candidate, without the leading dot.
    pub extension: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            delimiter: DEFAULT_DELIMITER,
            separator: std::path::MAIN_SEPARATOR,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the file extension. A leading `.` is ignored.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension
            .strip_prefix('.')
            .map_or_else(|| extension.clone(), str::to_string);
        self
    }

    /// Turn the part of an identifier after its prefix into a relative file name.
    ///
    /// `Models\User` becomes `Models/User.php` with the default configuration
    /// on Unix.
    pub fn file_name_for(&self, relative_name: &str) -> String {
        let mut file = relative_name.replace(self.delimiter, &self.separator.to_string());
        file.push('.');
        file.push_str(&self.extension);
        file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extension_leading_dot_is_stripped() {
        let dotted = ResolverConfig::default().with_extension(".src");
        let bare = ResolverConfig::default().with_extension("src");
        assert_eq!(dotted, bare);
        assert_eq!(dotted.extension, "src");
    }

    #[test]
    fn file_name_replaces_every_delimiter() {
        let config = ResolverConfig::default()
            .with_delimiter(':')
            .with_separator('/')
            .with_extension("txt");
        assert_eq!(config.file_name_for("A:B:C"), "A/B/C.txt");
        assert_eq!(config.file_name_for("User"), "User.txt");
    }
}
