//! Configuration for a single catalog run.
//!
//! [`TrackerConfig`] gathers everything one invocation needs: where the
//! catalog lives, which operation to perform, and how lenient loading and
//! output should be.
//!
//! # Examples
//!
//! ```
//! use booktrack::{OutputFormat, TrackerConfig};
//!
//! let config = TrackerConfig {
//!     output_format: OutputFormat::Json,
//!     ..TrackerConfig::new("catalog.txt", "Dune")
//! };
//! assert_eq!(config.extension, ".txt");
//! ```

use std::path::PathBuf;

use crate::error::{CatalogError, Result};
use crate::output::OutputFormat;
use crate::recovery::LoadMode;
use crate::storage::DEFAULT_EXTENSION;

/// Settings for one load-then-operate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Path of the catalog file
    pub catalog_path: PathBuf,
    /// Raw operation token, classified at run time
    pub operation: String,
    /// Extension the catalog file name must end with
    pub extension: String,
    /// Policy for blank lines in the catalog file
    pub load_mode: LoadMode,
    /// Format for matching records
    pub output_format: OutputFormat,
}

impl TrackerConfig {
    /// Configuration with default extension, strict loading and text output.
    #[must_use]
    pub fn new(catalog_path: impl Into<PathBuf>, operation: impl Into<String>) -> Self {
        TrackerConfig {
            catalog_path: catalog_path.into(),
            operation: operation.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            load_mode: LoadMode::Strict,
            output_format: OutputFormat::Text,
        }
    }

    /// Build a configuration from the two positional invocation arguments.
    ///
    /// Arguments after the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InsufficientArguments`] if fewer than two
    /// arguments are supplied.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        match (args.next(), args.next()) {
            (Some(path), Some(operation)) => Ok(Self::new(path, operation)),
            _ => Err(CatalogError::InsufficientArguments),
        }
    }

    /// Set the required file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the blank-line policy.
    #[must_use]
    pub fn with_load_mode(mut self, mode: LoadMode) -> Self {
        self.load_mode = mode;
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let config = TrackerConfig::from_args(["catalog.txt", "Dune"]).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("catalog.txt"));
        assert_eq!(config.operation, "Dune");
        assert_eq!(config.load_mode, LoadMode::Strict);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_from_args_insufficient() {
        assert!(matches!(
            TrackerConfig::from_args(Vec::<String>::new()),
            Err(CatalogError::InsufficientArguments)
        ));
        assert!(matches!(
            TrackerConfig::from_args(["catalog.txt"]),
            Err(CatalogError::InsufficientArguments)
        ));
    }

    #[test]
    fn test_builders() {
        let config = TrackerConfig::new("books.cat", "Emma")
            .with_extension(".cat")
            .with_load_mode(LoadMode::SkipBlankLines)
            .with_output_format(OutputFormat::Csv);
        assert_eq!(config.extension, ".cat");
        assert_eq!(config.load_mode, LoadMode::SkipBlankLines);
        assert_eq!(config.output_format, OutputFormat::Csv);
    }
}
