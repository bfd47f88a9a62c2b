// Vizboard - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;

/// Top-level error type for all Vizboard operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum VizboardError {
    /// Command-line argument validation failed.
    Cli(CliError),

    /// Export operation failed.
    Export(ExportError),
}

impl fmt::Display for VizboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli(e) => write!(f, "CLI error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for VizboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cli(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// CLI errors
// ---------------------------------------------------------------------------

/// Errors related to command-line argument validation.
#[derive(Debug)]
pub enum CliError {
    /// The `--view` argument named a view that does not exist.
    UnknownView { name: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownView { name } => write!(
                f,
                "Unknown view '{name}'. Expected one of: chart, heatmap, table, grid."
            ),
        }
    }
}

impl std::error::Error for CliError {}

impl From<CliError> for VizboardError {
    fn from(e: CliError) -> Self {
        Self::Cli(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations. Exports are serialised into an
/// in-memory buffer bound for the clipboard, so no path context exists.
#[derive(Debug)]
pub enum ExportError {
    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// I/O error writing to the export buffer.
    Io { source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::Io { source } => Some(source),
        }
    }
}

impl From<ExportError> for VizboardError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        Self::Csv { source: e }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { source: e }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io { source: e }
    }
}

/// Convenience type alias for Vizboard results.
pub type Result<T> = std::result::Result<T, VizboardError>;
