//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An option was set to a value of the wrong type.
	#[error("invalid value for {key}: expected {expected}")]
	InvalidValue {
		/// The option's KDL key.
		key: String,
		/// Description of the expected value shape.
		expected: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal problem encountered while parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// The options block contained a key this build does not recognize.
	UnknownOption {
		/// The unrecognized KDL key.
		key: String,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownOption { key } => {
				write!(f, "unknown option '{key}' will be ignored")
			}
		}
	}
}
