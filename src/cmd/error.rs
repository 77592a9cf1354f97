use fieldcodec::codec::{EncodeError, StatusCode};
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input is not JSON, or a report failed to serialize.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Document failed schema validation.
	#[error("document rejected: code {code} ({label})")]
	Rejected {
		/// First failure code.
		code: StatusCode,
		/// Label of `code`.
		label: &'static str,
	},
	/// Decoded value could not be written back.
	#[error("encode: {0}")]
	Encode(#[from] EncodeError),
}
