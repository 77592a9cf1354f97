use std::path::Path;

use fieldcodec::codec::StatusCode;
use fieldcodec::device::DeviceStatus;
use serde_json::Value as JsonValue;

/// Device document validation command.
pub mod check;
/// Decode and canonical re-encode command.
pub mod normalize;

mod error;

pub use error::{CliError, Result};

/// Read and parse a JSON document from disk.
pub(crate) fn read_document(path: &Path) -> Result<JsonValue> {
	let text = std::fs::read_to_string(path)?;
	Ok(serde_json::from_str(&text)?)
}

/// Stable label for a device status code.
pub(crate) fn status_label(code: StatusCode) -> &'static str {
	DeviceStatus::from_code(code).map_or("unknown", DeviceStatus::label)
}
