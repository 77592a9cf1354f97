use thiserror::Error;

/// Crate-local result type for encode operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors produced while writing values into a destination document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
	/// Destination document ran out of budget.
	#[error("document capacity exceeded: need={need}, remaining={remaining}")]
	CapacityExceeded {
		/// Bytes the write would consume.
		need: usize,
		/// Bytes left in the document budget.
		remaining: usize,
	},
	/// Value variant does not match what the field writes.
	#[error("value mismatch: expected {expected}, got {got}")]
	Mismatch {
		/// Variant label the field expects.
		expected: &'static str,
		/// Variant label actually supplied.
		got: &'static str,
	},
	/// Stored value is not one of the configured choices.
	#[error("value is not a configured choice")]
	UnknownChoice,
	/// Sentinel-terminated buffer has no zero terminator.
	#[error("buffer of {capacity} slots is not zero terminated")]
	NotTerminated {
		/// Number of slots scanned.
		capacity: usize,
	},
	/// Fixed-length value has the wrong number of entries.
	#[error("length mismatch: len={len}, expected={expected}")]
	LengthMismatch {
		/// Supplied entry count.
		len: usize,
		/// Required entry count.
		expected: usize,
	},
	/// List holds more elements than the field allows.
	#[error("list too long: len={len}, max={max}")]
	TooLong {
		/// Supplied element count.
		len: usize,
		/// Field capacity.
		max: usize,
	},
}
