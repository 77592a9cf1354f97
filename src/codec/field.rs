use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::codec::{EncodeError, Result, Slot, StatusCode, Value};

/// Outcome of one decode: the value, or the configured failure code.
pub type Decoded = std::result::Result<Value, StatusCode>;

/// Decode/encode capability bound to one schema position.
///
/// Implementations hold configuration only, never decoded data, so a single
/// instance can be shared by any number of records, arrays, or call sites.
pub trait Field: Send + Sync {
	/// Interpret `src`, returning the decoded value or the failure code.
	///
	/// Never panics on malformed input.
	fn decode(&self, src: &JsonValue) -> Decoded;

	/// Write `src` into `dest`. `Value::Null` always succeeds and clears `dest`.
	fn encode(&self, dest: Slot<'_>, src: &Value) -> Result<()>;
}

impl<F: Field + ?Sized> Field for &F {
	fn decode(&self, src: &JsonValue) -> Decoded {
		(**self).decode(src)
	}

	fn encode(&self, dest: Slot<'_>, src: &Value) -> Result<()> {
		(**self).encode(dest, src)
	}
}

impl<F: Field + ?Sized> Field for Box<F> {
	fn decode(&self, src: &JsonValue) -> Decoded {
		(**self).decode(src)
	}

	fn encode(&self, dest: Slot<'_>, src: &Value) -> Result<()> {
		(**self).encode(dest, src)
	}
}

impl<F: Field + ?Sized> Field for Arc<F> {
	fn decode(&self, src: &JsonValue) -> Decoded {
		(**self).decode(src)
	}

	fn encode(&self, dest: Slot<'_>, src: &Value) -> Result<()> {
		(**self).encode(dest, src)
	}
}

/// Result for a null source: fail with `not_present`, or yield
/// `Value::Null` when the field is optional.
pub(crate) fn absent(required: bool, not_present: StatusCode) -> Decoded {
	if required { Err(not_present) } else { Ok(Value::Null) }
}

/// Record a decode rejection and return it.
pub(crate) fn reject(field: &'static str, code: StatusCode) -> Decoded {
	tracing::trace!(field, code = code.get(), "decode rejected");
	Err(code)
}

/// Error for a value whose variant the field cannot write.
pub(crate) fn mismatch(expected: &'static str, got: &Value) -> EncodeError {
	EncodeError::Mismatch { expected, got: got.kind() }
}

/// Root entry point pairing a schema with the caller's success code.
#[derive(Debug, Clone)]
pub struct Codec<F> {
	root: F,
	ok: StatusCode,
}

impl<F: Field> Codec<F> {
	/// Wrap `root`, reporting `ok` for successful decodes.
	pub fn new(root: F, ok: StatusCode) -> Self {
		Self { root, ok }
	}

	/// Root field.
	pub fn root(&self) -> &F {
		&self.root
	}

	/// Success code reported by [`Codec::decode`].
	pub fn ok(&self) -> StatusCode {
		self.ok
	}

	/// Decode a whole document.
	///
	/// Returns the value with the `ok` code, or `Value::Null` with the first
	/// failure code encountered.
	pub fn decode(&self, src: &JsonValue) -> (Value, StatusCode) {
		match self.root.decode(src) {
			Ok(value) => (value, self.ok),
			Err(code) => {
				tracing::debug!(code = code.get(), "document decode failed");
				(Value::Null, code)
			}
		}
	}

	/// Encode a whole document, reporting only success.
	pub fn encode(&self, value: &Value, dest: Slot<'_>) -> bool {
		self.try_encode(value, dest).is_ok()
	}

	/// Encode a whole document.
	pub fn try_encode(&self, value: &Value, dest: Slot<'_>) -> Result<()> {
		self.root.encode(dest, value).inspect_err(|err| tracing::debug!(%err, "document encode failed"))
	}
}
