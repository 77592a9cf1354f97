use serde_json::Value as JsonValue;

use crate::codec::field::{absent, mismatch, reject};
use crate::codec::{Decoded, Field, Result, Slot, StatusCode, Value};

/// Status codes reported by [`BoundedString`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not a string.
	pub wrong_type: StatusCode,
	/// Fewer than `min_len` bytes.
	pub too_short: StatusCode,
	/// More than `max_len` bytes.
	pub too_long: StatusCode,
}

/// String field with inclusive byte-length bounds.
#[derive(Debug, Clone, Copy)]
pub struct BoundedString {
	min_len: usize,
	max_len: usize,
	codes: StringCodes,
	required: bool,
}

impl BoundedString {
	/// Required string of `min_len..=max_len` bytes.
	pub fn new(min_len: usize, max_len: usize, codes: StringCodes) -> Self {
		Self {
			min_len,
			max_len,
			codes,
			required: true,
		}
	}

	/// Accept null sources as an absent value.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}
}

impl Field for BoundedString {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(text) = src.as_str() else {
			return reject("str", self.codes.wrong_type);
		};
		if text.len() < self.min_len {
			return reject("str", self.codes.too_short);
		}
		if text.len() > self.max_len {
			return reject("str", self.codes.too_long);
		}
		Ok(Value::from(text))
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		match src {
			Value::Null => {
				dest.set_null();
				Ok(())
			}
			Value::Str(text) => dest.set_str(text),
			other => Err(mismatch("str", other)),
		}
	}
}
