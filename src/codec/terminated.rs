use serde_json::Value as JsonValue;

use crate::codec::field::{absent, mismatch, reject};
use crate::codec::{Decoded, EncodeError, Field, Result, Scalar, ScalarCodes, Slot, StatusCode, Value};

/// Logical length of a zero-terminated buffer, `None` without a terminator.
pub fn terminated_len(buf: &[u8]) -> Option<usize> {
	buf.iter().position(|byte| *byte == 0)
}

/// Write the bytes of `buf` before its terminator as an array of numbers.
///
/// At most `slots` bytes are scanned; reaching that limit without a zero is
/// an error.
pub(crate) fn encode_terminated(dest: &mut Slot<'_>, buf: &[u8], slots: usize) -> Result<()> {
	dest.to_array();
	for byte in buf.iter().take(slots) {
		if *byte == 0 {
			return Ok(());
		}
		dest.push()?.set_u64(u64::from(*byte))?;
	}
	Err(EncodeError::NotTerminated { capacity: slots.min(buf.len()) })
}

/// Status codes reported by [`TerminatedBytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminatedCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not an array.
	pub wrong_type: StatusCode,
	/// Source holds more than `N` elements.
	pub too_long: StatusCode,
	/// An element is null.
	pub element_not_present: StatusCode,
	/// An element is not a `u8`.
	pub element_wrong_type: StatusCode,
	/// An element is zero, which would collide with the terminator.
	pub element_zero: StatusCode,
}

/// Byte list of up to `N` non-zero entries stored zero-terminated.
///
/// Decodes to `Value::Bytes` of `N + 1` slots: the entries, then zeros.
#[derive(Debug, Clone, Copy)]
pub struct TerminatedBytes<const N: usize> {
	element: Scalar<u8>,
	codes: TerminatedCodes,
	required: bool,
}

impl<const N: usize> TerminatedBytes<N> {
	/// Required zero-terminated byte list.
	pub fn new(codes: TerminatedCodes) -> Self {
		Self {
			element: Scalar::new(ScalarCodes {
				not_present: codes.element_not_present,
				wrong_type: codes.element_wrong_type,
			}),
			codes,
			required: true,
		}
	}

	/// Accept null sources as an absent value.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Buffer size including the terminator slot.
	pub const fn slots(&self) -> usize {
		N + 1
	}
}

impl<const N: usize> Field for TerminatedBytes<N> {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(items) = src.as_array() else {
			return reject("bytes", self.codes.wrong_type);
		};
		if items.len() > N {
			return reject("bytes", self.codes.too_long);
		}

		let mut buf = vec![0_u8; N + 1];
		for (slot, item) in buf.iter_mut().zip(items) {
			*slot = match self.element.decode(item)? {
				Value::U8(0) => return reject("bytes", self.codes.element_zero),
				Value::U8(byte) => byte,
				_ => return reject("bytes", self.codes.element_wrong_type),
			};
		}
		Ok(Value::Bytes(buf.into_boxed_slice()))
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		match src {
			Value::Null => {
				dest.set_null();
				Ok(())
			}
			Value::Bytes(buf) => encode_terminated(&mut dest, buf, N + 1),
			other => Err(mismatch("bytes", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{TerminatedBytes, TerminatedCodes, terminated_len};
	use crate::codec::{Document, EncodeError, Field, StatusCode, Value};

	const CODES: TerminatedCodes = TerminatedCodes {
		not_present: StatusCode(1),
		wrong_type: StatusCode(2),
		too_long: StatusCode(3),
		element_not_present: StatusCode(4),
		element_wrong_type: StatusCode(5),
		element_zero: StatusCode(6),
	};

	fn field() -> TerminatedBytes<4> {
		TerminatedBytes::new(CODES)
	}

	#[test]
	fn decode_pads_with_terminators() {
		let value = field().decode(&json!([7, 8])).expect("bytes decode");
		assert_eq!(value.as_bytes(), Some(&[7, 8, 0, 0, 0][..]));
		assert_eq!(value.as_bytes().and_then(terminated_len), Some(2));
	}

	#[test]
	fn full_list_still_has_a_terminator() {
		let value = field().decode(&json!([1, 2, 3, 4])).expect("bytes decode");
		assert_eq!(value.as_bytes(), Some(&[1, 2, 3, 4, 0][..]));
	}

	#[test]
	fn zero_element_is_rejected() {
		assert_eq!(field().decode(&json!([1, 0, 2])), Err(CODES.element_zero));
	}

	#[test]
	fn element_codes_are_used_for_bad_entries() {
		assert_eq!(field().decode(&json!([1, null])), Err(CODES.element_not_present));
		assert_eq!(field().decode(&json!([1, 300])), Err(CODES.element_wrong_type));
	}

	#[test]
	fn over_capacity_is_too_long() {
		assert_eq!(field().decode(&json!([1, 2, 3, 4, 5])), Err(CODES.too_long));
	}

	#[test]
	fn encode_stops_at_the_terminator() {
		let mut doc = Document::unbounded();
		field().encode(doc.slot(), &Value::from(&[9_u8, 3, 0, 5, 0][..])).expect("bytes encode");
		assert_eq!(doc.root(), &json!([9, 3]));
	}

	#[test]
	fn encode_without_terminator_fails() {
		let mut doc = Document::unbounded();
		let err = field().encode(doc.slot(), &Value::from(&[1_u8, 2, 3, 4, 5][..])).expect_err("no terminator");
		assert_eq!(err, EncodeError::NotTerminated { capacity: 5 });
	}

	#[test]
	fn decode_encode_decode_is_stable() {
		let first = field().decode(&json!([5, 6, 7])).expect("decodes");
		let mut doc = Document::unbounded();
		field().encode(doc.slot(), &first).expect("encodes");
		assert_eq!(doc.root(), &json!([5, 6, 7]));
		assert_eq!(field().decode(doc.root()), Ok(first));
	}

	#[test]
	fn slots_include_the_terminator() {
		assert_eq!(field().slots(), 5);
		let value = field().decode(&json!([])).expect("empty list decodes");
		assert_eq!(value.as_bytes().map(<[u8]>::len), Some(field().slots()));
	}
}
