use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::codec::field::{absent, mismatch, reject};
use crate::codec::{Decoded, EncodeError, Field, Result, Slot, StatusCode, Value};

/// Status codes reported by [`FixedArray`] itself.
///
/// Element failures are reported with the element field's own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not an array.
	pub wrong_type: StatusCode,
	/// Source holds more than `N` elements.
	pub too_long: StatusCode,
}

/// Bounded homogeneous sequence of up to `N` elements.
///
/// Decodes to `Value::List` holding exactly the source length.
#[derive(Clone)]
pub struct FixedArray<const N: usize> {
	element: Arc<dyn Field>,
	codes: ArrayCodes,
	required: bool,
}

impl<const N: usize> FixedArray<N> {
	/// Required array of `element`.
	pub fn new(element: impl Field + 'static, codes: ArrayCodes) -> Self {
		Self::shared(Arc::new(element), codes)
	}

	/// Required array of an element field shared with other positions.
	pub fn shared(element: Arc<dyn Field>, codes: ArrayCodes) -> Self {
		Self {
			element,
			codes,
			required: true,
		}
	}

	/// Accept null sources as an absent value.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Maximum element count.
	pub const fn capacity(&self) -> usize {
		N
	}
}

impl<const N: usize> Field for FixedArray<N> {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(items) = src.as_array() else {
			return reject("array", self.codes.wrong_type);
		};
		if items.len() > N {
			return reject("array", self.codes.too_long);
		}

		let values = items.iter().map(|item| self.element.decode(item)).collect::<std::result::Result<Vec<_>, _>>()?;
		Ok(Value::List(values))
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		let items = match src {
			Value::Null => {
				dest.set_null();
				return Ok(());
			}
			Value::List(items) => items,
			other => return Err(mismatch("list", other)),
		};
		if items.len() > N {
			return Err(EncodeError::TooLong { len: items.len(), max: N });
		}

		dest.to_array();
		for item in items {
			self.element.encode(dest.push()?, item)?;
		}
		Ok(())
	}
}

impl<const N: usize> std::fmt::Debug for FixedArray<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FixedArray")
			.field("capacity", &N)
			.field("codes", &self.codes)
			.field("required", &self.required)
			.finish_non_exhaustive()
	}
}
