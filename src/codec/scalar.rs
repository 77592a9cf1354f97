use std::marker::PhantomData;

use serde_json::Value as JsonValue;

use crate::codec::field::{absent, mismatch, reject};
use crate::codec::{Decoded, Field, Result, Slot, StatusCode, Value};

/// Native type that maps directly onto one JSON primitive.
pub trait Primitive: Copy + Send + Sync + 'static {
	/// Value variant label.
	const KIND: &'static str;

	/// Read the node if it holds this type exactly (integers must fit).
	fn read(node: &JsonValue) -> Option<Self>;

	/// Write into a document slot.
	fn write(self, dest: &mut Slot<'_>) -> Result<()>;

	/// Extract from the matching value variant.
	fn from_value(value: &Value) -> Option<Self>;

	/// Wrap in the matching value variant.
	fn into_value(self) -> Value;
}

impl Primitive for bool {
	const KIND: &'static str = "bool";

	fn read(node: &JsonValue) -> Option<Self> {
		node.as_bool()
	}

	fn write(self, dest: &mut Slot<'_>) -> Result<()> {
		dest.set_bool(self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool()
	}

	fn into_value(self) -> Value {
		Value::Bool(self)
	}
}

macro_rules! impl_primitive {
	($ty:ty, $kind:literal, $as_json:ident, $set:ident, $wide:ty, $as_value:ident) => {
		impl Primitive for $ty {
			const KIND: &'static str = $kind;

			fn read(node: &JsonValue) -> Option<Self> {
				node.$as_json().and_then(|n| <$ty>::try_from(n).ok())
			}

			fn write(self, dest: &mut Slot<'_>) -> Result<()> {
				dest.$set(<$wide>::from(self))
			}

			fn from_value(value: &Value) -> Option<Self> {
				value.$as_value()
			}

			fn into_value(self) -> Value {
				Value::from(self)
			}
		}
	};
}

impl_primitive!(u8, "u8", as_u64, set_u64, u64, as_u8);
impl_primitive!(u16, "u16", as_u64, set_u64, u64, as_u16);
impl_primitive!(u32, "u32", as_u64, set_u64, u64, as_u32);
impl_primitive!(i8, "i8", as_i64, set_i64, i64, as_i8);
impl_primitive!(i16, "i16", as_i64, set_i64, i64, as_i16);
impl_primitive!(i32, "i32", as_i64, set_i64, i64, as_i32);

/// Status codes reported by [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not the expected primitive.
	pub wrong_type: StatusCode,
}

/// Field for one primitive type with no validation beyond the type match.
#[derive(Debug, Clone, Copy)]
pub struct Scalar<T> {
	codes: ScalarCodes,
	required: bool,
	marker: PhantomData<fn() -> T>,
}

impl<T: Primitive> Scalar<T> {
	/// Required scalar field.
	pub fn new(codes: ScalarCodes) -> Self {
		Self {
			codes,
			required: true,
			marker: PhantomData,
		}
	}

	/// Accept null sources as an absent value.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}
}

impl<T: Primitive> Field for Scalar<T> {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		match T::read(src) {
			Some(value) => Ok(value.into_value()),
			None => reject(T::KIND, self.codes.wrong_type),
		}
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		if src.is_null() {
			dest.set_null();
			return Ok(());
		}
		let value = T::from_value(src).ok_or_else(|| mismatch(T::KIND, src))?;
		value.write(&mut dest)
	}
}

#[cfg(test)]
mod tests;
