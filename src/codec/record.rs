use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::codec::doc::NULL;
use crate::codec::field::{absent, mismatch, reject};
use crate::codec::{Decoded, EncodeError, Field, Result, Slot, StatusCode, Value};

/// One named member of a [`Record`].
#[derive(Clone)]
pub struct Entry {
	name: Box<str>,
	field: Arc<dyn Field>,
}

impl Entry {
	/// Member `name` decoded by `field`.
	pub fn new(name: impl Into<Box<str>>, field: impl Field + 'static) -> Self {
		Self::shared(name, Arc::new(field))
	}

	/// Member `name` decoded by a field shared with other positions.
	pub fn shared(name: impl Into<Box<str>>, field: Arc<dyn Field>) -> Self {
		Self { name: name.into(), field }
	}

	/// Document member name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Member field.
	pub fn field(&self) -> &dyn Field {
		&*self.field
	}
}

impl std::fmt::Debug for Entry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Entry").field("name", &self.name).finish_non_exhaustive()
	}
}

/// Status codes reported by [`Record`] itself.
///
/// Member failures are reported with the member field's own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not an object.
	pub wrong_type: StatusCode,
}

/// Fixed set of `N` named members decoded in declaration order.
///
/// Decodes to `Value::List` with one entry per member, in declaration order.
/// The first failing member aborts the decode and its code is returned as is.
#[derive(Debug, Clone)]
pub struct Record<const N: usize> {
	entries: [Entry; N],
	codes: RecordCodes,
	required: bool,
}

impl<const N: usize> Record<N> {
	/// Required record of `entries`.
	pub fn new(entries: [Entry; N], codes: RecordCodes) -> Self {
		Self {
			entries,
			codes,
			required: true,
		}
	}

	/// Accept null sources as an absent value.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Members in declaration order.
	pub fn entries(&self) -> &[Entry; N] {
		&self.entries
	}

	/// Declaration index of member `name`.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.entries.iter().position(|entry| entry.name() == name)
	}

	/// Value of member `name` inside a decoded record value.
	pub fn member<'v>(&self, value: &'v Value, name: &str) -> Option<&'v Value> {
		value.as_list()?.get(self.position(name)?)
	}
}

impl<const N: usize> Field for Record<N> {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(object) = src.as_object() else {
			return reject("record", self.codes.wrong_type);
		};

		let mut values = Vec::with_capacity(N);
		for entry in &self.entries {
			let member = object.get(entry.name()).unwrap_or(&NULL);
			match entry.field.decode(member) {
				Ok(value) => values.push(value),
				Err(code) => {
					tracing::trace!(member = entry.name(), code = code.get(), "record member rejected");
					return Err(code);
				}
			}
		}
		Ok(Value::List(values))
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		let values = match src {
			Value::Null => {
				dest.set_null();
				return Ok(());
			}
			Value::List(values) => values,
			other => return Err(mismatch("list", other)),
		};
		if values.len() != N {
			return Err(EncodeError::LengthMismatch { len: values.len(), expected: N });
		}

		dest.to_object();
		for (entry, value) in self.entries.iter().zip(values) {
			entry.field.encode(dest.member(entry.name())?, value)?;
		}
		Ok(())
	}
}
