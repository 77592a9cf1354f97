use serde_json::Value as JsonValue;

use crate::codec::field::{absent, mismatch, reject};
use crate::codec::terminated::{encode_terminated, terminated_len};
use crate::codec::{Decoded, Field, Result, Scalar, ScalarCodes, Slot, StatusCode, Value};

/// Maximum number of levels in one table.
pub const MAX_LEVELS: usize = 255;

/// Buffer size of a level table: every level plus the terminator.
pub const LEVEL_SLOTS: usize = MAX_LEVELS + 1;

/// Zero-terminated PWM duty-cycle table as firmware stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTable {
	slots: [u8; LEVEL_SLOTS],
}

impl Default for LevelTable {
	fn default() -> Self {
		Self { slots: [0; LEVEL_SLOTS] }
	}
}

impl LevelTable {
	/// Table holding `levels`, or `None` unless they are 1..=255 strictly
	/// increasing non-zero bytes.
	pub fn from_levels(levels: &[u8]) -> Option<Self> {
		if levels.is_empty() || levels.len() > MAX_LEVELS {
			return None;
		}
		let mut previous = 0_u8;
		for level in levels {
			if *level <= previous {
				return None;
			}
			previous = *level;
		}

		let mut table = Self::default();
		table.slots[..levels.len()].copy_from_slice(levels);
		Some(table)
	}

	/// Table over raw slots without any checks.
	pub fn from_slots(slots: [u8; LEVEL_SLOTS]) -> Self {
		Self { slots }
	}

	/// Table from a decoded `Value::Bytes` of exactly [`LEVEL_SLOTS`] bytes.
	pub fn from_value(value: &Value) -> Option<Self> {
		let slots = value.as_bytes()?.try_into().ok()?;
		Some(Self { slots })
	}

	/// Levels before the terminator, or every slot when unterminated.
	pub fn levels(&self) -> &[u8] {
		let len = terminated_len(&self.slots).unwrap_or(LEVEL_SLOTS);
		&self.slots[..len]
	}

	/// Raw slots including the terminator.
	pub fn slots(&self) -> &[u8; LEVEL_SLOTS] {
		&self.slots
	}

	/// Wrap as a `Value::Bytes`.
	pub fn to_value(&self) -> Value {
		Value::from(&self.slots[..])
	}
}

/// Status codes reported by [`PwmLevelTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not an array.
	pub wrong_type: StatusCode,
	/// Source array is empty.
	pub too_short: StatusCode,
	/// Source array holds more than [`MAX_LEVELS`] entries.
	pub too_long: StatusCode,
	/// A level is zero.
	pub level_zero: StatusCode,
	/// A level is not above the one before it.
	pub level_not_increasing: StatusCode,
	/// A level is null.
	pub level_not_present: StatusCode,
	/// A level is not a `u8`.
	pub level_wrong_type: StatusCode,
}

/// Strictly increasing list of non-zero PWM levels.
///
/// Decodes to a `Value::Bytes` of [`LEVEL_SLOTS`] bytes, zero-terminated.
#[derive(Debug, Clone, Copy)]
pub struct PwmLevelTable {
	level: Scalar<u8>,
	codes: LevelCodes,
	required: bool,
}

impl PwmLevelTable {
	/// Required level table.
	pub fn new(codes: LevelCodes) -> Self {
		Self {
			level: Scalar::new(ScalarCodes {
				not_present: codes.level_not_present,
				wrong_type: codes.level_wrong_type,
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
}

impl Field for PwmLevelTable {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(items) = src.as_array() else {
			return reject("levels", self.codes.wrong_type);
		};
		if items.is_empty() {
			return reject("levels", self.codes.too_short);
		}
		if items.len() > MAX_LEVELS {
			return reject("levels", self.codes.too_long);
		}

		let mut table = LevelTable::default();
		let mut previous = 0_u8;
		for (slot, item) in table.slots.iter_mut().zip(items) {
			let level = match self.level.decode(item)? {
				Value::U8(level) => level,
				_ => return reject("levels", self.codes.level_wrong_type),
			};
			if level == 0 {
				return reject("levels", self.codes.level_zero);
			}
			if level <= previous {
				return reject("levels", self.codes.level_not_increasing);
			}
			previous = level;
			*slot = level;
		}
		Ok(table.to_value())
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		match src {
			Value::Null => {
				dest.set_null();
				Ok(())
			}
			Value::Bytes(buf) => encode_terminated(&mut dest, buf, LEVEL_SLOTS),
			other => Err(mismatch("bytes", other)),
		}
	}
}
