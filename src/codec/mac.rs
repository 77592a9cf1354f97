use serde_json::Value as JsonValue;

use crate::codec::cursor::{AddressFault, Cursor};
use crate::codec::field::{absent, mismatch, reject};
use crate::codec::{Decoded, EncodeError, Field, Result, Slot, StatusCode, Value};

/// Number of bytes in a MAC address.
pub const MAC_ADDRESS_LEN: usize = 6;

/// Status codes reported by [`MacAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not a string.
	pub wrong_type: StatusCode,
	/// First separator is neither `:` nor `-`, or the string ends after one byte.
	pub invalid_character: StatusCode,
	/// A later separator differs from the first one or is missing.
	pub invalid_separator: StatusCode,
	/// A byte exceeds `0xFF`.
	pub out_of_range: StatusCode,
	/// A byte has no hex digits.
	pub missing_field: StatusCode,
	/// Characters follow the sixth byte.
	pub excess_characters: StatusCode,
}

/// Parse six hex bytes separated by all `:` or all `-`.
pub(crate) fn parse_mac(input: &str) -> std::result::Result<[u8; MAC_ADDRESS_LEN], AddressFault> {
	let mut cursor = Cursor::new(input);
	let mut bytes = [0_u8; MAC_ADDRESS_LEN];
	let mut separator = b':';

	for (idx, byte) in bytes.iter_mut().enumerate() {
		*byte = cursor.read_byte(16)?;
		let last = idx + 1 == MAC_ADDRESS_LEN;
		match cursor.next_byte() {
			None if last => {}
			Some(_) if last => return Err(AddressFault::ExcessCharacters),
			Some(sep @ (b':' | b'-')) if idx == 0 => separator = sep,
			_ if idx == 0 => return Err(AddressFault::InvalidCharacter),
			Some(sep) if sep == separator => {}
			_ => return Err(AddressFault::InvalidSeparator),
		}
	}

	Ok(bytes)
}

/// Render bytes as uppercase `XX:XX:XX:XX:XX:XX`.
pub(crate) fn format_mac(bytes: &[u8; MAC_ADDRESS_LEN]) -> String {
	bytes.iter().map(|byte| format!("{byte:02X}")).collect::<Vec<_>>().join(":")
}

/// MAC address stored as a six-byte `Value::Bytes`.
///
/// Encoding always produces the canonical uppercase colon form, whatever
/// case, separator, or digit count the source used.
#[derive(Debug, Clone, Copy)]
pub struct MacAddress {
	codes: MacCodes,
	required: bool,
}

impl MacAddress {
	/// Required address field.
	pub fn new(codes: MacCodes) -> Self {
		Self { codes, required: true }
	}

	/// Accept null sources as an absent value.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	fn fault_code(&self, fault: AddressFault) -> StatusCode {
		match fault {
			AddressFault::MissingField => self.codes.missing_field,
			AddressFault::OutOfRange => self.codes.out_of_range,
			AddressFault::InvalidCharacter => self.codes.invalid_character,
			AddressFault::InvalidSeparator => self.codes.invalid_separator,
			AddressFault::ExcessCharacters => self.codes.excess_characters,
		}
	}
}

impl Field for MacAddress {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(text) = src.as_str() else {
			return reject("mac", self.codes.wrong_type);
		};
		match parse_mac(text) {
			Ok(bytes) => Ok(Value::from(&bytes[..])),
			Err(fault) => reject("mac", self.fault_code(fault)),
		}
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		let bytes = match src {
			Value::Null => {
				dest.set_null();
				return Ok(());
			}
			Value::Bytes(bytes) => bytes,
			other => return Err(mismatch("bytes", other)),
		};
		let bytes: &[u8; MAC_ADDRESS_LEN] = (&**bytes).try_into().map_err(|_| EncodeError::LengthMismatch {
			len: bytes.len(),
			expected: MAC_ADDRESS_LEN,
		})?;
		dest.set_str(&format_mac(bytes))
	}
}
