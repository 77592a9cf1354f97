use std::net::Ipv4Addr;

use serde_json::Value as JsonValue;

use crate::codec::cursor::{AddressFault, Cursor};
use crate::codec::field::{absent, mismatch, reject};
use crate::codec::{Decoded, Field, Result, Slot, StatusCode, Value};

const OCTET_COUNT: usize = 4;

/// Status codes reported by [`Ipv4Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Codes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not a string.
	pub wrong_type: StatusCode,
	/// Something other than `.` follows an octet.
	pub invalid_character: StatusCode,
	/// An octet exceeds 255.
	pub out_of_range: StatusCode,
	/// An octet is empty, or the string ends before the fourth octet.
	pub missing_field: StatusCode,
	/// Characters follow the fourth octet.
	pub excess_characters: StatusCode,
}

/// Parse `d.d.d.d` into octets.
pub(crate) fn parse_ipv4(input: &str) -> std::result::Result<[u8; OCTET_COUNT], AddressFault> {
	let mut cursor = Cursor::new(input);
	let mut octets = [0_u8; OCTET_COUNT];

	for (idx, octet) in octets.iter_mut().enumerate() {
		*octet = cursor.read_byte(10)?;
		if idx + 1 == OCTET_COUNT {
			if !cursor.is_at_end() {
				return Err(AddressFault::ExcessCharacters);
			}
			continue;
		}
		match cursor.next_byte() {
			Some(b'.') => {}
			Some(_) => return Err(AddressFault::InvalidCharacter),
			None => return Err(AddressFault::MissingField),
		}
	}

	Ok(octets)
}

/// Dotted-quad IPv4 address stored as `Value::U32`, first octet most significant.
#[derive(Debug, Clone, Copy)]
pub struct Ipv4Address {
	codes: Ipv4Codes,
	required: bool,
}

impl Ipv4Address {
	/// Required address field.
	pub fn new(codes: Ipv4Codes) -> Self {
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
			AddressFault::InvalidCharacter | AddressFault::InvalidSeparator => self.codes.invalid_character,
			AddressFault::ExcessCharacters => self.codes.excess_characters,
		}
	}
}

impl Field for Ipv4Address {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(text) = src.as_str() else {
			return reject("ipv4", self.codes.wrong_type);
		};
		match parse_ipv4(text) {
			Ok(octets) => Ok(Value::U32(u32::from_be_bytes(octets))),
			Err(fault) => reject("ipv4", self.fault_code(fault)),
		}
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		match src {
			Value::Null => {
				dest.set_null();
				Ok(())
			}
			Value::U32(address) => dest.set_str(&Ipv4Addr::from(*address).to_string()),
			other => Err(mismatch("u32", other)),
		}
	}
}
