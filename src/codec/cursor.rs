/// Why an address string was rejected, before mapping to caller codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddressFault {
	/// A byte position held no digits.
	MissingField,
	/// A byte's digits exceeded 255.
	OutOfRange,
	/// Unexpected character where a separator belongs.
	InvalidCharacter,
	/// Separator differs from the one fixed by the first byte.
	InvalidSeparator,
	/// Characters remained after the last byte.
	ExcessCharacters,
}

/// Bounded cursor over the bytes of an address string.
pub(crate) struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub(crate) fn new(input: &'a str) -> Self {
		Self {
			bytes: input.as_bytes(),
			pos: 0,
		}
	}

	/// Whether every byte was consumed.
	pub(crate) fn is_at_end(&self) -> bool {
		self.pos >= self.bytes.len()
	}

	/// Consume and return the next byte.
	pub(crate) fn next_byte(&mut self) -> Option<u8> {
		let byte = self.bytes.get(self.pos).copied()?;
		self.pos += 1;
		Some(byte)
	}

	/// Read a run of `radix` digits as one byte value.
	///
	/// Fails as soon as the running value passes 255, so long digit runs
	/// never overflow.
	pub(crate) fn read_byte(&mut self, radix: u32) -> Result<u8, AddressFault> {
		let start = self.pos;
		let mut value = 0_u32;
		while let Some(digit) = self.bytes.get(self.pos).and_then(|byte| char::from(*byte).to_digit(radix)) {
			value = value * radix + digit;
			self.pos += 1;
			if value > u32::from(u8::MAX) {
				return Err(AddressFault::OutOfRange);
			}
		}

		if self.pos == start {
			return Err(AddressFault::MissingField);
		}
		u8::try_from(value).map_err(|_| AddressFault::OutOfRange)
	}
}
