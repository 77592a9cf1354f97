use std::fmt;

/// Opaque outcome code from the caller's firmware-wide status space.
///
/// The codec never interprets the number, it only hands back whichever code
/// the caller configured for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(pub u32);

impl StatusCode {
	/// Raw numeric code.
	pub fn get(self) -> u32 {
		self.0
	}
}

impl From<u32> for StatusCode {
	fn from(code: u32) -> Self {
		Self(code)
	}
}

impl fmt::Display for StatusCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
