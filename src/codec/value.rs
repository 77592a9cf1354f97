/// One decoded datum, or the input to an encode.
///
/// Which variant a field produces is fixed by the field type: scalars yield
/// their primitive variant, addresses yield `U32`/`Bytes`, arrays and records
/// yield `List`. Absence is always `Null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
	/// Absent value.
	#[default]
	Null,
	/// Boolean.
	Bool(bool),
	/// Unsigned 8-bit integer.
	U8(u8),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Signed 8-bit integer.
	I8(i8),
	/// Signed 16-bit integer.
	I16(i16),
	/// Signed 32-bit integer.
	I32(i32),
	/// Length-checked string.
	Str(Box<str>),
	/// Fixed-capacity byte buffer.
	Bytes(Box<[u8]>),
	/// Array elements in order, or record entries in declaration order.
	List(Vec<Value>),
}

impl Value {
	/// Whether the value is absent.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Stable variant label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::U8(_) => "u8",
			Self::U16(_) => "u16",
			Self::U32(_) => "u32",
			Self::I8(_) => "i8",
			Self::I16(_) => "i16",
			Self::I32(_) => "i32",
			Self::Str(_) => "str",
			Self::Bytes(_) => "bytes",
			Self::List(_) => "list",
		}
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// `u8` payload.
	pub fn as_u8(&self) -> Option<u8> {
		match self {
			Self::U8(v) => Some(*v),
			_ => None,
		}
	}

	/// `u16` payload.
	pub fn as_u16(&self) -> Option<u16> {
		match self {
			Self::U16(v) => Some(*v),
			_ => None,
		}
	}

	/// `u32` payload.
	pub fn as_u32(&self) -> Option<u32> {
		match self {
			Self::U32(v) => Some(*v),
			_ => None,
		}
	}

	/// `i8` payload.
	pub fn as_i8(&self) -> Option<i8> {
		match self {
			Self::I8(v) => Some(*v),
			_ => None,
		}
	}

	/// `i16` payload.
	pub fn as_i16(&self) -> Option<i16> {
		match self {
			Self::I16(v) => Some(*v),
			_ => None,
		}
	}

	/// `i32` payload.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Self::I32(v) => Some(*v),
			_ => None,
		}
	}

	/// String payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(v) => Some(v),
			_ => None,
		}
	}

	/// Byte buffer payload.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(v) => Some(v),
			_ => None,
		}
	}

	/// Child values.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(v) => Some(v),
			_ => None,
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_from! {
	bool => Bool,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	Vec<Value> => List,
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.into())
	}
}

impl From<&[u8]> for Value {
	fn from(value: &[u8]) -> Self {
		Self::Bytes(value.into())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
