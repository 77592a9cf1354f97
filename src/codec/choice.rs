use serde_json::Value as JsonValue;

use crate::codec::field::{absent, reject};
use crate::codec::{Decoded, EncodeError, Field, Result, Slot, StatusCode, Value};

/// One key/value pair of a [`StringEnum`] table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
	/// Document-side key.
	pub key: Box<str>,
	/// Native value the key stands for.
	pub value: Value,
}

impl Choice {
	/// Pair `key` with `value`.
	pub fn new(key: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

/// Status codes reported by [`StringEnum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceCodes {
	/// Source is null and the field is required.
	pub not_present: StatusCode,
	/// Source is not a string.
	pub wrong_type: StatusCode,
	/// Source string matches no key.
	pub invalid_choice: StatusCode,
}

/// String-keyed enumeration.
///
/// Keys are expected to be unique; on duplicates the first entry wins.
#[derive(Debug, Clone)]
pub struct StringEnum {
	choices: Vec<Choice>,
	codes: ChoiceCodes,
	required: bool,
}

impl StringEnum {
	/// Required enumeration over `choices` in lookup order.
	pub fn new(choices: impl IntoIterator<Item = Choice>, codes: ChoiceCodes) -> Self {
		Self {
			choices: choices.into_iter().collect(),
			codes,
			required: true,
		}
	}

	/// Accept null sources as an absent value.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Configured choices in lookup order.
	pub fn choices(&self) -> &[Choice] {
		&self.choices
	}
}

impl Field for StringEnum {
	fn decode(&self, src: &JsonValue) -> Decoded {
		if src.is_null() {
			return absent(self.required, self.codes.not_present);
		}
		let Some(key) = src.as_str() else {
			return reject("choice", self.codes.wrong_type);
		};
		match self.choices.iter().find(|choice| &*choice.key == key) {
			Some(choice) => Ok(choice.value.clone()),
			None => reject("choice", self.codes.invalid_choice),
		}
	}

	fn encode(&self, mut dest: Slot<'_>, src: &Value) -> Result<()> {
		if src.is_null() {
			dest.set_null();
			return Ok(());
		}
		// a stored value outside the table means corrupted state
		let choice = self.choices.iter().find(|choice| choice.value == *src).ok_or(EncodeError::UnknownChoice)?;
		dest.set_str(&choice.key)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{Choice, ChoiceCodes, StringEnum};
	use crate::codec::{Document, EncodeError, Field, StatusCode, Value};

	const CODES: ChoiceCodes = ChoiceCodes {
		not_present: StatusCode(10),
		wrong_type: StatusCode(11),
		invalid_choice: StatusCode(12),
	};

	fn modes() -> StringEnum {
		StringEnum::new([Choice::new("off", 0_u8), Choice::new("low", 1_u8), Choice::new("high", 2_u8)], CODES)
	}

	#[test]
	fn known_key_decodes_to_its_value() {
		assert_eq!(modes().decode(&json!("low")), Ok(Value::U8(1)));
	}

	#[test]
	fn unknown_key_is_invalid_choice() {
		assert_eq!(modes().decode(&json!("medium")), Err(CODES.invalid_choice));
		assert_eq!(modes().decode(&json!("LOW")), Err(CODES.invalid_choice));
	}

	#[test]
	fn non_string_is_wrong_type() {
		assert_eq!(modes().decode(&json!(1)), Err(CODES.wrong_type));
	}

	#[test]
	fn missing_value_respects_presence() {
		assert_eq!(modes().decode(&json!(null)), Err(CODES.not_present));
		assert_eq!(modes().optional().decode(&json!(null)), Ok(Value::Null));
	}

	#[test]
	fn first_duplicate_key_wins() {
		let field = StringEnum::new([Choice::new("a", 1_u8), Choice::new("a", 2_u8)], CODES);
		assert_eq!(field.decode(&json!("a")), Ok(Value::U8(1)));
	}

	#[test]
	fn encode_writes_the_key() {
		let mut doc = Document::unbounded();
		modes().encode(doc.slot(), &Value::U8(2)).expect("choice encodes");
		assert_eq!(doc.root(), &json!("high"));
	}

	#[test]
	fn encode_rejects_values_outside_the_table() {
		let mut doc = Document::unbounded();
		let err = modes().encode(doc.slot(), &Value::U8(7)).expect_err("unknown value");
		assert_eq!(err, EncodeError::UnknownChoice);
	}

	#[test]
	fn decode_encode_decode_is_stable() {
		let first = modes().decode(&json!("high")).expect("decodes");
		let mut doc = Document::unbounded();
		modes().encode(doc.slot(), &first).expect("encodes");
		assert_eq!(modes().decode(doc.root()), Ok(first));
	}

	#[test]
	fn choices_keep_declaration_order() {
		let field = modes();
		let keys: Vec<&str> = field.choices().iter().map(|choice| &*choice.key).collect();
		assert_eq!(keys, ["off", "low", "high"]);
	}
}
