use serde_json::json;

use crate::codec::{Document, EncodeError, Field, Scalar, ScalarCodes, StatusCode, Value};

const NOT_PRESENT: StatusCode = StatusCode(1);
const WRONG_TYPE: StatusCode = StatusCode(2);

const CODES: ScalarCodes = ScalarCodes {
	not_present: NOT_PRESENT,
	wrong_type: WRONG_TYPE,
};

#[test]
fn null_source_is_not_present() {
	assert_eq!(Scalar::<u8>::new(CODES).decode(&json!(null)), Err(NOT_PRESENT));
}

#[test]
fn optional_null_source_is_absent() {
	assert_eq!(Scalar::<u8>::new(CODES).optional().decode(&json!(null)), Ok(Value::Null));
}

#[test]
fn string_source_is_wrong_type() {
	assert_eq!(Scalar::<u32>::new(CODES).decode(&json!("hello")), Err(WRONG_TYPE));
	assert_eq!(Scalar::<bool>::new(CODES).decode(&json!(1)), Err(WRONG_TYPE));
}

#[test]
fn integers_must_fit_the_target_type() {
	assert_eq!(Scalar::<u8>::new(CODES).decode(&json!(255)), Ok(Value::U8(255)));
	assert_eq!(Scalar::<u8>::new(CODES).decode(&json!(256)), Err(WRONG_TYPE));
	assert_eq!(Scalar::<u8>::new(CODES).decode(&json!(-1)), Err(WRONG_TYPE));
	assert_eq!(Scalar::<i8>::new(CODES).decode(&json!(-128)), Ok(Value::I8(-128)));
	assert_eq!(Scalar::<i8>::new(CODES).decode(&json!(128)), Err(WRONG_TYPE));
	assert_eq!(Scalar::<u16>::new(CODES).decode(&json!(65535)), Ok(Value::U16(65535)));
	assert_eq!(Scalar::<i16>::new(CODES).decode(&json!(-32768)), Ok(Value::I16(-32768)));
	assert_eq!(Scalar::<u32>::new(CODES).decode(&json!(4_294_967_295_u64)), Ok(Value::U32(u32::MAX)));
	assert_eq!(Scalar::<u32>::new(CODES).decode(&json!(4_294_967_296_u64)), Err(WRONG_TYPE));
	assert_eq!(Scalar::<i32>::new(CODES).decode(&json!(i32::MIN)), Ok(Value::I32(i32::MIN)));
}

#[test]
fn floats_are_wrong_type() {
	assert_eq!(Scalar::<u8>::new(CODES).decode(&json!(1.5)), Err(WRONG_TYPE));
}

#[test]
fn booleans_decode() {
	assert_eq!(Scalar::<bool>::new(CODES).decode(&json!(true)), Ok(Value::Bool(true)));
	assert_eq!(Scalar::<bool>::new(CODES).decode(&json!(false)), Ok(Value::Bool(false)));
}

#[test]
fn encode_null_clears_the_node() {
	let mut doc = Document::from_json(json!(true), None);
	Scalar::<bool>::new(CODES).encode(doc.slot(), &Value::Null).expect("null encodes");
	assert!(doc.root().is_null());
}

#[test]
fn encode_writes_the_primitive() {
	let mut doc = Document::with_capacity(0);
	Scalar::<i16>::new(CODES).encode(doc.slot(), &Value::I16(-300)).expect("scalar encodes");
	assert_eq!(doc.root(), &json!(-300));
}

#[test]
fn encode_rejects_other_variants() {
	let mut doc = Document::unbounded();
	let err = Scalar::<u8>::new(CODES).encode(doc.slot(), &Value::U16(1)).expect_err("variant mismatch");
	assert_eq!(err, EncodeError::Mismatch { expected: "u8", got: "u16" });
}

#[test]
fn decode_encode_decode_is_stable() {
	let field = Scalar::<i32>::new(CODES);
	let first = field.decode(&json!(-123_456)).expect("decodes");
	let mut doc = Document::unbounded();
	field.encode(doc.slot(), &first).expect("encodes");
	assert_eq!(field.decode(doc.root()), Ok(first));
}
