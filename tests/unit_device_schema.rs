#![allow(missing_docs)]

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use fieldcodec::codec::{Document, Field, StatusCode, Value};
use fieldcodec::device::{DeviceConfig, DeviceStatus, NetworkMode, device_codec, device_schema};
use serde_json::{Value as JsonValue, json};

#[test]
fn valid_fixture_decodes_into_typed_config() {
	let (value, code) = device_codec().decode(&load("device_valid.json"));
	assert_eq!(code, StatusCode::from(DeviceStatus::Ok));

	let config = DeviceConfig::from_value(&value).expect("decoded value matches the schema");
	assert_eq!(config.name, "bench-psu");
	assert_eq!(config.mode, NetworkMode::Static);
	assert_eq!(config.address, Some(Ipv4Addr::new(192, 168, 1, 20)));
	assert_eq!(config.gateway, Some(Ipv4Addr::new(192, 168, 1, 1)));
	assert_eq!(config.mac, [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]);
	assert_eq!(config.pwm.levels(), &[10, 50, 120, 255]);
	assert_eq!(config.channels, vec![0, 1000, 65535]);
	assert!(config.enabled);
}

#[test]
fn optional_addresses_may_be_null_or_missing() {
	let (value, code) = device_codec().decode(&load("device_dhcp.json"));
	assert_eq!(code, StatusCode::from(DeviceStatus::Ok));

	let config = DeviceConfig::from_value(&value).expect("decoded value matches the schema");
	assert_eq!(config.mode, NetworkMode::Dhcp);
	assert_eq!(config.address, None);
	assert_eq!(config.gateway, None);
	assert!(config.channels.is_empty());
}

#[test]
fn failure_reports_first_member_code_and_no_value() {
	let (value, code) = device_codec().decode(&load("device_bad_mac.json"));
	assert_eq!(code, StatusCode::from(DeviceStatus::MacInvalidSeparator));
	assert!(value.is_null());
}

#[test]
fn missing_required_member_reports_its_own_code() {
	let mut doc = load("device_valid.json");
	remove(&mut doc, "mac");
	assert_eq!(device_schema().decode(&doc), Err(DeviceStatus::MacMissing.into()));

	let mut doc = load("device_valid.json");
	remove(&mut doc, "name");
	remove(&mut doc, "enabled");
	assert_eq!(device_schema().decode(&doc), Err(DeviceStatus::NameMissing.into()));
}

#[test]
fn member_failures_map_to_device_codes() {
	let cases: [(&str, JsonValue, DeviceStatus); 12] = [
		("name", json!(""), DeviceStatus::NameTooShort),
		("name", json!("x".repeat(33)), DeviceStatus::NameTooLong),
		("mode", json!("bridge"), DeviceStatus::ModeInvalid),
		("mode", json!(1), DeviceStatus::ModeWrongType),
		("address", json!("1.2.3"), DeviceStatus::AddressMissingField),
		("gateway", json!("10.0.0.256"), DeviceStatus::GatewayOutOfRange),
		("mac", json!("12:34-56:78:9a:bc"), DeviceStatus::MacInvalidSeparator),
		("mac", json!("12::56:78:9a:bc"), DeviceStatus::MacMissingField),
		("mac", json!("12"), DeviceStatus::MacInvalidCharacter),
		("pwm", json!([4, 4]), DeviceStatus::PwmLevelNotIncreasing),
		("channels", json!([1, 2, 3, 4, 5]), DeviceStatus::ChannelsTooLong),
		("enabled", json!("yes"), DeviceStatus::EnabledWrongType),
	];

	for (member, replacement, status) in cases {
		let mut doc = load("device_valid.json");
		doc[member] = replacement;
		assert_eq!(device_schema().decode(&doc), Err(status.into()), "member {member}");
	}
}

#[test]
fn non_object_documents_are_rejected() {
	assert_eq!(device_schema().decode(&JsonValue::Null), Err(DeviceStatus::Missing.into()));
	assert_eq!(device_schema().decode(&json!([])), Err(DeviceStatus::WrongType.into()));
	assert_eq!(DeviceStatus::from_code(StatusCode(DeviceStatus::WrongType as u32)), Some(DeviceStatus::WrongType));
}

#[test]
fn encode_normalizes_and_decodes_back_to_the_same_value() {
	let codec = device_codec();
	let (value, code) = codec.decode(&load("device_valid.json"));
	assert_eq!(code, codec.ok());

	let mut doc = Document::unbounded();
	assert!(codec.encode(&value, doc.slot()));
	let out = doc.into_json();
	assert_eq!(out["mac"], "DE:AD:BE:EF:00:01");
	assert_eq!(out["mode"], "static");
	assert_eq!(out["address"], "192.168.1.20");

	let (again, code) = codec.decode(&out);
	assert_eq!(code, codec.ok());
	assert_eq!(again, value);
}

#[test]
fn typed_config_round_trips_through_the_schema() {
	let (value, _) = device_codec().decode(&load("device_dhcp.json"));
	let config = DeviceConfig::from_value(&value).expect("decoded value matches the schema");
	assert_eq!(config.to_value(), value);
}

#[test]
fn encode_fails_when_document_capacity_is_too_small() {
	let codec = device_codec();
	let (value, _) = codec.decode(&load("device_valid.json"));

	let mut doc = Document::with_capacity(64);
	assert!(!codec.encode(&value, doc.slot()));
}

#[test]
fn encode_rejects_values_of_the_wrong_shape() {
	let mut doc = Document::unbounded();
	assert!(device_schema().encode(doc.slot(), &Value::List(vec![Value::Null; 3])).is_err());
	assert!(device_schema().encode(doc.slot(), &Value::U8(1)).is_err());
}

fn remove(doc: &mut JsonValue, member: &str) {
	doc.as_object_mut().expect("fixture is an object").remove(member);
}

fn load(name: &str) -> JsonValue {
	let text = std::fs::read_to_string(fixture_path(name)).expect("fixture exists");
	serde_json::from_str(&text).expect("fixture is valid json")
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
