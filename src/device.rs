use std::net::Ipv4Addr;

use crate::codec::{
	ArrayCodes, BoundedString, Choice, ChoiceCodes, Codec, Entry, FixedArray, Ipv4Address, Ipv4Codes, LevelCodes, LevelTable, MAC_ADDRESS_LEN, MacAddress,
	MacCodes, PwmLevelTable, Record, RecordCodes, Scalar, ScalarCodes, StatusCode, StringCodes, StringEnum, Value,
};

/// Longest accepted device name in bytes.
pub const NAME_MAX_LEN: usize = 32;

/// Maximum number of output channels.
pub const MAX_CHANNELS: usize = 4;

/// Number of members in the device record.
pub const DEVICE_FIELDS: usize = 8;

/// Root field of a device configuration document.
pub type DeviceSchema = Record<DEVICE_FIELDS>;

macro_rules! device_status {
	($($name:ident = $code:literal => $label:literal,)*) => {
		/// Status codes reported while decoding a device document.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[repr(u32)]
		pub enum DeviceStatus {
			$(
				#[doc = $label]
				$name = $code,
			)*
		}

		impl DeviceStatus {
			/// Every status in code order.
			pub const ALL: &[Self] = &[$(Self::$name,)*];

			/// Stable `member.reason` label.
			pub fn label(self) -> &'static str {
				match self {
					$(Self::$name => $label,)*
				}
			}

			/// Status for a raw code, if it belongs to the device table.
			pub fn from_code(code: StatusCode) -> Option<Self> {
				match code.get() {
					$($code => Some(Self::$name),)*
					_ => None,
				}
			}
		}
	};
}

device_status! {
	Ok = 0 => "ok",
	Missing = 1 => "document.not_present",
	WrongType = 2 => "document.wrong_type",
	NameMissing = 10 => "name.not_present",
	NameWrongType = 11 => "name.wrong_type",
	NameTooShort = 12 => "name.too_short",
	NameTooLong = 13 => "name.too_long",
	ModeMissing = 20 => "mode.not_present",
	ModeWrongType = 21 => "mode.wrong_type",
	ModeInvalid = 22 => "mode.invalid_choice",
	AddressMissing = 30 => "address.not_present",
	AddressWrongType = 31 => "address.wrong_type",
	AddressInvalidCharacter = 32 => "address.invalid_character",
	AddressOutOfRange = 33 => "address.out_of_range",
	AddressMissingField = 34 => "address.missing_field",
	AddressExcessCharacters = 35 => "address.excess_characters",
	GatewayMissing = 40 => "gateway.not_present",
	GatewayWrongType = 41 => "gateway.wrong_type",
	GatewayInvalidCharacter = 42 => "gateway.invalid_character",
	GatewayOutOfRange = 43 => "gateway.out_of_range",
	GatewayMissingField = 44 => "gateway.missing_field",
	GatewayExcessCharacters = 45 => "gateway.excess_characters",
	MacMissing = 50 => "mac.not_present",
	MacWrongType = 51 => "mac.wrong_type",
	MacInvalidCharacter = 52 => "mac.invalid_character",
	MacInvalidSeparator = 53 => "mac.invalid_separator",
	MacOutOfRange = 54 => "mac.out_of_range",
	MacMissingField = 55 => "mac.missing_field",
	MacExcessCharacters = 56 => "mac.excess_characters",
	PwmMissing = 60 => "pwm.not_present",
	PwmWrongType = 61 => "pwm.wrong_type",
	PwmTooShort = 62 => "pwm.too_short",
	PwmTooLong = 63 => "pwm.too_long",
	PwmLevelZero = 64 => "pwm.level_zero",
	PwmLevelNotIncreasing = 65 => "pwm.level_not_increasing",
	PwmLevelMissing = 66 => "pwm.level_not_present",
	PwmLevelWrongType = 67 => "pwm.level_wrong_type",
	ChannelsMissing = 70 => "channels.not_present",
	ChannelsWrongType = 71 => "channels.wrong_type",
	ChannelsTooLong = 72 => "channels.too_long",
	ChannelMissing = 73 => "channels.element_not_present",
	ChannelWrongType = 74 => "channels.element_wrong_type",
	EnabledMissing = 80 => "enabled.not_present",
	EnabledWrongType = 81 => "enabled.wrong_type",
}

impl From<DeviceStatus> for StatusCode {
	fn from(status: DeviceStatus) -> Self {
		StatusCode(status as u32)
	}
}

/// Addressing mode of the device network interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NetworkMode {
	/// Interface disabled.
	#[default]
	Off = 0,
	/// Address leased from a DHCP server.
	Dhcp = 1,
	/// Address taken from the `address` member.
	Static = 2,
}

impl NetworkMode {
	/// Every mode in wire order.
	pub const ALL: [Self; 3] = [Self::Off, Self::Dhcp, Self::Static];

	/// Document-side key.
	pub fn key(self) -> &'static str {
		match self {
			Self::Off => "off",
			Self::Dhcp => "dhcp",
			Self::Static => "static",
		}
	}

	/// Mode for a stored discriminant.
	pub fn from_u8(raw: u8) -> Option<Self> {
		Self::ALL.into_iter().find(|mode| *mode as u8 == raw)
	}
}

/// Build the device configuration schema.
///
/// Members, in declaration order: `name`, `mode`, `address`, `gateway`,
/// `mac`, `pwm`, `channels`, `enabled`. Only `address` and `gateway` may be
/// null.
pub fn device_schema() -> DeviceSchema {
	use DeviceStatus as S;

	let name = BoundedString::new(
		1,
		NAME_MAX_LEN,
		StringCodes {
			not_present: S::NameMissing.into(),
			wrong_type: S::NameWrongType.into(),
			too_short: S::NameTooShort.into(),
			too_long: S::NameTooLong.into(),
		},
	);
	let mode = StringEnum::new(
		NetworkMode::ALL.into_iter().map(|mode| Choice::new(mode.key(), mode as u8)),
		ChoiceCodes {
			not_present: S::ModeMissing.into(),
			wrong_type: S::ModeWrongType.into(),
			invalid_choice: S::ModeInvalid.into(),
		},
	);
	let address = Ipv4Address::new(Ipv4Codes {
		not_present: S::AddressMissing.into(),
		wrong_type: S::AddressWrongType.into(),
		invalid_character: S::AddressInvalidCharacter.into(),
		out_of_range: S::AddressOutOfRange.into(),
		missing_field: S::AddressMissingField.into(),
		excess_characters: S::AddressExcessCharacters.into(),
	});
	let gateway = Ipv4Address::new(Ipv4Codes {
		not_present: S::GatewayMissing.into(),
		wrong_type: S::GatewayWrongType.into(),
		invalid_character: S::GatewayInvalidCharacter.into(),
		out_of_range: S::GatewayOutOfRange.into(),
		missing_field: S::GatewayMissingField.into(),
		excess_characters: S::GatewayExcessCharacters.into(),
	});
	let mac = MacAddress::new(MacCodes {
		not_present: S::MacMissing.into(),
		wrong_type: S::MacWrongType.into(),
		invalid_character: S::MacInvalidCharacter.into(),
		invalid_separator: S::MacInvalidSeparator.into(),
		out_of_range: S::MacOutOfRange.into(),
		missing_field: S::MacMissingField.into(),
		excess_characters: S::MacExcessCharacters.into(),
	});
	let pwm = PwmLevelTable::new(LevelCodes {
		not_present: S::PwmMissing.into(),
		wrong_type: S::PwmWrongType.into(),
		too_short: S::PwmTooShort.into(),
		too_long: S::PwmTooLong.into(),
		level_zero: S::PwmLevelZero.into(),
		level_not_increasing: S::PwmLevelNotIncreasing.into(),
		level_not_present: S::PwmLevelMissing.into(),
		level_wrong_type: S::PwmLevelWrongType.into(),
	});
	let channels = FixedArray::<MAX_CHANNELS>::new(
		Scalar::<u16>::new(ScalarCodes {
			not_present: S::ChannelMissing.into(),
			wrong_type: S::ChannelWrongType.into(),
		}),
		ArrayCodes {
			not_present: S::ChannelsMissing.into(),
			wrong_type: S::ChannelsWrongType.into(),
			too_long: S::ChannelsTooLong.into(),
		},
	);
	let enabled = Scalar::<bool>::new(ScalarCodes {
		not_present: S::EnabledMissing.into(),
		wrong_type: S::EnabledWrongType.into(),
	});

	Record::new(
		[
			Entry::new("name", name),
			Entry::new("mode", mode),
			Entry::new("address", address.optional()),
			Entry::new("gateway", gateway.optional()),
			Entry::new("mac", mac),
			Entry::new("pwm", pwm),
			Entry::new("channels", channels),
			Entry::new("enabled", enabled),
		],
		RecordCodes {
			not_present: S::Missing.into(),
			wrong_type: S::WrongType.into(),
		},
	)
}

/// Device schema wrapped with [`DeviceStatus::Ok`] as its success code.
pub fn device_codec() -> Codec<DeviceSchema> {
	Codec::new(device_schema(), DeviceStatus::Ok.into())
}

/// Typed view of a decoded device document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
	/// Human-readable device name.
	pub name: String,
	/// Interface addressing mode.
	pub mode: NetworkMode,
	/// Static interface address.
	pub address: Option<Ipv4Addr>,
	/// Default gateway.
	pub gateway: Option<Ipv4Addr>,
	/// Hardware address.
	pub mac: [u8; MAC_ADDRESS_LEN],
	/// PWM duty-cycle levels.
	pub pwm: LevelTable,
	/// Per-channel output values.
	pub channels: Vec<u16>,
	/// Whether the device outputs are enabled.
	pub enabled: bool,
}

impl DeviceConfig {
	/// Rebuild from a value produced by [`device_schema`].
	pub fn from_value(value: &Value) -> Option<Self> {
		let [name, mode, address, gateway, mac, pwm, channels, enabled] = value.as_list()? else {
			return None;
		};

		Some(Self {
			name: name.as_str()?.to_owned(),
			mode: NetworkMode::from_u8(mode.as_u8()?)?,
			address: optional_address(address)?,
			gateway: optional_address(gateway)?,
			mac: mac.as_bytes()?.try_into().ok()?,
			pwm: LevelTable::from_value(pwm)?,
			channels: channels.as_list()?.iter().map(Value::as_u16).collect::<Option<_>>()?,
			enabled: enabled.as_bool()?,
		})
	}

	/// Value shaped for [`device_schema`].
	pub fn to_value(&self) -> Value {
		Value::List(vec![
			Value::from(self.name.as_str()),
			Value::U8(self.mode as u8),
			Value::from(self.address.map(u32::from)),
			Value::from(self.gateway.map(u32::from)),
			Value::from(&self.mac[..]),
			self.pwm.to_value(),
			Value::List(self.channels.iter().copied().map(Value::from).collect()),
			Value::Bool(self.enabled),
		])
	}
}

fn optional_address(value: &Value) -> Option<Option<Ipv4Addr>> {
	match value {
		Value::Null => Some(None),
		other => other.as_u32().map(|raw| Some(Ipv4Addr::from(raw))),
	}
}
