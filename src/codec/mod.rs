mod array;
mod choice;
mod cursor;
mod doc;
mod error;
mod field;
mod ipv4;
mod levels;
mod mac;
mod record;
mod scalar;
mod status;
mod string;
mod terminated;
mod value;

/// Fixed-capacity homogeneous list field.
pub use array::{ArrayCodes, FixedArray};
/// String-to-value enumeration field.
pub use choice::{Choice, ChoiceCodes, StringEnum};
/// Capacity-bounded destination document.
pub use doc::{Budget, Document, NODE_COST, Slot};
/// Error and result aliases.
pub use error::{EncodeError, Result};
/// Field contract and root codec wrapper.
pub use field::{Codec, Decoded, Field};
/// Dotted-quad address field.
pub use ipv4::{Ipv4Address, Ipv4Codes};
/// PWM duty-cycle level table field.
pub use levels::{LEVEL_SLOTS, LevelCodes, LevelTable, MAX_LEVELS, PwmLevelTable};
/// Hardware address field.
pub use mac::{MAC_ADDRESS_LEN, MacAddress, MacCodes};
/// Named-member record field.
pub use record::{Entry, Record, RecordCodes};
/// Primitive scalar fields.
pub use scalar::{Primitive, Scalar, ScalarCodes};
/// Numeric validation outcome.
pub use status::StatusCode;
/// Length-bounded string field.
pub use string::{BoundedString, StringCodes};
/// Zero-terminated byte list field.
pub use terminated::{TerminatedBytes, TerminatedCodes, terminated_len};
/// Decoded runtime value type.
pub use value::Value;
