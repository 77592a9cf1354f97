//! Schema-driven codec between JSON documents and bounded firmware configuration values.

/// Field types, values, status codes, and the document write model.
pub mod codec;
/// Reference network-device configuration schema.
pub mod device;
