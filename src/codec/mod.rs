//! Codec module - the uniform encode/decode contract and one adapter per
//! supported wire format.
//!
//! - [`JsonCodec`] - JSON using `serde_json`
//! - [`MsgPackCodec`] - MessagePack using `rmp-serde` (struct-as-map, self-describing)
//! - [`BsonCodec`] - BSON using the `bson` crate
//! - [`ProtoCodec`] - Protobuf using `prost`
//!
//! # Design
//!
//! Codecs implement the object-safe [`Codec`] trait so the registry can hold
//! them behind `Arc<dyn Codec>`. Values cross the trait boundary as
//! [`Value`]/[`Dest`] capability views rather than bare generics: the
//! serde-backed formats accept any serde value, while the protobuf format
//! accepts only `prost` messages and reports everything else as
//! [`CodecError::NotProtoMessage`](crate::error::CodecError::NotProtoMessage).
//!
//! # Example
//!
//! ```
//! use polycodec::codec::{Codec, Dest, JsonCodec, Value};
//!
//! let bytes = JsonCodec.encode(Value::Serde(&"hello")).unwrap();
//!
//! let mut out = String::new();
//! JsonCodec.decode(&bytes, Dest::Serde(&mut out)).unwrap();
//! assert_eq!(out, "hello");
//! ```

mod bson;
mod json;
mod msgpack;
mod proto;
mod value;

use std::fmt;

use crate::error::Result;

pub use self::bson::BsonCodec;
pub use self::json::JsonCodec;
pub use self::msgpack::MsgPackCodec;
pub use self::proto::ProtoCodec;
pub use self::value::{DecodeTarget, Dest, DynMessage, Value};

/// Identifier of a supported wire format.
///
/// Used as the registry key. `Display` renders the lower-case name that
/// appears in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON text format.
    Json,
    /// MessagePack binary format.
    MsgPack,
    /// BSON document format.
    Bson,
    /// Protobuf wire format.
    Proto,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::MsgPack => "msgpack",
            Format::Bson => "bson",
            Format::Proto => "proto",
        };
        f.write_str(name)
    }
}

/// Uniform encode/decode contract implemented once per wire format.
///
/// Implementations are stateless and safe to share across threads. Encode
/// and decode are synchronous and all-or-nothing: on error the output bytes
/// are absent and the destination must not be trusted.
pub trait Codec: Send + Sync + fmt::Debug {
    /// Serialize a value into its wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented in this format.
    fn encode(&self, value: Value<'_>) -> Result<Vec<u8>>;

    /// Deserialize bytes into the caller-supplied destination, in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are malformed for this format or the
    /// destination is incompatible with it.
    fn decode(&self, bytes: &[u8], dest: Dest<'_>) -> Result<()>;
}
