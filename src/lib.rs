//! # polycodec
//!
//! Format-agnostic serialization behind one registry.
//!
//! Callers register codec implementations under a [`Format`] identifier and
//! retrieve them to encode/decode values without hard-coding a wire format
//! at the call site:
//!
//! - **Registry** ([`CodecRegistry`]): thread-safe mapping from format to codec
//! - **Codecs** ([`codec`]): JSON, MessagePack, BSON and Protobuf adapters
//!   behind the uniform [`Codec`] contract
//!
//! ## Example
//!
//! ```
//! use polycodec::{CodecRegistry, Dest, Format, Value};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let registry = CodecRegistry::with_defaults();
//! let codec = registry.get(Format::MsgPack).unwrap();
//!
//! let person = Person {
//!     name: "Ada".to_string(),
//!     age: 36,
//! };
//! let bytes = codec.encode(Value::Serde(&person)).unwrap();
//!
//! let mut decoded = Person::default();
//! codec.decode(&bytes, Dest::Serde(&mut decoded)).unwrap();
//! assert_eq!(decoded, person);
//! ```

pub mod codec;
pub mod error;
pub mod registry;

pub use codec::{
    BsonCodec, Codec, DecodeTarget, Dest, DynMessage, Format, JsonCodec, MsgPackCodec, ProtoCodec,
    Value,
};
pub use error::{CodecError, Result};
pub use registry::CodecRegistry;
