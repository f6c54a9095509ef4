//! Protobuf codec using `prost`.
//!
//! Unlike the serde-backed codecs, this one only speaks to values that
//! implement the protobuf message contract ([`DynMessage`](super::DynMessage));
//! anything else fails with
//! [`CodecError::NotProtoMessage`](crate::error::CodecError::NotProtoMessage).
//! Decoding into [`Dest::Discard`] succeeds without touching the bytes,
//! which callers use to accept a payload while dropping its content.

use crate::codec::{Codec, Dest, Format, Value};
use crate::error::{CodecError, Result};

/// Protobuf codec for `prost` messages.
#[derive(Debug, Clone, Copy)]
pub struct ProtoCodec;

impl Codec for ProtoCodec {
    fn encode(&self, value: Value<'_>) -> Result<Vec<u8>> {
        match value {
            Value::Message(m) => Ok(m.marshal()),
            Value::Serde(_) => Err(CodecError::NotProtoMessage(Format::Proto)),
        }
    }

    fn decode(&self, bytes: &[u8], dest: Dest<'_>) -> Result<()> {
        match dest {
            Dest::Message(m) => m
                .unmarshal(bytes)
                .map_err(|e| CodecError::decode(Format::Proto, e)),
            Dest::Discard => Ok(()),
            Dest::Serde(_) => Err(CodecError::NotProtoMessage(Format::Proto)),
        }
    }
}
