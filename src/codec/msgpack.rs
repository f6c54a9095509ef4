//! MessagePack codec using `rmp-serde`.
//!
//! Encodes with `to_vec_named`, so structs are serialized as maps with
//! field names rather than positional arrays. That keeps the payload
//! self-describing: a decoder needs no out-of-band schema to reconstruct
//! the original structure.

use std::io::Cursor;

use crate::codec::{value, Codec, Dest, Format, Value};
use crate::error::{CodecError, Result};

/// MessagePack codec for serde-serializable values.
///
/// Uses `rmp_serde::to_vec_named` so payloads carry field names.
#[derive(Debug, Clone, Copy)]
pub struct MsgPackCodec;

impl Codec for MsgPackCodec {
    fn encode(&self, value: Value<'_>) -> Result<Vec<u8>> {
        match value {
            Value::Serde(v) => {
                rmp_serde::to_vec_named(&v).map_err(|e| CodecError::encode(Format::MsgPack, e))
            }
            Value::Message(_) => Err(CodecError::encode(
                Format::MsgPack,
                "protobuf messages are not serde-serializable",
            )),
        }
    }

    fn decode(&self, bytes: &[u8], dest: Dest<'_>) -> Result<()> {
        let mut de = rmp_serde::Deserializer::new(Cursor::new(bytes));
        value::decode_serde(Format::MsgPack, &mut de, dest)
    }
}
