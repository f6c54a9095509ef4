//! BSON codec using the `bson` crate.
//!
//! Delegates to the library's document marshalling. Serde field attributes
//! (renames, skips) apply the same way they do for any other serde format.

use crate::codec::{value, Codec, Dest, Format, Value};
use crate::error::{CodecError, Result};

/// BSON codec for serde-serializable values.
///
/// Values must serialize to a document (a struct or map at the top level),
/// which is what the underlying library requires.
#[derive(Debug, Clone, Copy)]
pub struct BsonCodec;

impl Codec for BsonCodec {
    fn encode(&self, value: Value<'_>) -> Result<Vec<u8>> {
        match value {
            Value::Serde(v) => bson::to_vec(&v).map_err(|e| CodecError::encode(Format::Bson, e)),
            Value::Message(_) => Err(CodecError::encode(
                Format::Bson,
                "protobuf messages are not serde-serializable",
            )),
        }
    }

    fn decode(&self, bytes: &[u8], dest: Dest<'_>) -> Result<()> {
        let doc = bson::Document::from_reader(bytes)
            .map_err(|e| CodecError::decode(Format::Bson, e))?;
        let de = bson::Deserializer::new(bson::Bson::Document(doc));
        value::decode_serde(Format::Bson, de, dest)
    }
}
