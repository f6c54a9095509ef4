//! JSON codec using `serde_json`.
//!
//! Field mapping follows the library's defaults; no custom logic is layered
//! on top.

use crate::codec::{value, Codec, Dest, Format, Value};
use crate::error::{CodecError, Result};

/// JSON codec for serde-serializable values.
#[derive(Debug, Clone, Copy)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, value: Value<'_>) -> Result<Vec<u8>> {
        match value {
            Value::Serde(v) => {
                serde_json::to_vec(v).map_err(|e| CodecError::encode(Format::Json, e))
            }
            Value::Message(_) => Err(CodecError::encode(
                Format::Json,
                "protobuf messages are not serde-serializable",
            )),
        }
    }

    fn decode(&self, bytes: &[u8], dest: Dest<'_>) -> Result<()> {
        let mut de = serde_json::Deserializer::from_slice(bytes);
        value::decode_serde(Format::Json, &mut de, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
    struct Person {
        name: String,
        age: u32,
        address: String,
    }

    #[test]
    fn test_round_trip_struct() {
        let person = Person {
            name: "Javad".to_string(),
            age: 30,
            address: "example address 1".to_string(),
        };

        let bytes = JsonCodec.encode(Value::Serde(&person)).unwrap();

        let mut decoded = Person::default();
        JsonCodec.decode(&bytes, Dest::Serde(&mut decoded)).unwrap();
        assert_eq!(decoded, person);
    }

    #[test]
    fn test_output_is_plain_json() {
        let person = Person {
            name: "Javad".to_string(),
            age: 30,
            address: "example address 1".to_string(),
        };

        let bytes = JsonCodec.encode(Value::Serde(&person)).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert_eq!(
            text,
            r#"{"name":"Javad","age":30,"address":"example address 1"}"#
        );
    }

    #[test]
    fn test_round_trip_primitives() {
        let bytes = JsonCodec.encode(Value::Serde(&12345i64)).unwrap();
        let mut n: i64 = 0;
        JsonCodec.decode(&bytes, Dest::Serde(&mut n)).unwrap();
        assert_eq!(n, 12345);

        let bytes = JsonCodec.encode(Value::Serde(&true)).unwrap();
        let mut b = false;
        JsonCodec.decode(&bytes, Dest::Serde(&mut b)).unwrap();
        assert!(b);
    }

    #[test]
    fn test_decode_error_on_invalid_data() {
        let mut out = Person::default();
        let err = JsonCodec
            .decode(b"not valid json", Dest::Serde(&mut out))
            .unwrap_err();
        assert!(matches!(err, CodecError::Decode { format: Format::Json, .. }));
    }

    #[test]
    fn test_discard_destination() {
        JsonCodec.decode(b"{\"any\": 1}", Dest::Discard).unwrap();

        let err = JsonCodec.decode(b"{broken", Dest::Discard).unwrap_err();
        assert!(matches!(err, CodecError::Decode { format: Format::Json, .. }));
    }
}
