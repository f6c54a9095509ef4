//! Capability views for values crossing the [`Codec`](super::Codec) boundary.
//!
//! The codec contract is object-safe, so values cannot cross it as bare
//! generics. [`Value`] and [`Dest`] carry the two capabilities a codec may
//! require: serde serialization and the protobuf message contract. Thanks to
//! blanket impls, plain references coerce directly into the matching variant:
//!
//! ```
//! use polycodec::codec::{Dest, Value};
//!
//! let source = vec![1u32, 2, 3];
//! let value = Value::Serde(&source);
//!
//! let mut sink: Vec<u32> = Vec::new();
//! let dest = Dest::Serde(&mut sink);
//! # let _ = (value, dest);
//! ```

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::codec::Format;
use crate::error::{CodecError, Result};

/// Borrowed value handed to [`Codec::encode`](super::Codec::encode).
pub enum Value<'a> {
    /// Any serde-serializable value.
    Serde(&'a dyn erased_serde::Serialize),
    /// A protobuf message.
    Message(&'a dyn DynMessage),
}

/// Mutable destination handed to [`Codec::decode`](super::Codec::decode).
pub enum Dest<'a> {
    /// Deserialize in place into any `DeserializeOwned` value.
    Serde(&'a mut dyn DecodeTarget),
    /// Merge into a protobuf message.
    Message(&'a mut dyn DynMessage),
    /// Accept the bytes and throw the decoded content away.
    Discard,
}

/// Object-safe view of a protobuf message.
///
/// Blanket-implemented for every [`prost::Message`], so `&msg` and
/// `&mut msg` coerce directly into [`Value::Message`] and [`Dest::Message`].
pub trait DynMessage: Send + Sync {
    /// Serializes the message to its protobuf wire form.
    fn marshal(&self) -> Vec<u8>;

    /// Replaces the message contents by parsing the protobuf wire form.
    fn unmarshal(&mut self, bytes: &[u8]) -> std::result::Result<(), prost::DecodeError>;
}

impl<M: prost::Message> DynMessage for M {
    fn marshal(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn unmarshal(&mut self, bytes: &[u8]) -> std::result::Result<(), prost::DecodeError> {
        // A full unmarshal, not a merge: stale fields must not survive.
        self.clear();
        self.merge(bytes)
    }
}

/// In-place deserialization through a type-erased deserializer.
///
/// Blanket-implemented for every `DeserializeOwned` type; the serde-backed
/// codecs drive it with their own deserializer erased behind
/// [`erased_serde::Deserializer`].
pub trait DecodeTarget {
    /// Replaces `self` with the value produced by `deserializer`.
    fn deserialize_from(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> std::result::Result<(), erased_serde::Error>;
}

impl<T: DeserializeOwned> DecodeTarget for T {
    fn deserialize_from(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> std::result::Result<(), erased_serde::Error> {
        *self = erased_serde::deserialize(deserializer)?;
        Ok(())
    }
}

/// Drives a serde-backed format's deserializer into the destination.
///
/// Shared by the JSON, MessagePack and BSON codecs: the destination decides
/// what happens, the format only supplies the deserializer. A discard
/// destination still parses the bytes, so malformed input surfaces an error.
pub(crate) fn decode_serde<'de, D>(format: Format, deserializer: D, dest: Dest<'_>) -> Result<()>
where
    D: serde::Deserializer<'de>,
{
    let mut de = <dyn erased_serde::Deserializer>::erase(deserializer);
    match dest {
        Dest::Serde(target) => target
            .deserialize_from(&mut de)
            .map_err(|e| CodecError::decode(format, e)),
        Dest::Discard => {
            erased_serde::deserialize::<IgnoredAny>(&mut de)
                .map_err(|e| CodecError::decode(format, e))?;
            Ok(())
        }
        Dest::Message(_) => Err(CodecError::decode(
            format,
            "destination is a protobuf message, not a serde value",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, prost::Message)]
    struct Record {
        #[prost(string, tag = "1")]
        name: String,
        #[prost(int32, tag = "2")]
        count: i32,
    }

    #[test]
    fn test_dyn_message_round_trip() {
        let record = Record {
            name: "answer".to_string(),
            count: 42,
        };
        let bytes = DynMessage::marshal(&record);

        let mut out = Record::default();
        DynMessage::unmarshal(&mut out, &bytes).unwrap();
        assert_eq!(out, record);
    }

    #[test]
    fn test_unmarshal_replaces_previous_contents() {
        let empty = Record::default();
        let bytes = DynMessage::marshal(&empty);

        let mut out = Record {
            name: "stale".to_string(),
            count: 99,
        };
        DynMessage::unmarshal(&mut out, &bytes).unwrap();

        assert_eq!(out.name, "");
        assert_eq!(out.count, 0);
    }

    #[test]
    fn test_decode_target_in_place() {
        let mut de = serde_json::Deserializer::from_slice(b"[1,2,3]");
        let mut de = <dyn erased_serde::Deserializer>::erase(&mut de);

        let mut out: Vec<i32> = Vec::new();
        out.deserialize_from(&mut de).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }
}
