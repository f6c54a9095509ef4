//! Codec registry keyed by wire format.
//!
//! The registry owns the format-to-codec mapping. It is explicitly
//! constructed and passed around by the caller; there is no ambient global
//! instance. Registration replaces (last one wins), and the map lock is
//! held only for the duration of the map access, never across an
//! encode/decode call.
//!
//! # Example
//!
//! ```
//! use polycodec::{CodecRegistry, Dest, Format, JsonCodec, Value};
//!
//! let registry = CodecRegistry::new();
//! registry.register(Format::Json, JsonCodec);
//!
//! let codec = registry.get(Format::Json).unwrap();
//! let bytes = codec.encode(Value::Serde(&vec![1, 2, 3])).unwrap();
//!
//! let mut out: Vec<i32> = Vec::new();
//! codec.decode(&bytes, Dest::Serde(&mut out)).unwrap();
//! assert_eq!(out, vec![1, 2, 3]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::codec::{BsonCodec, Codec, Format, JsonCodec, MsgPackCodec, ProtoCodec};
use crate::error::{CodecError, Result};

/// Registry mapping wire formats to codec implementations.
pub struct CodecRegistry {
    codecs: RwLock<HashMap<Format, Arc<dyn Codec>>>,
}

impl CodecRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            codecs: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with all built-in codecs registered.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Format::Json, JsonCodec);
        registry.register(Format::MsgPack, MsgPackCodec);
        registry.register(Format::Bson, BsonCodec);
        registry.register(Format::Proto, ProtoCodec);
        registry
    }

    /// Register a codec for the given format, replacing any previous one.
    ///
    /// Safe to call concurrently with other registrations and lookups.
    pub fn register<C>(&self, format: Format, codec: C)
    where
        C: Codec + 'static,
    {
        self.codecs.write().insert(format, Arc::new(codec));
        tracing::debug!("registered {} codec", format);
    }

    /// Get the codec registered for the given format.
    ///
    /// The returned handle is independent of the registry lock, so it stays
    /// valid (and keeps its codec) across later registrations.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::NotRegistered`] if no codec has been registered
    /// for `format`.
    pub fn get(&self, format: Format) -> Result<Arc<dyn Codec>> {
        self.codecs
            .read()
            .get(&format)
            .cloned()
            .ok_or(CodecError::NotRegistered(format))
    }

    /// Shorthand for [`get`](Self::get) with [`Format::Json`].
    pub fn json(&self) -> Result<Arc<dyn Codec>> {
        self.get(Format::Json)
    }

    /// Shorthand for [`get`](Self::get) with [`Format::MsgPack`].
    pub fn msgpack(&self) -> Result<Arc<dyn Codec>> {
        self.get(Format::MsgPack)
    }

    /// Shorthand for [`get`](Self::get) with [`Format::Bson`].
    pub fn bson(&self) -> Result<Arc<dyn Codec>> {
        self.get(Format::Bson)
    }

    /// Shorthand for [`get`](Self::get) with [`Format::Proto`].
    pub fn proto(&self) -> Result<Arc<dyn Codec>> {
        self.get(Format::Proto)
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
