//! Wire model and JSON codec for the rewind viewer protocol.
//!
//! Every drawing call becomes one [`Message`], encoded as one compact JSON
//! object and written to the socket with no delimiter or length prefix. The
//! receiver parses the byte stream incrementally, so consecutive objects may
//! arrive glued together or split across reads; [`StreamDecoder`] handles both.
//!
//! This crate freezes a single protocol revision ([`PROTOCOL_VERSION`]):
//! single points are `[x, y]` arrays under `p`, `tl` and `br`, point lists are
//! flat coordinate arrays, and lines are two-point polylines. Older revisions
//! used explicit `x1`/`y1`/`x2`/`y2` fields and are not produced or accepted.

pub mod color;
pub mod geometry;
pub mod kinds;
pub mod message;

pub use color::{Color, Paint};
pub use geometry::{Point, Points};
pub use kinds::{AreaType, Side, UnitType};
pub use message::{Message, MessageKind, Options, Popup, PopupAnchor, Unit};

/// Revision of the message shapes produced by this crate.
pub const PROTOCOL_VERSION: u32 = 2;

/// Address the viewer listens on by default.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the viewer listens on for this revision.
pub const DEFAULT_PORT: u16 = 9111;

/// Port used by first-generation viewers.
pub const LEGACY_PORT: u16 = 7000;

/// Lowest layer id the viewer renders.
pub const LAYER_MIN: u32 = 1;

/// Highest layer id the viewer renders.
pub const LAYER_MAX: u32 = 10;

/// Layer primitives land on when no layer was selected.
pub const DEFAULT_LAYER: u32 = 3;

/// Error returned by the codec functions.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The message could not be serialized.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),
    /// The bytes are not a well-formed message of this revision.
    #[error("failed to decode message: {0}")]
    Decode(#[source] serde_json::Error),
    /// A flat point list had a dangling coordinate.
    #[error("odd number of coordinates in point list: {0}")]
    OddCoordinateCount(usize),
    /// An enum field carried an integer with no matching variant.
    #[error("unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i32 },
    /// A color did not fit in 32 bits.
    #[error("color out of range: {0}")]
    ColorOutOfRange(i64),
}

/// Whether a layer id is one the viewer renders without clamping.
#[must_use]
pub fn layer_in_range(layer: u32) -> bool {
    (LAYER_MIN..=LAYER_MAX).contains(&layer)
}

/// Encode a message as compact JSON bytes, with no trailing delimiter.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails. Non-finite
/// coordinates do not fail; they are written as `null`.
pub fn encode(message: &Message) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(message).map_err(CodecError::Encode)
}

/// Decode every message in a complete, concatenated JSON stream.
///
/// Whitespace between objects is tolerated.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] on the first malformed or truncated object.
pub fn decode_stream(bytes: &[u8]) -> Result<Vec<Message>, CodecError> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Message>()
        .map(|item| item.map_err(CodecError::Decode))
        .collect()
}

/// Incremental decoder for a byte stream that may split objects across reads.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    buffer: Vec<u8>,
}

impl StreamDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every message completed by it.
    ///
    /// An object cut off at the end of the chunk stays buffered until the
    /// next call. When a malformed object follows good ones, the good ones
    /// are returned first and the malformed bytes stay buffered; the next
    /// call (an empty chunk will do) reports the error.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] when the buffer starts with bytes that
    /// cannot form a valid message. The buffer is discarded in that case.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<Message>, CodecError> {
        self.buffer.extend_from_slice(chunk);

        let mut messages = Vec::new();
        let mut consumed = 0;
        let mut failure = None;
        {
            let mut stream = serde_json::Deserializer::from_slice(&self.buffer).into_iter::<Message>();
            while let Some(item) = stream.next() {
                match item {
                    Ok(message) => {
                        messages.push(message);
                        consumed = stream.byte_offset();
                    }
                    Err(err) if err.is_eof() => break,
                    Err(err) => {
                        failure = Some(err);
                        break;
                    }
                }
            }
            if failure.is_none() && messages.is_empty() {
                // Only whitespace before a partial object, if anything.
                consumed = stream.byte_offset();
            }
        }

        match failure {
            Some(err) if messages.is_empty() => {
                self.buffer.clear();
                Err(CodecError::Decode(err))
            }
            _ => {
                self.buffer.drain(..consumed);
                Ok(messages)
            }
        }
    }

    /// Bytes held back waiting for the rest of an object.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buffer.iter().filter(|b| !b.is_ascii_whitespace()).count()
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
