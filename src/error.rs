//! Client error type.

use std::io;

use primitives::CodecError;

/// Error returned by [`crate::RewindClient`] and [`crate::ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The viewer endpoint could not be reached. Not retried.
    #[error("failed to connect to viewer at {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },
    /// A write to an open connection failed. The client is closed afterwards.
    #[error("failed to send message: {0}")]
    Send(#[source] io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}
