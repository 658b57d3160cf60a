//! Client for the rewind viewer, a live visualizer for debugging simulations
//! and game bots.
//!
//! A [`RewindClient`] owns one TCP connection to the viewer and turns each
//! drawing call into one JSON message. Messages between two
//! [`RewindClient::end_frame`] calls form one rendered frame.
//!
//! ```no_run
//! use rewind::{Color, RewindClient};
//!
//! # fn main() -> Result<(), rewind::ClientError> {
//! let mut viewer = RewindClient::connect_default()?;
//! viewer.circle((10.0, 20.0), 5.0, Color::RED)?;
//! viewer.message("tick 1")?;
//! viewer.end_frame()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | Connection state and one method per primitive |
//! | [`config`] | Endpoint settings and `REWIND_*` environment overrides |
//! | [`error`] | [`ClientError`] |
//!
//! The wire model itself lives in the [`primitives`] crate and is re-exported
//! here.

pub mod client;
pub mod config;
pub mod error;

pub use client::RewindClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use primitives::{
    self, AreaType, Color, Message, MessageKind, Options, Paint, Point, Points, Popup,
    PopupAnchor, Side, Unit, UnitType, DEFAULT_HOST, DEFAULT_LAYER, DEFAULT_PORT, LAYER_MAX,
    LAYER_MIN, LEGACY_PORT, PROTOCOL_VERSION,
};
