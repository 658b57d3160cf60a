//! The viewer connection and one method per drawable primitive.
//!
//! DELIVERY POLICY
//! ===============
//! Drawing is best-effort. Once the connection is closed, either by
//! [`RewindClient::close`] or by a failed write, every further call returns
//! `Ok(())` without touching the transport, so a missing viewer never takes
//! down the host program. The write that fails is still reported as
//! [`ClientError::Send`].
//!
//! Each message is written with one `write_all` while the client is mutably
//! borrowed, so messages never interleave on one connection. Callers sharing a
//! client across threads wrap it in a `Mutex`.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::io::Write;
use std::net::TcpStream;

use primitives::{
    AreaType, Color, Message, Options, Paint, Point, Points, Popup, PopupAnchor, Unit,
    layer_in_range, LAYER_MAX, LAYER_MIN,
};
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Two-state connection: `Open → Closed`, never back.
#[derive(Debug)]
enum Connection<W> {
    Open(W),
    Closed,
}

/// Streams drawing primitives to a rewind viewer.
#[derive(Debug)]
pub struct RewindClient<W: Write = TcpStream> {
    connection: Connection<W>,
}

impl RewindClient<TcpStream> {
    /// Connect to `127.0.0.1:9111`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] if the viewer is not listening.
    pub fn connect_default() -> Result<Self, ClientError> {
        Self::with_config(&ClientConfig::default())
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] if the viewer is not listening.
    pub fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        Self::with_config(&ClientConfig::new(host, port))
    }

    /// Open the connection described by `config`. Blocks until connected.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] for an unusable config and
    /// [`ClientError::Connect`] if the endpoint is unreachable.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let addr = config.addr();

        let stream = TcpStream::connect((config.host.as_str(), config.port)).map_err(|source| {
            ClientError::Connect {
                addr: addr.clone(),
                source,
            }
        })?;
        stream
            .set_nodelay(config.nodelay)
            .map_err(|source| ClientError::Connect {
                addr: addr.clone(),
                source,
            })?;

        debug!(%addr, nodelay = config.nodelay, "connected to viewer");
        Ok(Self::from_writer(stream))
    }
}

impl<W: Write> RewindClient<W> {
    /// Wrap an already open transport, such as a capture file.
    pub fn from_writer(writer: W) -> Self {
        Self {
            connection: Connection::Open(writer),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.connection, Connection::Open(_))
    }

    /// The transport, while the connection is open.
    #[must_use]
    pub fn get_ref(&self) -> Option<&W> {
        match &self.connection {
            Connection::Open(writer) => Some(writer),
            Connection::Closed => None,
        }
    }

    /// Encode `message` and write it as one unit.
    ///
    /// A closed client drops the message and returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Send`] if the write fails; the client is closed
    /// from then on.
    pub fn send(&mut self, message: &Message) -> Result<(), ClientError> {
        let Connection::Open(writer) = &mut self.connection else {
            trace!(kind = %message.kind(), "connection closed, message dropped");
            return Ok(());
        };

        let bytes = primitives::encode(message)?;
        if let Err(source) = writer.write_all(&bytes).and_then(|()| writer.flush()) {
            warn!(kind = %message.kind(), error = %source, "write to viewer failed, closing connection");
            self.connection = Connection::Closed;
            return Err(ClientError::Send(source));
        }

        trace!(kind = %message.kind(), bytes = bytes.len(), "message sent");
        Ok(())
    }

    /// Flush and release the transport. Later calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Send`] if buffered bytes could not be flushed.
    /// The client is closed either way.
    pub fn close(&mut self) -> Result<(), ClientError> {
        match std::mem::replace(&mut self.connection, Connection::Closed) {
            Connection::Open(mut writer) => {
                debug!("closing viewer connection");
                writer.flush().map_err(ClientError::Send)
            }
            Connection::Closed => Ok(()),
        }
    }

    // -- frames and options ---------------------------------------------------

    /// Mark the end of a frame. The viewer renders everything sent since the
    /// previous end as one frame.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn end_frame(&mut self) -> Result<(), ClientError> {
        self.send(&Message::End)
    }

    /// Run `draw`, then end the frame even if `draw` failed.
    ///
    /// # Errors
    ///
    /// Returns the error from `draw` first, otherwise the error from ending
    /// the frame.
    pub fn frame<T>(
        &mut self,
        draw: impl FnOnce(&mut Self) -> Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        let drawn = draw(self);
        let ended = self.end_frame();
        let value = drawn?;
        ended?;
        Ok(value)
    }

    /// Select the layer and/or permanence of the messages that follow.
    /// `None` leaves that setting unchanged.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn set_options(&mut self, layer: Option<u32>, permanent: Option<bool>) -> Result<(), ClientError> {
        if let Some(layer) = layer {
            warn_layer_range(layer);
        }
        self.send(&Message::Options(Options { layer, permanent }))
    }

    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn set_layer(&mut self, layer: u32) -> Result<(), ClientError> {
        warn_layer_range(layer);
        self.send(&Message::Layer { value: layer })
    }

    /// Draw following messages into the permanent frame, which survives `end`.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn set_permanent(&mut self, permanent: bool) -> Result<(), ClientError> {
        self.set_options(None, Some(permanent))
    }

    // -- geometry -------------------------------------------------------------

    /// A line segment, sent as a two-point polyline.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn line(&mut self, from: impl Into<Point>, to: impl Into<Point>, color: Color) -> Result<(), ClientError> {
        self.send(&Message::Polyline {
            points: Points(vec![from.into(), to.into()]),
            color,
        })
    }

    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn polyline<P: Into<Point>>(
        &mut self,
        points: impl IntoIterator<Item = P>,
        color: Color,
    ) -> Result<(), ClientError> {
        self.send(&Message::Polyline {
            points: points.into_iter().collect(),
            color,
        })
    }

    /// Circle outline.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn circle(&mut self, center: impl Into<Point>, radius: f64, color: Color) -> Result<(), ClientError> {
        self.send_circle(center.into(), radius, color, false)
    }

    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn fill_circle(&mut self, center: impl Into<Point>, radius: f64, color: Color) -> Result<(), ClientError> {
        self.send_circle(center.into(), radius, color, true)
    }

    fn send_circle(&mut self, p: Point, r: f64, color: Color, fill: bool) -> Result<(), ClientError> {
        self.send(&Message::Circle { p, r, color, fill })
    }

    /// Rectangle outline between two opposite corners.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn rectangle(
        &mut self,
        top_left: impl Into<Point>,
        bottom_right: impl Into<Point>,
        color: Color,
    ) -> Result<(), ClientError> {
        self.send_rectangle(top_left.into(), bottom_right.into(), color.into(), false)
    }

    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn fill_rectangle(
        &mut self,
        top_left: impl Into<Point>,
        bottom_right: impl Into<Point>,
        color: Color,
    ) -> Result<(), ClientError> {
        self.send_rectangle(top_left.into(), bottom_right.into(), color.into(), true)
    }

    /// Rectangle with one color per corner, in the order
    /// top-left, top-right, bottom-right, bottom-left.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn rectangle_gradient(
        &mut self,
        top_left: impl Into<Point>,
        bottom_right: impl Into<Point>,
        colors: [Color; 4],
        fill: bool,
    ) -> Result<(), ClientError> {
        self.send_rectangle(top_left.into(), bottom_right.into(), colors.into(), fill)
    }

    fn send_rectangle(&mut self, tl: Point, br: Point, color: Paint, fill: bool) -> Result<(), ClientError> {
        self.send(&Message::Rectangle { tl, br, color, fill })
    }

    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn triangle(
        &mut self,
        a: impl Into<Point>,
        b: impl Into<Point>,
        c: impl Into<Point>,
        color: Color,
    ) -> Result<(), ClientError> {
        self.send_triangle([a.into(), b.into(), c.into()], color.into(), false)
    }

    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn fill_triangle(
        &mut self,
        a: impl Into<Point>,
        b: impl Into<Point>,
        c: impl Into<Point>,
        color: Color,
    ) -> Result<(), ClientError> {
        self.send_triangle([a.into(), b.into(), c.into()], color.into(), true)
    }

    /// Triangle with one color per vertex, interpolated by the viewer.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn triangle_gradient(
        &mut self,
        vertices: [Point; 3],
        colors: [Color; 3],
        fill: bool,
    ) -> Result<(), ClientError> {
        self.send_triangle(vertices, colors.into(), fill)
    }

    fn send_triangle(&mut self, vertices: [Point; 3], color: Paint, fill: bool) -> Result<(), ClientError> {
        self.send(&Message::Triangle {
            points: vertices.into_iter().collect(),
            color,
            fill,
        })
    }

    // -- annotations ----------------------------------------------------------

    /// Text shown while the cursor is within `radius` of `center`.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn popup_message(&mut self, center: impl Into<Point>, radius: f64, text: &str) -> Result<(), ClientError> {
        self.send_popup(
            PopupAnchor::Circle {
                p: center.into(),
                r: radius,
            },
            text,
        )
    }

    /// Alias of [`RewindClient::popup_message`].
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn circle_popup(&mut self, center: impl Into<Point>, radius: f64, text: &str) -> Result<(), ClientError> {
        self.popup_message(center, radius, text)
    }

    /// Text shown while the cursor is inside the rectangle.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn rect_popup(
        &mut self,
        top_left: impl Into<Point>,
        bottom_right: impl Into<Point>,
        text: &str,
    ) -> Result<(), ClientError> {
        self.send_popup(
            PopupAnchor::Rect {
                tl: top_left.into(),
                br: bottom_right.into(),
            },
            text,
        )
    }

    fn send_popup(&mut self, anchor: PopupAnchor, text: &str) -> Result<(), ClientError> {
        self.send(&Message::Popup(Popup {
            anchor,
            text: text.to_owned(),
        }))
    }

    /// Append `text` to the frame's message pane.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn message(&mut self, text: &str) -> Result<(), ClientError> {
        self.send(&Message::Text {
            message: text.to_owned(),
        })
    }

    // -- game entities ----------------------------------------------------------

    /// Draw a unit. `course` is rounded to three decimals.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn living_unit(&mut self, unit: &Unit) -> Result<(), ClientError> {
        let unit = Unit {
            course: round_course(unit.course),
            ..*unit
        };
        self.send(&Message::Unit(unit))
    }

    /// Alias of [`RewindClient::living_unit`].
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn unit(&mut self, unit: &Unit) -> Result<(), ClientError> {
        self.living_unit(unit)
    }

    /// Tag grid cell `(x, y)` with a terrain or weather type.
    ///
    /// # Errors
    ///
    /// See [`RewindClient::send`].
    pub fn area_description(&mut self, x: i32, y: i32, area_type: AreaType) -> Result<(), ClientError> {
        self.send(&Message::Area { x, y, area_type })
    }
}

fn round_course(course: f64) -> f64 {
    (course * 1000.0).round() / 1000.0
}

fn warn_layer_range(layer: u32) {
    if !layer_in_range(layer) {
        warn!(layer, min = LAYER_MIN, max = LAYER_MAX, "layer out of range, viewer will clamp it");
    }
}
