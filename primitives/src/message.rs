//! The message model: one variant per `type` discriminator.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

use crate::color::{Color, Paint};
use crate::geometry::{Point, Points};
use crate::kinds::{AreaType, Side, UnitType};

/// A single self-contained message on the wire.
///
/// Serialized as a JSON object whose `type` field names the variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    /// Open polyline through `points`. Lines are two-point polylines.
    Polyline { points: Points, color: Color },
    /// Circle of radius `r` around `p`, outlined unless `fill` is set.
    Circle {
        p: Point,
        r: f64,
        color: Color,
        #[serde(default)]
        fill: bool,
    },
    /// Axis-aligned rectangle between two opposite corners.
    Rectangle {
        tl: Point,
        br: Point,
        color: Paint,
        #[serde(default)]
        fill: bool,
    },
    /// Triangle through three flat-listed vertices. A per-vertex paint is
    /// interpolated across the face.
    Triangle {
        points: Points,
        color: Paint,
        #[serde(default)]
        fill: bool,
    },
    /// Hover text over a circular or rectangular region.
    Popup(Popup),
    /// One game unit with its health and cooldown bars.
    Unit(Unit),
    /// Classification of one grid cell.
    Area {
        x: i32,
        y: i32,
        area_type: AreaType,
    },
    /// Free text shown in the viewer's per-frame message pane.
    #[serde(rename = "message")]
    Text { message: String },
    /// Layer and permanence for the messages that follow.
    Options(Options),
    /// Switch the layer for the messages that follow.
    Layer { value: u32 },
    /// Frame boundary.
    End,
}

impl Message {
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Polyline { .. } => MessageKind::Polyline,
            Self::Circle { .. } => MessageKind::Circle,
            Self::Rectangle { .. } => MessageKind::Rectangle,
            Self::Triangle { .. } => MessageKind::Triangle,
            Self::Popup(_) => MessageKind::Popup,
            Self::Unit(_) => MessageKind::Unit,
            Self::Area { .. } => MessageKind::Area,
            Self::Text { .. } => MessageKind::Message,
            Self::Options(_) => MessageKind::Options,
            Self::Layer { .. } => MessageKind::Layer,
            Self::End => MessageKind::End,
        }
    }

    #[must_use]
    pub fn is_frame_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

/// The `type` discriminator values of this protocol revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Polyline,
    Circle,
    Rectangle,
    Triangle,
    Popup,
    Unit,
    Area,
    Message,
    Options,
    Layer,
    End,
}

impl MessageKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polyline => "polyline",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
            Self::Popup => "popup",
            Self::Unit => "unit",
            Self::Area => "area",
            Self::Message => "message",
            Self::Options => "options",
            Self::Layer => "layer",
            Self::End => "end",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hover text attached to a circular or rectangular region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    #[serde(flatten)]
    pub anchor: PopupAnchor,
    pub text: String,
}

/// Region that shows a popup when hovered.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PopupAnchor {
    /// Within `r` of `p`.
    Circle { p: Point, r: f64 },
    /// Inside the rectangle between `tl` and `br`.
    Rect { tl: Point, br: Point },
}

/// A simulated unit as drawn by the viewer's unit renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub x: f64,
    pub y: f64,
    /// Body radius.
    pub r: f64,
    pub hp: i32,
    pub max_hp: i32,
    /// Ticks until the weapon is ready again.
    #[serde(default)]
    pub rem_cooldown: i32,
    /// Full weapon cooldown in ticks.
    #[serde(default)]
    pub cooldown: i32,
    /// Sent under the `enemy` key for compatibility with older viewers.
    #[serde(rename = "enemy")]
    pub side: Side,
    /// Heading in radians, counter-clockwise, in `[0, 2π)`.
    #[serde(default)]
    pub course: f64,
    /// Highlighted by the viewer.
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub unit_type: UnitType,
}

/// Drawing options for the messages that follow. Absent keys leave the
/// viewer's current setting untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Target layer, `LAYER_MIN..=LAYER_MAX`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<u32>,
    /// Keep the following primitives across frames instead of clearing them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent: Option<bool>,
}
