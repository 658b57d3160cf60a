//! Points and flat point lists.
//!
//! A single point travels as a two-element array (`"p": [x, y]`). Point lists
//! travel flattened (`"points": [x1, y1, x2, y2, ...]`), which is what the
//! viewer's polyline and triangle decoders expect.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CodecError;

/// A point in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered points, serialized as one interleaved coordinate sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Points(pub Vec<Point>);

impl Points {
    /// Pair up an interleaved `[x1, y1, x2, y2, ...]` sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OddCoordinateCount`] when a coordinate is left
    /// without its partner.
    pub fn from_flat(flat: &[f64]) -> Result<Self, CodecError> {
        if flat.len() % 2 != 0 {
            return Err(CodecError::OddCoordinateCount(flat.len()));
        }
        Ok(Self(
            flat.chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect(),
        ))
    }

    /// Interleave the points into `[x1, y1, x2, y2, ...]`.
    #[must_use]
    pub fn flatten(&self) -> Vec<f64> {
        self.0.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }
}

impl<P: Into<Point>> FromIterator<P> for Points {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Point>> for Points {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len() * 2))?;
        for point in &self.0 {
            seq.serialize_element(&point.x)?;
            seq.serialize_element(&point.y)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Points {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flat = Vec::<f64>::deserialize(deserializer)?;
        Self::from_flat(&flat).map_err(D::Error::custom)
    }
}
