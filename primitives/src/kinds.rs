//! Closed enumerations carried as integer codes on the wire.

#[cfg(test)]
#[path = "kinds_test.rs"]
mod kinds_test;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Which side a unit belongs to. Encoded in the `enemy` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Side {
    /// `-1`: controlled by the bot being debugged.
    Ally,
    /// `0`
    #[default]
    Neutral,
    /// `1`
    Enemy,
}

impl Side {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Ally => -1,
            Self::Neutral => 0,
            Self::Enemy => 1,
        }
    }
}

impl From<Side> for i32 {
    fn from(side: Side) -> Self {
        side.code()
    }
}

impl TryFrom<i32> for Side {
    type Error = CodecError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::Ally),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Enemy),
            _ => Err(CodecError::UnknownCode { kind: "side", code }),
        }
    }
}

/// Unit texture selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum UnitType {
    /// `0`: drawn as a plain circle.
    #[default]
    Unknown,
    /// `1`
    Tank,
    /// `2`: infantry fighting vehicle.
    Ifv,
    /// `3`: armored repair and recovery vehicle.
    Arrv,
    /// `4`
    Helicopter,
    /// `5`
    Fighter,
}

impl UnitType {
    pub const ALL: [Self; 6] = [
        Self::Unknown,
        Self::Tank,
        Self::Ifv,
        Self::Arrv,
        Self::Helicopter,
        Self::Fighter,
    ];

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Tank => 1,
            Self::Ifv => 2,
            Self::Arrv => 3,
            Self::Helicopter => 4,
            Self::Fighter => 5,
        }
    }
}

impl From<UnitType> for i32 {
    fn from(unit_type: UnitType) -> Self {
        unit_type.code()
    }
}

impl TryFrom<i32> for UnitType {
    type Error = CodecError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(CodecError::UnknownCode { kind: "unit_type", code })
    }
}

/// Terrain or weather classification of a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum AreaType {
    /// `0`: left undrawn.
    #[default]
    Unknown,
    /// `1`
    Forest,
    /// `2`
    Swamp,
    /// `3`
    Rain,
    /// `4`
    Cloud,
}

impl AreaType {
    pub const ALL: [Self; 5] = [
        Self::Unknown,
        Self::Forest,
        Self::Swamp,
        Self::Rain,
        Self::Cloud,
    ];

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Forest => 1,
            Self::Swamp => 2,
            Self::Rain => 3,
            Self::Cloud => 4,
        }
    }
}

impl From<AreaType> for i32 {
    fn from(area_type: AreaType) -> Self {
        area_type.code()
    }
}

impl TryFrom<i32> for AreaType {
    type Error = CodecError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(CodecError::UnknownCode { kind: "area_type", code })
    }
}
