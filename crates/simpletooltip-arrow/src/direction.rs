// Imports
use anyhow::Context;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

/// The edge of the tooltip the arrow points away from.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromPrimitive,
)]
#[serde(rename = "direction")]
pub enum Direction {
    /// The tip points left.
    #[default]
    #[serde(rename = "left")]
    Left = 0,
    /// The tip points up.
    #[serde(rename = "top")]
    Top,
    /// The tip points right.
    #[serde(rename = "right")]
    Right,
    /// The tip points down.
    #[serde(rename = "bottom")]
    Bottom,
    /// Left to the host to resolve. Has no geometry, so nothing gets drawn.
    #[serde(rename = "auto")]
    Auto,
}

impl TryFrom<u32> for Direction {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .with_context(|| format!("Direction try_from::<u32>() for value {value} failed"))
    }
}

impl From<Direction> for u32 {
    fn from(value: Direction) -> Self {
        value as u32
    }
}
