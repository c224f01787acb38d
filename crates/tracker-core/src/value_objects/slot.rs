//! Team slot within a match

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two fixed team positions of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    /// Both slots in display order
    pub const ALL: [Slot; 2] = [Slot::One, Slot::Two];

    /// Numeric position as stored (`1` or `2`)
    #[inline]
    pub const fn position(self) -> i16 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Parse a stored or user-supplied position
    pub fn from_position(position: i64) -> Option<Self> {
        match position {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    /// The opposing slot
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// Error for positions outside {1, 2}
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid slot position: {0}")]
pub struct InvalidSlot(pub i64);

impl TryFrom<i16> for Slot {
    type Error = InvalidSlot;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::from_position(i64::from(value)).ok_or(InvalidSlot(i64::from(value)))
    }
}

impl From<Slot> for i16 {
    fn from(slot: Slot) -> Self {
        slot.position()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position() {
        assert_eq!(Slot::from_position(1), Some(Slot::One));
        assert_eq!(Slot::from_position(2), Some(Slot::Two));
        assert_eq!(Slot::from_position(0), None);
        assert_eq!(Slot::from_position(3), None);
    }

    #[test]
    fn test_other() {
        assert_eq!(Slot::One.other(), Slot::Two);
        assert_eq!(Slot::Two.other(), Slot::One);
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&Slot::Two).unwrap(), "2");
        assert!(serde_json::from_str::<Slot>("5").is_err());
    }
}
