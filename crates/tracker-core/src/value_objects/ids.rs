//! Typed row identifiers
//!
//! Every table uses a store-assigned 64-bit key. Wrapping each one in its own
//! type keeps a `CommentId` from being passed where a `MatchId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw key
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw key
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<i64>() {
                    Ok(v) if v > 0 => Ok(Self(v)),
                    _ => Err(IdParseError::InvalidFormat),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Team primary key
    TeamId
);
define_id!(
    /// Match primary key
    MatchId
);
define_id!(
    /// Primary key of a team's slot within a match
    MatchTeamId
);
define_id!(
    /// Comment primary key
    CommentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!("42".parse::<MatchId>(), Ok(MatchId::new(42)));
        assert_eq!(" 7 ".parse::<CommentId>(), Ok(CommentId::new(7)));
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_positive() {
        assert!("abc".parse::<MatchId>().is_err());
        assert!("0".parse::<MatchId>().is_err());
        assert!("-3".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_display_and_serde() {
        let id = MatchTeamId::new(12);
        assert_eq!(id.to_string(), "12");
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        let back: MatchTeamId = serde_json::from_str("12").unwrap();
        assert_eq!(back, id);
    }
}
