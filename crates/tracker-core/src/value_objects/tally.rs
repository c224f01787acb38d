//! Vote tally and percentage split for a two-slot match
//!
//! Percentages are rounded to one decimal with round-half-to-even. The
//! computation is done on integer tenths so it is exact, and with
//! half-to-even the two shares of a non-empty tally always add up to 100.0.

use serde::Serialize;

use super::slot::Slot;

/// Vote counts of both slots of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VoteTally {
    pub slot_one: u32,
    pub slot_two: u32,
}

/// Percentage split of a tally
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VoteShares {
    pub slot_one: f64,
    pub slot_two: f64,
}

impl VoteTally {
    pub const fn new(slot_one: u32, slot_two: u32) -> Self {
        Self { slot_one, slot_two }
    }

    /// Votes of one slot
    #[inline]
    pub const fn votes(&self, slot: Slot) -> u32 {
        match slot {
            Slot::One => self.slot_one,
            Slot::Two => self.slot_two,
        }
    }

    /// Total votes cast on the match
    #[inline]
    pub const fn total(&self) -> u64 {
        self.slot_one as u64 + self.slot_two as u64
    }

    /// Percentage of one slot (0.0 when nobody voted)
    pub fn percent(&self, slot: Slot) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        rounded_tenths(u64::from(self.votes(slot)), total) as f64 / 10.0
    }

    /// Percentages of both slots
    pub fn shares(&self) -> VoteShares {
        VoteShares {
            slot_one: self.percent(Slot::One),
            slot_two: self.percent(Slot::Two),
        }
    }
}

/// `1000 * votes / total` rounded half-to-even
fn rounded_tenths(votes: u64, total: u64) -> u64 {
    let numerator = votes * 1000;
    let quotient = numerator / total;
    let twice_remainder = (numerator % total) * 2;

    if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
