//! Birth/survival neighbor-count rule in `B3/S23` notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A set of Moore-neighbor counts, `0..=8`, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborSet(u16);

impl NeighborSet {
    /// No neighbor counts.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from neighbor counts in `0..=8`.
    #[must_use]
    pub const fn from_counts(counts: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < counts.len() {
            if counts[i] <= 8 {
                bits |= 1 << counts[i];
            }
            i += 1;
        }
        Self(bits)
    }

    /// Whether `count` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(self, count: u8) -> bool {
        count <= 8 && self.0 & (1 << count) != 0
    }

    /// Member counts in ascending order.
    pub fn counts(self) -> impl Iterator<Item = u8> {
        (0..=8u8).filter(move |&n| self.contains(n))
    }
}

/// Outer-totalistic Life rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    pub birth: NeighborSet,
    pub survival: NeighborSet,
}

impl Rule {
    /// Conway's B3/S23.
    pub const CONWAY: Self = Self {
        birth: NeighborSet::from_counts(&[3]),
        survival: NeighborSet::from_counts(&[2, 3]),
    };

    /// Next state of a cell with `neighbors` alive neighbors.
    #[inline]
    #[must_use]
    pub fn next(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survival.contains(neighbors)
        } else {
            self.birth.contains(neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.birth.counts() {
            write!(f, "{n}")?;
        }
        write!(f, "/S")?;
        for n in self.survival.counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

fn parse_counts(part: &str, prefix: char) -> anyhow::Result<NeighborSet> {
    let digits = part
        .strip_prefix(prefix)
        .or_else(|| part.strip_prefix(prefix.to_ascii_lowercase()))
        .ok_or_else(|| anyhow::anyhow!("expected '{prefix}' section, found '{part}'"))?;
    let mut bits = 0u16;
    for c in digits.chars() {
        let n = c
            .to_digit(10)
            .filter(|n| *n <= 8)
            .ok_or_else(|| anyhow::anyhow!("invalid neighbor count '{c}' in '{part}'"))?;
        bits |= 1 << n;
    }
    Ok(NeighborSet(bits))
}

impl FromStr for Rule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (birth, survival) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| anyhow::anyhow!("rule '{s}' is not in B<digits>/S<digits> form"))?;
        Ok(Self {
            birth: parse_counts(birth, 'B')?,
            survival: parse_counts(survival, 'S')?,
        })
    }
}

impl TryFrom<String> for Rule {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}
