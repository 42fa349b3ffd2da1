use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How neighbor lookups behave at the grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Off-grid neighbors count as dead.
    Bounded,
    /// Coordinates wrap modulo width/height.
    #[default]
    Toroidal,
}

impl BoundaryPolicy {
    /// Resolves `index + offset` along an axis of length `len`.
    ///
    /// Returns `None` when the neighbor falls off a bounded grid.
    #[inline]
    #[must_use]
    pub fn resolve(self, index: usize, offset: isize, len: usize) -> Option<usize> {
        let target = index as isize + offset;
        match self {
            BoundaryPolicy::Bounded => {
                if target < 0 || target >= len as isize {
                    None
                } else {
                    Some(target as usize)
                }
            }
            BoundaryPolicy::Toroidal => Some(target.rem_euclid(len as isize) as usize),
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryPolicy::Bounded => write!(f, "bounded"),
            BoundaryPolicy::Toroidal => write!(f, "toroidal"),
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bounded" | "dead" | "clamped" => Ok(BoundaryPolicy::Bounded),
            "toroidal" | "torus" | "wrap" => Ok(BoundaryPolicy::Toroidal),
            other => Err(anyhow::anyhow!("unknown boundary policy '{other}'")),
        }
    }
}
