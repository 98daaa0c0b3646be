//! An action's social-stance tag.
//!
//! `intent` is consumed by whichever `RewardCalculator` an embedder plugs
//! in, so it's modeled as a closed enum rather than a free-form string:
//! every reward calculator in or out of this workspace can match on it
//! exhaustively instead of guessing at accepted spellings.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Intent {
    Cooperative,
    Competitive,
    Solitary,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::Cooperative => "cooperative",
            Intent::Competitive => "competitive",
            Intent::Solitary => "solitary",
        };
        write!(f, "{s}")
    }
}
