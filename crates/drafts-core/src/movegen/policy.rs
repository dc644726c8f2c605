//! Capture obligations applied on top of the generated moves.

use std::fmt;
use std::str::FromStr;

use crate::draughts_move::MoveList;

/// How strictly captures are enforced when offering moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapturePolicy {
    /// Every generated move is offered, including every chain prefix and
    /// slides next to available jumps.
    #[default]
    Optional,
    /// When the side to move can capture, only its longest chains are
    /// offered and slides are withheld.
    Maximal,
}

impl CapturePolicy {
    /// Restrict `list` given the largest capture count available to the whole side.
    pub(super) fn restrict(self, list: &mut MoveList, side_max: usize) {
        match self {
            CapturePolicy::Optional => {}
            CapturePolicy::Maximal => {
                if side_max > 0 {
                    list.retain(|mv| mv.capture_count() == side_max);
                }
            }
        }
    }
}

impl fmt::Display for CapturePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapturePolicy::Optional => write!(f, "optional"),
            CapturePolicy::Maximal => write!(f, "maximal"),
        }
    }
}

impl FromStr for CapturePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "optional" => Ok(CapturePolicy::Optional),
            "maximal" => Ok(CapturePolicy::Maximal),
            other => Err(other.to_string()),
        }
    }
}
