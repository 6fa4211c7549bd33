//! Destroyed / remaining summaries over the final target list
//!
//! Rendered as `<count>, [(<id>, <value>), ...]`.

use std::fmt;

use crate::core::types::TargetId;
use crate::fleet::targets::Target;

/// A list of `(target id, value)` pairs in target id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<(TargetId, u64)>,
}

impl Report {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, [", self.count())?;
        for (i, (id, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", id, value)?;
        }
        write!(f, "]")
    }
}

/// Destroyed targets with the ticks each engagement took
pub fn destroyed_report(targets: &[Target]) -> Report {
    Report {
        entries: targets
            .iter()
            .filter_map(|t| t.time_taken().map(|ticks| (t.id, ticks)))
            .collect(),
    }
}

/// Surviving targets with their residual strength
pub fn remaining_report(targets: &[Target]) -> Report {
    Report {
        entries: targets
            .iter()
            .filter(|t| !t.is_destroyed())
            .map(|t| (t.id, t.strength()))
            .collect(),
    }
}
