//! Target vessels (ships)

use crate::core::error::InvalidValue;
use crate::core::types::{TargetId, Tick};

/// Terminal state of a target after scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Intact,
    Destroyed { time_taken: Tick },
}

/// A hostile vessel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    /// Remaining strength; only lowered by the scheduling pass
    strength: u64,
    /// Ticks available for one engagement attempt
    time_limit: Tick,
    outcome: Outcome,
}

impl Target {
    /// Create an intact target. Zero strength or time limit is rejected.
    pub fn new(id: TargetId, strength: u64, time_limit: Tick) -> Result<Self, InvalidValue> {
        if strength == 0 {
            return Err(InvalidValue {
                field: "strength",
                value: strength,
            });
        }
        if time_limit == 0 {
            return Err(InvalidValue {
                field: "time limit",
                value: time_limit,
            });
        }
        Ok(Self {
            id,
            strength,
            time_limit,
            outcome: Outcome::Intact,
        })
    }

    pub fn strength(&self) -> u64 {
        self.strength
    }

    pub fn time_limit(&self) -> Tick {
        self.time_limit
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self.outcome, Outcome::Destroyed { .. })
    }

    /// Ticks the successful engagement took, if destroyed
    pub fn time_taken(&self) -> Option<Tick> {
        match self.outcome {
            Outcome::Destroyed { time_taken } => Some(time_taken),
            Outcome::Intact => None,
        }
    }

    /// Reduce strength by `damage`, returning what is left
    ///
    /// Callers only pass damage below the current strength.
    pub(crate) fn apply_damage(&mut self, damage: u64) -> u64 {
        debug_assert!(damage < self.strength);
        self.strength = self.strength.saturating_sub(damage);
        self.strength
    }

    /// Mark destroyed. Destruction is final; a second call is ignored.
    pub(crate) fn mark_destroyed(&mut self, time_taken: Tick) {
        debug_assert!(time_taken > 0 && time_taken <= self.time_limit);
        if let Outcome::Intact = self.outcome {
            self.outcome = Outcome::Destroyed { time_taken };
        }
    }
}
