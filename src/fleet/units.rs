//! Attacking units (troops)
//!
//! A unit has a fixed damage rate and a single mutable flag: whether it is
//! free to take an engagement. Identity is its position in load order.

use std::num::NonZeroU64;

use crate::core::error::InvalidValue;
use crate::core::types::UnitId;

/// A ranged attack unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    /// Damage inflicted per tick
    pub damage_rate: NonZeroU64,
    pub available: bool,
}

impl Unit {
    /// Create an available unit. A zero damage rate is rejected.
    pub fn new(
        id: UnitId,
        name: impl Into<String>,
        damage_rate: u64,
    ) -> Result<Self, InvalidValue> {
        let damage_rate = NonZeroU64::new(damage_rate).ok_or(InvalidValue {
            field: "damage rate",
            value: damage_rate,
        })?;
        Ok(Self {
            id,
            name: name.into(),
            damage_rate,
            available: true,
        })
    }

    /// Total damage this unit deals when engaged for `ticks`
    pub fn damage_over(&self, ticks: u64) -> u64 {
        self.damage_rate.get().saturating_mul(ticks)
    }
}

/// Build units from `(name, rate)` pairs, assigning ids in order
pub fn units_from_rates<I, S>(rates: I) -> Result<Vec<Unit>, InvalidValue>
where
    I: IntoIterator<Item = (S, u64)>,
    S: Into<String>,
{
    rates
        .into_iter()
        .enumerate()
        .map(|(idx, (name, rate))| Unit::new(UnitId(idx), name, rate))
        .collect()
}

/// Index of the first available unit in load order
pub fn first_available(units: &[Unit]) -> Option<usize> {
    units.iter().position(|u| u.available)
}
