//! Engagement scheduling
//!
//! One greedy pass over targets in urgency order. Each target takes the
//! first free unit in load order:
//! - if the unit can finish it within the time limit the target is destroyed
//!   and the unit is released for the next target;
//! - otherwise the unit fires for the whole time limit, the target keeps the
//!   residual strength, and the unit stays committed for the rest of the pass.
//!
//! When no unit is free the pass stops and every remaining target is left as
//! loaded.

use std::num::NonZeroU64;

use crate::core::types::{TargetId, Tick, UnitId};
use crate::fleet::ordering::identity_order;
use crate::fleet::targets::Target;
use crate::fleet::units::{first_available, Unit};

/// Ticks a unit with `damage_rate` needs to bring `strength` to zero
///
/// Ceiling division: rate 3 against strength 10 needs 4 ticks.
pub fn ticks_to_destroy(strength: u64, damage_rate: NonZeroU64) -> Tick {
    strength.div_ceil(damage_rate.get())
}

/// What happened during one engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementKind {
    Destroyed { ticks: Tick },
    PartialStrike { damage: u64, remaining: u64 },
}

/// A single unit-vs-target assignment made during the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub target: TargetId,
    pub unit: UnitId,
    pub kind: EngagementKind,
}

/// Record of every assignment, in the order they were made
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngagementLog {
    pub engagements: Vec<Engagement>,
    /// First target left unconsidered because every unit was committed
    pub halted_at: Option<TargetId>,
}

impl EngagementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: TargetId, unit: UnitId, kind: EngagementKind) {
        self.engagements.push(Engagement { target, unit, kind });
    }

    pub fn len(&self) -> usize {
        self.engagements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engagements.is_empty()
    }
}

/// Final state after the scheduling pass
///
/// Only reachable through [`schedule`], and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Schedule {
    units: Vec<Unit>,
    targets: Vec<Target>,
    log: EngagementLog,
}

impl Schedule {
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Targets in ascending id order
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn log(&self) -> &EngagementLog {
        &self.log
    }

    pub fn destroyed_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_destroyed()).count()
    }
}

/// Run the scheduling pass
///
/// `targets` must already be in urgency order (see
/// [`urgency_order`](crate::fleet::ordering::urgency_order)); `units` are
/// tried in the order given. The returned targets are in id order.
pub fn schedule(mut units: Vec<Unit>, mut targets: Vec<Target>) -> Schedule {
    let mut log = EngagementLog::new();

    for target in targets.iter_mut() {
        let Some(idx) = first_available(&units) else {
            tracing::warn!(ship = %target.id, "no units available, halting pass");
            log.halted_at = Some(target.id);
            break;
        };

        let unit = &mut units[idx];
        unit.available = false;

        let ticks = ticks_to_destroy(target.strength(), unit.damage_rate);

        if ticks <= target.time_limit() {
            target.mark_destroyed(ticks);
            unit.available = true;
            tracing::debug!(
                ship = %target.id,
                unit = %unit.id,
                ticks,
                "target destroyed"
            );
            log.push(target.id, unit.id, EngagementKind::Destroyed { ticks });
        } else {
            // Unit stays committed: nothing releases it after a partial strike.
            let damage = unit.damage_over(target.time_limit());
            let remaining = target.apply_damage(damage);
            tracing::debug!(
                ship = %target.id,
                unit = %unit.id,
                damage,
                remaining,
                "partial strike"
            );
            log.push(
                target.id,
                unit.id,
                EngagementKind::PartialStrike { damage, remaining },
            );
        }
    }

    let schedule = Schedule {
        units,
        targets: identity_order(targets),
        log,
    };
    let destroyed = schedule.destroyed_count();
    tracing::info!(
        engagements = schedule.log.len(),
        destroyed,
        remaining = schedule.targets.len() - destroyed,
        "scheduling pass complete"
    );

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::ordering::urgency_order;
    use crate::fleet::units::units_from_rates;

    fn target(id: i64, strength: u64, time_limit: Tick) -> Target {
        Target::new(TargetId(id), strength, time_limit).unwrap()
    }

    fn rate(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn test_ticks_round_up() {
        assert_eq!(ticks_to_destroy(10, rate(3)), 4);
        assert_eq!(ticks_to_destroy(9, rate(3)), 3);
        assert_eq!(ticks_to_destroy(1, rate(100)), 1);
    }

    #[test]
    fn test_single_unit_destroys_target() {
        let units = units_from_rates([("Alpha", 5)]).unwrap();
        let result = schedule(units, vec![target(1, 20, 10)]);

        let t = &result.targets()[0];
        assert!(t.is_destroyed());
        assert_eq!(t.time_taken(), Some(4));
        assert!(result.units()[0].available);
    }

    #[test]
    fn test_exact_time_limit_still_destroys() {
        let units = units_from_rates([("Alpha", 5)]).unwrap();
        let result = schedule(units, vec![target(1, 20, 4)]);
        assert_eq!(result.targets()[0].time_taken(), Some(4));
    }

    #[test]
    fn test_partial_strike_reduces_strength_and_keeps_unit() {
        let units = units_from_rates([("Alpha", 2)]).unwrap();
        let result = schedule(units, vec![target(7, 50, 5)]);

        let t = &result.targets()[0];
        assert!(!t.is_destroyed());
        assert_eq!(t.strength(), 40);
        assert!(!result.units()[0].available);
        assert_eq!(
            result.log().engagements[0].kind,
            EngagementKind::PartialStrike {
                damage: 10,
                remaining: 40
            }
        );
    }

    #[test]
    fn test_no_units_leaves_targets_untouched() {
        let targets = urgency_order(vec![target(2, 30, 3), target(1, 10, 8)]);
        let result = schedule(Vec::new(), targets);

        assert!(result.targets().iter().all(|t| !t.is_destroyed()));
        assert_eq!(result.targets()[0].strength(), 10);
        assert_eq!(result.targets()[1].strength(), 30);
        assert!(result.log().is_empty());
        assert_eq!(result.log().halted_at, Some(TargetId(2)));
    }

    #[test]
    fn test_smallest_values_destroy_in_one_tick() {
        let units = units_from_rates([("Alpha", 1)]).unwrap();
        let result = schedule(units, vec![target(1, 1, 1)]);
        assert_eq!(result.targets()[0].time_taken(), Some(1));
    }

    #[test]
    fn test_no_targets_is_noop() {
        let units = units_from_rates([("Alpha", 5)]).unwrap();
        let result = schedule(units, Vec::new());
        assert!(result.targets().is_empty());
        assert!(result.units()[0].available);
        assert_eq!(result.log().halted_at, None);
    }

    #[test]
    fn test_released_unit_is_reused() {
        let units = units_from_rates([("Alpha", 10), ("Bravo", 10)]).unwrap();
        let targets = urgency_order(vec![target(1, 20, 5), target(2, 30, 6)]);
        let result = schedule(units, targets);

        assert_eq!(result.destroyed_count(), 2);
        let used: Vec<_> = result.log().engagements.iter().map(|e| e.unit).collect();
        assert_eq!(used, vec![UnitId(0), UnitId(0)]);
        assert!(result.units().iter().all(|u| u.available));
    }

    #[test]
    fn test_committed_unit_passes_work_to_next() {
        let units = units_from_rates([("Alpha", 1), ("Bravo", 10)]).unwrap();
        let targets = urgency_order(vec![target(1, 100, 2), target(2, 20, 5)]);
        let result = schedule(units, targets);

        let log = &result.log().engagements;
        assert_eq!(log[0].unit, UnitId(0));
        assert_eq!(log[1].unit, UnitId(1));
        assert_eq!(result.targets()[0].strength(), 98);
        assert_eq!(result.targets()[1].time_taken(), Some(2));
    }

    #[test]
    fn test_exhausted_units_halt_pass() {
        let units = units_from_rates([("Alpha", 1)]).unwrap();
        let targets = urgency_order(vec![target(5, 100, 1), target(3, 1, 10)]);
        let result = schedule(units, targets);

        // id 3 would have been trivially destroyed, but the only unit is committed.
        let three = &result.targets()[0];
        assert_eq!(three.id, TargetId(3));
        assert!(!three.is_destroyed());
        assert_eq!(three.strength(), 1);
        assert_eq!(result.log().halted_at, Some(TargetId(3)));
    }

    #[test]
    fn test_result_is_in_id_order() {
        let units = units_from_rates([("Alpha", 100)]).unwrap();
        let targets = urgency_order(vec![target(9, 10, 1), target(2, 10, 3), target(5, 10, 2)]);
        let result = schedule(units, targets);

        let scheduled: Vec<_> = result.log().engagements.iter().map(|e| e.target.0).collect();
        assert_eq!(scheduled, vec![9, 5, 2]);
        let reported: Vec<_> = result.targets().iter().map(|t| t.id.0).collect();
        assert_eq!(reported, vec![2, 5, 9]);
    }
}
