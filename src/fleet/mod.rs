//! Fleet engagement planning
//!
//! Load -> schedule (once) -> report (any number of times):
//! - `loader` reads units and targets, targets come out in urgency order
//! - `scheduler` assigns units to targets in a single greedy pass
//! - `report` summarises the final, id-ordered target list

pub mod loader;
pub mod ordering;
pub mod report;
pub mod scheduler;
pub mod targets;
pub mod units;

pub use loader::{load_fleet_file, load_fleet_str, Fleet};
pub use ordering::{identity_order, urgency_order};
pub use report::{destroyed_report, remaining_report, Report};
pub use scheduler::{
    schedule, ticks_to_destroy, Engagement, EngagementKind, EngagementLog, Schedule,
};
pub use targets::{Outcome, Target};
pub use units::{first_available, units_from_rates, Unit};
