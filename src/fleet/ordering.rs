//! The two orderings a target list goes through
//!
//! Urgency order drives scheduling, identity order drives reporting.

use crate::fleet::targets::Target;

/// Ascending by time limit. Stable, so equal limits keep document order.
pub fn urgency_order(mut targets: Vec<Target>) -> Vec<Target> {
    targets.sort_by_key(|t| t.time_limit());
    targets
}

/// Ascending by target id
pub fn identity_order(mut targets: Vec<Target>) -> Vec<Target> {
    targets.sort_by_key(|t| t.id);
    targets
}
