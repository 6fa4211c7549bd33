//! Strike Planner - deterministic engagement scheduling of ranged units
//! against hostile vessels

pub mod app;
pub mod command;
pub mod core;
pub mod fleet;
