//! Combat resolution system.
//!
//! This module provides pure functions for resolving strikes. All combat
//! logic is deterministic and side-effect free: random draws happen in the
//! engine and arrive here as plain values, so the same inputs always resolve
//! to the same outcome.

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::calculate_damage;
pub use hit::{check_critical, check_dodge};
pub use result::{StrikeOutcome, StrikeResult, resolve_strike};
