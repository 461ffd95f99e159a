//! Stat model for combatants.
//!
//! A combatant's readable stats are always `base + modifier`, where the base
//! is rolled once from its rule-table row at construction and the modifier is
//! the sum of all currently active buff payloads. Only `current_hp` mutates
//! outside buff recomputation.
//!
//! ## Principles
//!
//! 1. **Value semantics**: cloning a [`StatBlock`] is a full copy; snapshots
//!    are immune to later mutation of the original.
//! 2. **Deterministic**: pure integer arithmetic, no I/O or randomness.
//! 3. **Idempotent recomputation**: [`StatBlock::set_buffs`] with the same
//!    buff set always yields the same derived values.

pub mod block;
pub mod core;
pub mod modifiers;

pub use block::StatBlock;
pub use core::{BaseStats, StatRange};
pub use modifiers::StatModifiers;
