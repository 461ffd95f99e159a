//! Timed status effects and the per-combatant buff store.
//!
//! Buffs occupy mutually exclusive group slots. Additions go through one
//! guarded insert ([`BuffSet::add`]) that enforces the override policy: a
//! strictly higher-ranked active buff is never displaced, while an
//! equal-or-higher-ranked incoming buff replaces the slot and refreshes its
//! duration.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::env::BuffRow;
use crate::state::{BuffGroupId, BuffRank, BuffRowId};
use crate::stats::StatModifiers;

/// One active buff on a combatant: an immutable row plus the remaining
/// lifetime in owner ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    row: Arc<BuffRow>,
    remaining: i32,
}

impl Buff {
    /// Instantiate a buff at its row's full duration.
    pub fn from_row(row: Arc<BuffRow>) -> Self {
        let remaining = row.duration as i32;
        Self { row, remaining }
    }

    pub fn row(&self) -> &Arc<BuffRow> {
        &self.row
    }

    pub fn row_id(&self) -> BuffRowId {
        self.row.id
    }

    pub fn group(&self) -> BuffGroupId {
        self.row.group
    }

    pub fn rank(&self) -> BuffRank {
        self.row.rank
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn modifiers(&self) -> &StatModifiers {
        &self.row.modifiers
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0
    }
}

/// Active buffs of one combatant, keyed by group.
///
/// The map is ordered by group id, so iteration (and therefore snapshot
/// content and modifier summation) is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffSet {
    active: BTreeMap<BuffGroupId, Buff>,
}

impl BuffSet {
    /// Creates an empty buff set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Guarded insert implementing the override policy.
    ///
    /// Rejects the addition (no state change) when the group's current buff
    /// outranks the incoming one; otherwise the incoming buff takes the slot
    /// at full duration. Returns whether the buff was stored.
    pub fn add(&mut self, buff: Buff) -> bool {
        if let Some(existing) = self.active.get(&buff.group())
            && existing.rank() > buff.rank()
        {
            return false;
        }
        self.active.insert(buff.group(), buff);
        true
    }

    /// Decrement every active buff's remaining duration by exactly one.
    ///
    /// Expired buffs stay in place until [`BuffSet::remove_expired`]; the two
    /// steps happen at different points of the owner's tick.
    pub fn reduce_durations(&mut self) {
        for buff in self.active.values_mut() {
            buff.remaining -= 1;
        }
    }

    /// Drop every buff whose remaining duration reached zero or below.
    ///
    /// Returns whether any removal occurred, so the caller can skip stat
    /// recomputation and event emission when nothing changed.
    pub fn remove_expired(&mut self) -> bool {
        let before = self.active.len();
        self.active.retain(|_, buff| !buff.is_expired());
        self.active.len() != before
    }

    /// Component-wise sum of every active buff's payload.
    pub fn modifier_total(&self) -> StatModifiers {
        let mut total = StatModifiers::NONE;
        for buff in self.active.values() {
            total.accumulate(buff.modifiers());
        }
        total
    }

    pub fn get(&self, group: BuffGroupId) -> Option<&Buff> {
        self.active.get(&group)
    }

    /// Iterate active buffs in group order.
    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.active.values()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buff(group: u16, rank: u16, duration: u32) -> Buff {
        Buff::from_row(Arc::new(BuffRow::test_row(group * 100 + rank, group, rank, duration)))
    }

    #[test]
    fn lower_rank_never_displaces_higher() {
        let mut set = BuffSet::empty();
        assert!(set.add(buff(1, 10, 3)));
        set.reduce_durations();

        // Rejected: no state change, no duration reset.
        assert!(!set.add(buff(1, 5, 3)));
        let active = set.get(BuffGroupId(1)).unwrap();
        assert_eq!(active.rank(), BuffRank(10));
        assert_eq!(active.remaining(), 2);
    }

    #[test]
    fn equal_rank_replaces_and_refreshes_duration() {
        let mut set = BuffSet::empty();
        set.add(buff(1, 10, 3));
        set.reduce_durations();
        set.reduce_durations();
        assert_eq!(set.get(BuffGroupId(1)).unwrap().remaining(), 1);

        assert!(set.add(buff(1, 10, 3)));
        assert_eq!(set.get(BuffGroupId(1)).unwrap().remaining(), 3);
    }

    #[test]
    fn higher_rank_takes_the_slot() {
        let mut set = BuffSet::empty();
        set.add(buff(1, 5, 3));
        assert!(set.add(buff(1, 10, 2)));

        assert_eq!(set.get(BuffGroupId(1)).unwrap().rank(), BuffRank(10));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn groups_are_independent_slots() {
        let mut set = BuffSet::empty();
        set.add(buff(1, 10, 3));
        set.add(buff(2, 1, 3));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn expiry_happens_exactly_at_zero() {
        let mut set = BuffSet::empty();
        set.add(buff(1, 1, 2));

        set.reduce_durations();
        assert!(!set.remove_expired());
        assert_eq!(set.len(), 1);

        set.reduce_durations();
        assert!(set.remove_expired());
        assert!(set.is_empty());
    }

    #[test]
    fn remove_expired_reports_no_change() {
        let mut set = BuffSet::empty();
        assert!(!set.remove_expired());

        set.add(buff(1, 1, 5));
        set.reduce_durations();
        assert!(!set.remove_expired());
    }
}
