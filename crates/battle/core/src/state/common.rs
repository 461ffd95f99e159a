use std::fmt;

/// Unique identifier for a combatant within one simulation.
///
/// Assigned from roster order at construction and stable for the simulation's
/// lifetime. Identifiers are never reused, so logged events can reference a
/// combatant long after it died.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which team a combatant fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The opposing side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Life-cycle state of a combatant.
///
/// `Dead` is terminal: a dead combatant's tick is skipped for the rest of the
/// simulation and it never acts again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeState {
    #[default]
    Alive,
    Dead,
}

/// Rule-table row identifier for characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterRowId(pub u16);

impl fmt::Display for CharacterRowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule-table row identifier for skills.
///
/// Also the tie-break key during skill selection: among eligible skills with
/// equal chance, the lower row id sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillRowId(pub u16);

impl fmt::Display for SkillRowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rule-table row identifier for buffs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuffRowId(pub u16);

impl fmt::Display for BuffRowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutually exclusive buff slot: at most one buff per group is active on a
/// combatant at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuffGroupId(pub u16);

/// Buff priority key. A buff with a strictly greater rank is never displaced
/// by a lower-ranked addition to the same group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuffRank(pub u16);

/// Activation probability as a five-digit fixed-point fraction of 1.
///
/// One unit is 1/100,000, so [`Chance::CERTAIN`] (100,000) is 100%. Skill
/// selection draws integers in `[0, 100_000)` and a skill is eligible iff its
/// chance strictly exceeds the draw, which keeps the whole pipeline in
/// integer arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chance(pub u32);

impl Chance {
    /// Number of chance units in a full probability of 1.
    pub const SCALE: u32 = 100_000;

    /// Always eligible: strictly exceeds every possible draw.
    pub const CERTAIN: Self = Self(Self::SCALE);

    /// Never eligible.
    pub const NEVER: Self = Self(0);

    /// Build a chance from a whole percentage, saturating at 100%.
    pub const fn from_percent(percent: u32) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self(percent * (Self::SCALE / 100))
    }

    /// Eligibility test against a draw from `[0, SCALE)`.
    #[inline]
    pub const fn exceeds(self, draw: u32) -> bool {
        self.0 > draw
    }

    /// True if this chance passes every possible draw.
    pub const fn is_certain(self) -> bool {
        self.0 >= Self::SCALE
    }
}

/// Elemental affinity for attacks and defenses.
///
/// Elements form a single advantage cycle; `Neutral` neither gains nor
/// suffers an advantage.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    #[default]
    Neutral,
    Fire,
    Water,
    Earth,
    Wind,
}

impl Element {
    /// Advantage cycle: Fire > Wind > Earth > Water > Fire.
    pub const fn beats(self, other: Element) -> bool {
        matches!(
            (self, other),
            (Element::Fire, Element::Wind)
                | (Element::Wind, Element::Earth)
                | (Element::Earth, Element::Water)
                | (Element::Water, Element::Fire)
        )
    }
}

/// Size classification of a combatant's body, carried for presentation and
/// rule-table completeness.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_from_percent_scales_to_units() {
        assert_eq!(Chance::from_percent(0), Chance::NEVER);
        assert_eq!(Chance::from_percent(100), Chance::CERTAIN);
        assert_eq!(Chance::from_percent(250), Chance::CERTAIN);
        assert_eq!(Chance::from_percent(35).0, 35_000);
    }

    #[test]
    fn certain_chance_exceeds_every_draw() {
        assert!(Chance::CERTAIN.exceeds(0));
        assert!(Chance::CERTAIN.exceeds(Chance::SCALE - 1));
        assert!(!Chance::NEVER.exceeds(0));
    }

    #[test]
    fn element_cycle_is_one_directional() {
        assert!(Element::Fire.beats(Element::Wind));
        assert!(!Element::Wind.beats(Element::Fire));
        assert!(!Element::Neutral.beats(Element::Fire));
        assert!(!Element::Fire.beats(Element::Neutral));
    }
}
