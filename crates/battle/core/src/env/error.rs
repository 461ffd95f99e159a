use crate::state::{BuffRowId, CharacterRowId, SkillRowId};

/// Failure to resolve a rule-table row by identifier.
///
/// Static data is assumed present and correct, so a missing row is a caller
/// error: fatal to the constructing call, surfaced immediately, never
/// retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("character row {0} not found")]
    CharacterRowNotFound(CharacterRowId),

    #[error("skill row {0} not found")]
    SkillRowNotFound(SkillRowId),

    #[error("buff row {0} not found")]
    BuffRowNotFound(BuffRowId),
}
