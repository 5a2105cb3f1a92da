use serde::{Deserialize, Serialize};

/// Identifier of an enemy in `enemyDefinitions`.
pub type EnemyId = String;

/// Enemy definition as served in `enemyDefinitions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: EnemyId,
    pub name: String,

    /// Threat tier, 1 and up. Grades 3+ and 4+ get escalating badges.
    #[serde(default = "default_grade")]
    pub grade: u32,
}

fn default_grade() -> u32 {
    1
}
