use std::collections::HashSet;

use crate::model::db::{ForceMiniatureModel, ForceModel, LanceModel, MiniatureModel};

/// A miniature assignment together with the miniature it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentEntry {
    pub assignment: ForceMiniatureModel,
    pub miniature: MiniatureModel,
}

/// A lance with its assignments ordered by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanceAggregate {
    pub lance: LanceModel,
    pub assignments: Vec<AssignmentEntry>,
}

impl LanceAggregate {
    /// Display name of the lance, `Unnamed` when no name is set.
    pub fn display_name(&self) -> &str {
        self.lance.name.as_deref().unwrap_or("Unnamed")
    }
}

/// A force loaded with all of its lances and their assignments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForceAggregate {
    pub force: ForceModel,
    pub lances: Vec<LanceAggregate>,
}

impl ForceAggregate {
    /// Internal ids of every miniature placed anywhere in the force.
    pub fn miniature_ids(&self) -> HashSet<i32> {
        self.lances
            .iter()
            .flat_map(|lance| lance.assignments.iter())
            .map(|entry| entry.miniature.id)
            .collect()
    }

    pub fn miniature_count(&self) -> usize {
        self.lances.iter().map(|lance| lance.assignments.len()).sum()
    }
}
