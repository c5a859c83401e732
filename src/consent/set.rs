use std::collections::HashSet;

use crate::consent::category::CategoryId;

/// Categories the visitor has currently agreed to.
///
/// Unique membership, no ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsentSet {
    members: HashSet<CategoryId>,
}

impl ConsentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the id was already a member.
    pub fn insert(&mut self, id: CategoryId) -> bool {
        self.members.insert(id)
    }

    /// Returns `false` if the id was not a member.
    pub fn remove(&mut self, id: &CategoryId) -> bool {
        self.members.remove(id)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryId> {
        self.members.iter()
    }
}

impl FromIterator<CategoryId> for ConsentSet {
    fn from_iter<I: IntoIterator<Item = CategoryId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
