use std::collections::HashMap;

use crate::models::CommitRecord;

/// Column per primary branch, dense from 0 in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap<'a> {
    columns: HashMap<&'a str, usize>,
    order: Vec<&'a str>,
}

impl<'a> ColumnMap<'a> {
    /// Assign columns over the sorted sequence in a single pass.
    pub fn assign(sorted: &[&'a CommitRecord]) -> Self {
        sorted.iter().fold(ColumnMap::default(), |mut map, &commit| {
            map.insert(commit.primary_branch());
            map
        })
    }

    /// Returns the column for `branch`, allocating the next one if unseen.
    fn insert(&mut self, branch: &'a str) -> usize {
        if let Some(&column) = self.columns.get(branch) {
            return column;
        }
        let column = self.order.len();
        self.columns.insert(branch, column);
        self.order.push(branch);
        column
    }

    pub fn column_of(&self, branch: &str) -> Option<usize> {
        self.columns.get(branch).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Branches in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.order.iter().enumerate().map(|(column, name)| (*name, column))
    }
}
