//! Workout table and aggregation types

use serde::Serialize;

/// Column holding the coach name
pub const COACH_COLUMN: &str = "coach";
/// Column holding the studio name
pub const STUDIO_COLUMN: &str = "studioName";
/// Column holding the class type
pub const CLASS_TYPE_COLUMN: &str = "classType";
/// Column counted by every aggregation
pub const MEMBER_ID_COLUMN: &str = "memberUuId";
/// Label of the count column in aggregation output
pub const COUNT_LABEL: &str = "class count";

/// Bookkeeping fields kept in raw records but dropped from the table
pub const DROPPED_COLUMNS: [&str; 10] = [
    "classHistoryUuId",
    "classId",
    "isIntro",
    "isLeader",
    "memberEmail",
    "memberName",
    "memberPerformanceId",
    "studioAccountUuId",
    "version",
    "workoutType",
];

/// Normalized workout table: one row per class, `None` for missing values.
///
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkoutTable {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<Option<String>>>,
}

impl WorkoutTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value by row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }
}

/// One group of an aggregation view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: String,
    #[serde(rename = "class count")]
    pub count: u64,
}

/// Aggregation result: group key → class count, ordered by count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    /// Column the rows were grouped by
    pub group_by: String,
    pub groups: Vec<GroupCount>,
}

impl ClassCounts {
    pub fn get(&self, key: &str) -> Option<u64> {
        self.groups.iter().find(|g| g.key == key).map(|g| g.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.groups.iter().map(|g| (g.key.as_str(), g.count))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all group counts
    pub fn total(&self) -> u64 {
        self.groups.iter().map(|g| g.count).sum()
    }
}
