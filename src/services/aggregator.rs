//! Aggregator service for class counts

use crate::types::{ClassCounts, GroupCount, OtfError, Result, WorkoutTable, MEMBER_ID_COLUMN};
use std::collections::HashMap;

/// Aggregator for group-by-and-count views over a workout table
pub struct Aggregator;

impl Aggregator {
    /// Count classes per value of `column`.
    ///
    /// Only rows with a non-empty member id count. Rows without a value in
    /// `column` are skipped. `key` maps the raw column value to the group key.
    /// Groups are ordered by count, ties in first-encounter order.
    pub fn class_counts<F>(
        table: &WorkoutTable,
        column: &str,
        ascending: bool,
        key: F,
    ) -> Result<ClassCounts>
    where
        F: Fn(&str) -> String,
    {
        let mut groups: Vec<GroupCount> = Vec::new();

        if !table.is_empty() {
            let group_idx = Self::require_column(table, column)?;
            let member_idx = Self::require_column(table, MEMBER_ID_COLUMN)?;

            // Group key → position in `groups`
            let mut index: HashMap<String, usize> = HashMap::new();

            for row in table.rows() {
                let Some(value) = row[group_idx].as_deref() else {
                    continue;
                };
                let has_member = row[member_idx].as_deref().is_some_and(|m| !m.is_empty());
                if !has_member {
                    continue;
                }

                let group_key = key(value);
                match index.get(&group_key) {
                    Some(&pos) => groups[pos].count += 1,
                    None => {
                        index.insert(group_key.clone(), groups.len());
                        groups.push(GroupCount {
                            key: group_key,
                            count: 1,
                        });
                    }
                }
            }
        }

        // sort_by is stable: equal counts keep encounter order
        if ascending {
            groups.sort_by(|a, b| a.count.cmp(&b.count));
        } else {
            groups.sort_by(|a, b| b.count.cmp(&a.count));
        }

        Ok(ClassCounts {
            group_by: column.to_string(),
            groups,
        })
    }

    fn require_column(table: &WorkoutTable, column: &str) -> Result<usize> {
        table.column_index(column).ok_or_else(|| {
            OtfError::MalformedData(format!("workout table has no '{}' column", column))
        })
    }
}
