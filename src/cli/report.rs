//! Text and JSON rendering of the class report

use serde::Serialize;
use std::fmt::Write;

use otfstats::services::normalizer::json_cell;
use otfstats::services::InStudioWorkouts;
use otfstats::types::{ClassCounts, JsonObject, Member, Result, WorkoutTable, COUNT_LABEL};

/// Shown for missing values
const EMPTY_CELL: &str = "-";

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    class_summary: Option<&'a JsonObject>,
    workout_count: usize,
    #[serde(skip)]
    table: &'a WorkoutTable,
    by_coach: ClassCounts,
    by_studio: ClassCounts,
    by_class_type: ClassCounts,
}

impl<'a> Report<'a> {
    /// Run all three aggregations, most classes first
    pub fn build(
        member: Option<&'a Member>,
        workouts: &'a InStudioWorkouts,
        coach_first_name_only: bool,
    ) -> Result<Self> {
        Ok(Self {
            class_summary: member.map(Member::class_summary),
            workout_count: workouts.len(),
            table: workouts.table(),
            by_coach: workouts.by_coach(false, coach_first_name_only)?,
            by_studio: workouts.by_studio(false)?,
            by_class_type: workouts.by_class_type(false)?,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(summary) = self.class_summary {
            out.push_str(&heading("Class Summary"));
            for (key, value) in summary {
                let value = json_cell(value).unwrap_or_else(|| EMPTY_CELL.to_string());
                let _ = writeln!(out, "{}: {}", key, value);
            }
            out.push('\n');
        }

        out.push_str(&heading("All Details"));
        out.push_str(&render_table(self.table));
        out.push('\n');

        out.push_str(&heading("Number of Classes by Coach"));
        out.push_str(&render_counts(&self.by_coach));
        out.push('\n');

        out.push_str(&heading("Number of Classes by Studio"));
        out.push_str(&render_counts(&self.by_studio));
        out.push('\n');

        out.push_str(&heading("Number of Classes by Type"));
        out.push_str(&render_counts(&self.by_class_type));

        out
    }
}

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// Left-aligned columns separated by two spaces
fn render_table(table: &WorkoutTable) -> String {
    if table.columns().is_empty() {
        return "(no workouts)\n".to_string();
    }

    let mut widths: Vec<usize> = table.columns().iter().map(|c| c.chars().count()).collect();
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            let len = cell.as_deref().unwrap_or(EMPTY_CELL).chars().count();
            *width = (*width).max(len);
        }
    }

    let mut out = String::new();
    push_row(&mut out, table.columns().iter().map(String::as_str), &widths);
    for row in table.rows() {
        push_row(
            &mut out,
            row.iter().map(|cell| cell.as_deref().unwrap_or(EMPTY_CELL)),
            &widths,
        );
    }
    out
}

fn push_row<'c>(out: &mut String, cells: impl Iterator<Item = &'c str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Group key column followed by the right-aligned count column
fn render_counts(counts: &ClassCounts) -> String {
    let key_width = counts
        .iter()
        .map(|(key, _)| key.chars().count())
        .chain(std::iter::once(counts.group_by.chars().count()))
        .max()
        .unwrap_or(0);
    let count_width = COUNT_LABEL.len();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<kw$}  {:>cw$}",
        counts.group_by,
        COUNT_LABEL,
        kw = key_width,
        cw = count_width
    );
    for (key, count) in counts.iter() {
        let _ = writeln!(out, "{:<kw$}  {:>cw$}", key, count, kw = key_width, cw = count_width);
    }
    out
}
