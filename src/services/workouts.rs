//! In-studio workout history
//!
//! Holds the raw workout records and the normalized table built from them,
//! and exposes the class-count views. Data comes either from the member
//! API or from a CSV export.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::http::authorized_get;
use super::normalizer::{coach_first_name, json_cell};
use super::Aggregator;
use crate::types::{
    ClassCounts, JsonObject, OtfError, Result, WorkoutTable, CLASS_TYPE_COLUMN, COACH_COLUMN,
    DROPPED_COLUMNS, STUDIO_COLUMN,
};

/// Column name used for a blank CSV header cell
const BLANK_HEADER_KEY: &str = "key";

#[derive(Debug, Deserialize)]
struct WorkoutsResponse {
    data: Option<Vec<Value>>,
}

/// Workout history of one member
#[derive(Debug, Clone)]
pub struct InStudioWorkouts {
    records: Vec<JsonObject>,
    table: WorkoutTable,
}

impl InStudioWorkouts {
    /// Fetch the workout list from the member API
    pub fn fetch(http: &Client, url: &str, id_token: &str) -> Result<Self> {
        let response: WorkoutsResponse = authorized_get(http, url, id_token, &[])?;
        let data = response
            .data
            .ok_or_else(|| OtfError::MalformedData("workout response has no 'data' list".into()))?;

        let records = data
            .into_iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::Object(obj) => Ok(obj),
                other => Err(OtfError::MalformedData(format!(
                    "workout {} is not an object: {}",
                    i, other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(count = records.len(), "fetched in-studio workouts");
        Ok(Self::from_records(records))
    }

    /// Build from API records, dropping bookkeeping columns from the table
    pub fn from_records(records: Vec<JsonObject>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if DROPPED_COLUMNS.contains(&key.as_str()) {
                    continue;
                }
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| record.get(c).and_then(json_cell))
                    .collect()
            })
            .collect();

        Self {
            table: WorkoutTable { columns, rows },
            records,
        }
    }

    /// Load a previously exported CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let workouts = Self::from_csv_reader(file)?;
        tracing::info!(path = %path.display(), count = workouts.len(), "loaded workouts from csv");
        Ok(workouts)
    }

    /// Parse CSV with a header row. Every column is kept.
    ///
    /// A blank header cell is named `key`. Rows with a different number of
    /// fields than the header are rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| {
                if h.is_empty() {
                    BLANK_HEADER_KEY.to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let mut records = Vec::new();
        let mut rows = Vec::new();

        for result in csv_reader.records() {
            let row = result?;
            if row.len() != columns.len() {
                let line = row.position().map(|p| p.line()).unwrap_or(0);
                return Err(OtfError::MalformedData(format!(
                    "csv line {}: expected {} fields, found {}",
                    line,
                    columns.len(),
                    row.len()
                )));
            }

            let mut record = JsonObject::new();
            let mut cells = Vec::with_capacity(columns.len());
            for (column, value) in columns.iter().zip(row.iter()) {
                record.insert(column.clone(), Value::String(value.to_string()));
                cells.push((!value.is_empty()).then(|| value.to_string()));
            }
            records.push(record);
            rows.push(cells);
        }

        Ok(Self {
            records,
            table: WorkoutTable { columns, rows },
        })
    }

    /// Write the normalized table as CSV (empty field for missing values)
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.table.columns)?;
        for row in &self.table.rows {
            csv_writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Export the normalized table to a CSV file
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        self.write_csv(file)?;
        tracing::info!(path = %path.display(), rows = self.len(), "exported workouts");
        Ok(())
    }

    /// Raw workout records as received
    pub fn records(&self) -> &[JsonObject] {
        &self.records
    }

    /// Normalized table used for aggregation
    pub fn table(&self) -> &WorkoutTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Classes per coach. `first_name_only` merges coaches sharing a first name.
    pub fn by_coach(&self, ascending: bool, first_name_only: bool) -> Result<ClassCounts> {
        if first_name_only {
            Aggregator::class_counts(&self.table, COACH_COLUMN, ascending, coach_first_name)
        } else {
            Aggregator::class_counts(&self.table, COACH_COLUMN, ascending, str::to_string)
        }
    }

    /// Classes per studio
    pub fn by_studio(&self, ascending: bool) -> Result<ClassCounts> {
        Aggregator::class_counts(&self.table, STUDIO_COLUMN, ascending, str::to_string)
    }

    /// Classes per class type
    pub fn by_class_type(&self, ascending: bool) -> Result<ClassCounts> {
        Aggregator::class_counts(&self.table, CLASS_TYPE_COLUMN, ascending, str::to_string)
    }
}
