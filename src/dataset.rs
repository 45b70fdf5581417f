//! Immutable in-memory table parsed from CSV text.
//!
//! A [`Dataset`] is built once per upload and only ever read afterwards.
//! Column typing happens at load: a column is numeric when every non-missing
//! field parses as a number, otherwise every field is kept as text.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    config::ProfilerConfig,
    data::{Cell, is_na_token, parse_cell, parse_number},
    error::{ProfileError, ProfileResult},
    io_utils,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Cell>,
    numeric: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Cell>) -> Self {
        let numeric = values
            .iter()
            .all(|cell| matches!(cell, Cell::Number(_) | Cell::Missing));
        Self {
            name: name.into(),
            values,
            numeric,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    /// Non-missing numeric values in row order.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(Cell::as_number).collect()
    }

    /// Row indices in ascending order of this column's values, missing last.
    /// Equal values keep their row order.
    pub fn sorted_order(&self) -> Vec<usize> {
        (0..self.values.len())
            .sorted_by(|a, b| self.values[*a].cmp(&self.values[*b]))
            .collect()
    }

    pub fn sorted_values(&self) -> Vec<Cell> {
        self.sorted_order()
            .into_iter()
            .map(|idx| self.values[idx].clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Builds a dataset from already-typed columns. Names must be unique and
    /// every column must have the same length.
    pub fn from_columns(columns: Vec<Column>) -> ProfileResult<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(ProfileError::Parse {
                    message: format!("Duplicate column name '{}'", column.name()),
                });
            }
            if column.len() != row_count {
                return Err(ProfileError::Parse {
                    message: format!(
                        "Column '{}' has {} value(s) but expected {row_count}",
                        column.name(),
                        column.len()
                    ),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    pub fn from_csv_bytes(bytes: &[u8], config: &ProfilerConfig) -> ProfileResult<Self> {
        let text = io_utils::decode_utf8(bytes).map_err(ProfileError::parse)?;
        Self::from_csv_str(&text, config)
    }

    pub fn from_csv_str(text: &str, config: &ProfilerConfig) -> ProfileResult<Self> {
        let mut reader = io_utils::open_csv_reader(text.as_bytes());
        let (headers, rows) = io_utils::read_records(&mut reader).map_err(ProfileError::parse)?;
        Self::from_records(headers, rows, config)
    }

    pub fn from_path(path: &Path, config: &ProfilerConfig) -> Result<Self> {
        let bytes = io_utils::read_file(path)?;
        Self::from_csv_bytes(&bytes, config).with_context(|| format!("Loading dataset {path:?}"))
    }

    fn from_records(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        config: &ProfilerConfig,
    ) -> ProfileResult<Self> {
        let names = normalize_headers(headers);
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let raw = rows
                    .iter()
                    .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>();
                let numeric = raw.iter().all(|field| {
                    is_na_token(field, &config.na_tokens) || parse_number(field).is_some()
                });
                debug!(
                    "Column '{name}' typed as {}",
                    if numeric { "numeric" } else { "text" }
                );
                let values = raw
                    .iter()
                    .map(|field| parse_cell(field, numeric, &config.na_tokens))
                    .collect();
                Column {
                    name,
                    values,
                    numeric,
                }
            })
            .collect::<Vec<_>>();
        Self::from_columns(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> ProfileResult<&Column> {
        self.column_index(name)
            .map(|idx| &self.columns[idx])
            .ok_or_else(|| ProfileError::unknown_column(name))
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Every row as an ordered `column -> cell` record, in CSV row order.
    pub fn records(&self) -> Vec<RowRecord<'_>> {
        (0..self.row_count)
            .map(|row| RowRecord {
                fields: self
                    .columns
                    .iter()
                    .map(|column| (column.name(), &column.values[row]))
                    .collect(),
            })
            .collect()
    }
}

/// One row of the table view. Serializes as a JSON object whose keys follow
/// column order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord<'a> {
    fields: Vec<(&'a str, &'a Cell)>,
}

impl<'a> RowRecord<'a> {
    pub fn fields(&self) -> &[(&'a str, &'a Cell)] {
        &self.fields
    }

    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        self.fields
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, cell)| *cell)
    }
}

impl Serialize for RowRecord<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, cell) in &self.fields {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

/// Pairs cells of `x` and `y` following `order`.
pub(crate) fn points_in_order(order: &[usize], x: &Column, y: &Column) -> Vec<(Cell, Cell)> {
    order
        .iter()
        .map(|&row| (x.values[row].clone(), y.values[row].clone()))
        .collect()
}

/// Blank names become `Unnamed: {index}` and repeats gain `.1`, `.2`, ...
pub fn normalize_headers(headers: Vec<String>) -> Vec<String> {
    let mut used = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .enumerate()
        .map(|(idx, header)| {
            let base = if header.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                header
            };
            let mut name = base.clone();
            while used.contains(&name) {
                let counter = repeats.entry(base.clone()).or_insert(0);
                *counter += 1;
                name = format!("{base}.{counter}");
            }
            used.insert(name.clone());
            name
        })
        .collect()
}
