//! Univariate profiles: one per column, shaped by the requested
//! [`ColumnKind`].
//!
//! Failures stay attached to the column that produced them, so a column
//! without numeric values never hides the profiles of its neighbours.

use log::{debug, warn};
use serde::Serialize;

use crate::{
    classify::{Classification, ColumnKind},
    config::ProfilerConfig,
    data::Cell,
    dataset::{Column, Dataset},
    error::ProfileError,
    frequency::{FrequencyTable, frequency_table},
    histogram::{Histogram, category_bars, equal_width_bins},
    stats::{DescriptiveStats, describe},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileTable {
    Frequency(FrequencyTable),
    Descriptive(DescriptiveStats),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub column: String,
    pub kind: ColumnKind,
    pub title: String,
    /// The column's values sorted ascending, missing last.
    pub histogram_points: Vec<Cell>,
    pub histogram: Histogram,
    pub table: Result<ProfileTable, ProfileError>,
}

impl ColumnProfile {
    pub fn frequency(&self) -> Option<&FrequencyTable> {
        match &self.table {
            Ok(ProfileTable::Frequency(table)) => Some(table),
            _ => None,
        }
    }

    pub fn descriptive(&self) -> Option<&DescriptiveStats> {
        match &self.table {
            Ok(ProfileTable::Descriptive(stats)) => Some(stats),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ProfileError> {
        self.table.as_ref().err()
    }
}

/// Profiles every column in dataset order. Columns the classification does
/// not know are profiled as quantitative.
pub fn profile_columns(
    dataset: &Dataset,
    classification: &Classification,
    config: &ProfilerConfig,
) -> Vec<ColumnProfile> {
    let profiles = dataset
        .columns()
        .iter()
        .map(|column| {
            let kind = classification
                .kind_of(column.name())
                .unwrap_or(ColumnKind::Quantitative);
            profile_column(column, kind, config)
        })
        .collect::<Vec<_>>();
    debug!(
        "Profiled {} column(s) over {} row(s)",
        profiles.len(),
        dataset.row_count()
    );
    profiles
}

pub fn profile_column(column: &Column, kind: ColumnKind, config: &ProfilerConfig) -> ColumnProfile {
    let histogram_points = column.sorted_values();
    let (title, histogram, table) = match kind {
        ColumnKind::Qualitative => (
            format!("Distribution and frequency table of {}", column.name()),
            Histogram::Categories(category_bars(&histogram_points)),
            Ok(ProfileTable::Frequency(frequency_table(column))),
        ),
        ColumnKind::Quantitative => {
            let values = histogram_points
                .iter()
                .filter_map(Cell::as_number)
                .collect::<Vec<_>>();
            let table = describe(column).map(ProfileTable::Descriptive);
            if let Err(err) = &table {
                warn!("{err}");
            }
            (
                format!("Distribution and descriptive statistics of {}", column.name()),
                Histogram::Bins(equal_width_bins(&values, config.histogram_bins)),
                table,
            )
        }
    };
    ColumnProfile {
        column: column.name().to_string(),
        kind,
        title,
        histogram_points,
        histogram,
        table,
    }
}
