use log::debug;
use serde::Serialize;

use crate::{
    data::Cell,
    dataset::{Dataset, points_in_order},
    error::ProfileResult,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub title: String,
    pub sequence_label: String,
    pub value_label: String,
    pub points: Vec<(Cell, Cell)>,
}

impl TimeSeries {
    pub fn sequence(&self) -> Vec<&Cell> {
        self.points.iter().map(|(t, _)| t).collect()
    }
}

/// Sorts the rows once by `sequence_column` and emits one series per other
/// column, all sharing that row order.
pub fn time_series(dataset: &Dataset, sequence_column: &str) -> ProfileResult<Vec<TimeSeries>> {
    let sequence = dataset.column(sequence_column)?;
    let order = sequence.sorted_order();
    let series = dataset
        .columns()
        .iter()
        .filter(|column| column.name() != sequence.name())
        .map(|column| TimeSeries {
            title: format!("{} over {}", column.name(), sequence.name()),
            sequence_label: sequence.name().to_string(),
            value_label: column.name().to_string(),
            points: points_in_order(&order, sequence, column),
        })
        .collect::<Vec<_>>();
    debug!(
        "Built {} time series ordered by '{}'",
        series.len(),
        sequence.name()
    );
    Ok(series)
}
