//! Ordered (x, y) series pairing one axis column with every other column.
//!
//! The two roles order rows differently:
//!
//! - [`AxisRole::Explanatory`]: rows are sorted once by the axis column and
//!   every series plots the axis on x.
//! - [`AxisRole::Response`]: each series sorts rows by its own partner column
//!   and plots that partner on x with the axis on y, so every series may
//!   carry a different row order.

use std::{fmt, str::FromStr};

use log::debug;
use serde::Serialize;

use crate::{
    data::Cell,
    dataset::{Column, Dataset, points_in_order},
    error::{ProfileError, ProfileResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisRole {
    Explanatory,
    Response,
}

impl FromStr for AxisRole {
    type Err = ProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "explanatory" | "xaxis" | "x" => Ok(AxisRole::Explanatory),
            "response" | "yaxis" | "y" => Ok(AxisRole::Response),
            _ => Err(ProfileError::UnknownAxisRole {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::Explanatory => write!(f, "explanatory"),
            AxisRole::Response => write!(f, "response"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(Cell, Cell)>,
}

impl PairSeries {
    pub fn xs(&self) -> Vec<&Cell> {
        self.points.iter().map(|(x, _)| x).collect()
    }

    pub fn ys(&self) -> Vec<&Cell> {
        self.points.iter().map(|(_, y)| y).collect()
    }
}

pub fn pair_series(
    dataset: &Dataset,
    axis_column: &str,
    role: AxisRole,
) -> ProfileResult<Vec<PairSeries>> {
    let axis = dataset.column(axis_column)?;
    let axis_order = match role {
        AxisRole::Explanatory => Some(axis.sorted_order()),
        AxisRole::Response => None,
    };

    let series = dataset
        .columns()
        .iter()
        .filter(|column| column.name() != axis.name())
        .map(|other| match &axis_order {
            Some(order) => pair(axis, other, order),
            None => pair(other, axis, &other.sorted_order()),
        })
        .collect::<Vec<_>>();
    debug!(
        "Built {} pair series against '{}' as {role}",
        series.len(),
        axis.name()
    );
    Ok(series)
}

fn pair(x: &Column, y: &Column, order: &[usize]) -> PairSeries {
    PairSeries {
        title: format!("{} (x-axis) vs {} (y-axis)", x.name(), y.name()),
        x_label: x.name().to_string(),
        y_label: y.name().to_string(),
        points: points_in_order(order, x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfilerConfig;

    fn dataset() -> Dataset {
        Dataset::from_csv_str(
            "age,score,rank\n30,70,2\n25,85,3\n40,60,1\n",
            &ProfilerConfig::default(),
        )
        .expect("dataset")
    }

    fn n(value: f64) -> Cell {
        Cell::Number(value)
    }

    #[test]
    fn explanatory_sorts_by_axis() {
        let series = pair_series(&dataset(), "age", AxisRole::Explanatory).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series[0].points,
            vec![(n(25.0), n(85.0)), (n(30.0), n(70.0)), (n(40.0), n(60.0))]
        );
        assert_eq!(series[0].title, "age (x-axis) vs score (y-axis)");
        assert_eq!(series[1].xs(), series[0].xs());
    }

    #[test]
    fn response_sorts_by_each_partner() {
        let series = pair_series(&dataset(), "age", AxisRole::Response).unwrap();
        assert_eq!(series[0].x_label, "score");
        assert_eq!(series[0].y_label, "age");
        assert_eq!(
            series[0].points,
            vec![(n(60.0), n(40.0)), (n(70.0), n(30.0)), (n(85.0), n(25.0))]
        );
        assert_eq!(
            series[1].points,
            vec![(n(1.0), n(40.0)), (n(2.0), n(30.0)), (n(3.0), n(25.0))]
        );
    }

    #[test]
    fn unknown_axis_is_rejected() {
        let err = pair_series(&dataset(), "height", AxisRole::Explanatory).unwrap_err();
        assert_eq!(err, ProfileError::unknown_column("height"));
    }

    #[test]
    fn axis_role_parses_dropdown_values() {
        assert_eq!("xaxis".parse::<AxisRole>().unwrap(), AxisRole::Explanatory);
        assert_eq!("Response".parse::<AxisRole>().unwrap(), AxisRole::Response);
        assert!("diagonal".parse::<AxisRole>().is_err());
    }
}
