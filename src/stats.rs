//! Descriptive statistics for quantitative columns.
//!
//! Conventions:
//!
//! - standard deviation is the sample deviation (N - 1 divisor); a single
//!   value has deviation 0;
//! - skewness is the moment estimator `m3 / m2^1.5` and kurtosis the excess
//!   moment estimator `m4 / m2^2 - 3`, both 0 when the values are constant
//!   (the second central moment vanishes relative to the mean);
//! - percentiles interpolate linearly between order statistics;
//! - the mode is the smallest of the most frequent values.

use serde::Serialize;

use crate::{
    dataset::Column,
    error::{ProfileError, ProfileResult},
};

/// Relative resolution below which the variance is treated as zero.
const VARIANCE_RESOLUTION: f64 = 1e-15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatLabel {
    Mean,
    Median,
    Mode,
    Max,
    Min,
    StdDev,
    Skewness,
    Kurtosis,
    Percentile25,
    Percentile50,
    Percentile75,
}

impl StatLabel {
    pub const ALL: [StatLabel; 11] = [
        StatLabel::Mean,
        StatLabel::Median,
        StatLabel::Mode,
        StatLabel::Max,
        StatLabel::Min,
        StatLabel::StdDev,
        StatLabel::Skewness,
        StatLabel::Kurtosis,
        StatLabel::Percentile25,
        StatLabel::Percentile50,
        StatLabel::Percentile75,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatLabel::Mean => "mean",
            StatLabel::Median => "median",
            StatLabel::Mode => "mode",
            StatLabel::Max => "max",
            StatLabel::Min => "min",
            StatLabel::StdDev => "standard deviation",
            StatLabel::Skewness => "skewness",
            StatLabel::Kurtosis => "kurtosis",
            StatLabel::Percentile25 => "25th percentile",
            StatLabel::Percentile50 => "50th percentile",
            StatLabel::Percentile75 => "75th percentile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatEntry {
    pub label: StatLabel,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub column: String,
    pub count: usize,
    pub entries: Vec<StatEntry>,
}

impl DescriptiveStats {
    pub fn get(&self, label: StatLabel) -> f64 {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
            .unwrap_or(f64::NAN)
    }
}

/// Summarises the non-missing numeric values of `column`.
pub fn describe(column: &Column) -> ProfileResult<DescriptiveStats> {
    describe_values(column.name(), &column.numeric_values())
}

pub fn describe_values(name: &str, values: &[f64]) -> ProfileResult<DescriptiveStats> {
    let stats = ColumnStats::new(values).ok_or_else(|| ProfileError::EmptyColumn {
        column: name.to_string(),
    })?;
    let entries = StatLabel::ALL
        .iter()
        .map(|&label| StatEntry {
            label,
            value: stats.metric(label),
        })
        .collect();
    Ok(DescriptiveStats {
        column: name.to_string(),
        count: stats.count(),
        entries,
    })
}

struct ColumnStats {
    sorted: Vec<f64>,
    mean: f64,
}

impl ColumnStats {
    fn new(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        Some(Self { sorted, mean })
    }

    fn count(&self) -> usize {
        self.sorted.len()
    }

    fn metric(&self, label: StatLabel) -> f64 {
        match label {
            StatLabel::Mean => self.mean,
            StatLabel::Median => self.median(),
            StatLabel::Mode => self.mode(),
            StatLabel::Max => self.sorted[self.sorted.len() - 1],
            StatLabel::Min => self.sorted[0],
            StatLabel::StdDev => self.std_dev(),
            StatLabel::Skewness => self.skewness(),
            StatLabel::Kurtosis => self.kurtosis(),
            StatLabel::Percentile25 => self.percentile(25.0),
            StatLabel::Percentile50 => self.percentile(50.0),
            StatLabel::Percentile75 => self.percentile(75.0),
        }
    }

    fn median(&self) -> f64 {
        let mid = self.sorted.len() / 2;
        if self.sorted.len().is_multiple_of(2) {
            (self.sorted[mid - 1] + self.sorted[mid]) / 2.0
        } else {
            self.sorted[mid]
        }
    }

    fn mode(&self) -> f64 {
        let mut best = self.sorted[0];
        let mut best_count = 0usize;
        let mut idx = 0usize;
        while idx < self.sorted.len() {
            let value = self.sorted[idx];
            let run = self.sorted[idx..]
                .iter()
                .take_while(|candidate| **candidate == value)
                .count();
            // Strictly greater keeps the smallest value among ties.
            if run > best_count {
                best = value;
                best_count = run;
            }
            idx += run;
        }
        best
    }

    fn percentile(&self, percent: f64) -> f64 {
        let position = (self.sorted.len() - 1) as f64 * percent / 100.0;
        let lower = position.floor() as usize;
        let upper = (lower + 1).min(self.sorted.len() - 1);
        let fraction = position - lower as f64;
        self.sorted[lower] + fraction * (self.sorted[upper] - self.sorted[lower])
    }

    fn central_moment(&self, power: i32) -> f64 {
        self.sorted
            .iter()
            .map(|value| (value - self.mean).powi(power))
            .sum::<f64>()
            / self.sorted.len() as f64
    }

    fn std_dev(&self) -> f64 {
        let n = self.sorted.len();
        if n < 2 {
            return 0.0;
        }
        let squares = self
            .sorted
            .iter()
            .map(|value| (value - self.mean).powi(2))
            .sum::<f64>();
        (squares / (n as f64 - 1.0)).max(0.0).sqrt()
    }

    fn is_degenerate(&self, m2: f64) -> bool {
        m2 <= (VARIANCE_RESOLUTION * self.mean).powi(2)
    }

    fn skewness(&self) -> f64 {
        let m2 = self.central_moment(2);
        if self.is_degenerate(m2) {
            return 0.0;
        }
        self.central_moment(3) / m2.powf(1.5)
    }

    fn kurtosis(&self) -> f64 {
        let m2 = self.central_moment(2);
        if self.is_degenerate(m2) {
            return 0.0;
        }
        self.central_moment(4) / (m2 * m2) - 3.0
    }
}
