//! Presentation formatting for engine output.
//!
//! The engine hands out exact `f64` values; this module rounds them for
//! display (half-to-even at the configured number of decimals), lays profile
//! tables out as string grids, and renders grids or whole views as aligned
//! text or JSON for the presentation layer.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::{
    config::ProfilerConfig,
    data::Cell,
    frequency::FrequencyTable,
    profile::{ColumnProfile, ProfileTable},
    stats::DescriptiveStats,
};

/// Rounds half-to-even at `decimals` places, starting from the exact binary
/// value rather than its shortest decimal spelling. `None` for NaN,
/// infinities and magnitudes beyond `Decimal`'s range.
pub fn round_value(value: f64, decimals: u32) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(decimals);
    Some(rounded)
}

pub fn format_fixed(value: f64, decimals: u32) -> String {
    match round_value(value, decimals) {
        Some(rounded) => rounded.to_string(),
        None => format!("{value:.prec$}", prec = decimals as usize),
    }
}

pub fn cell_text(cell: &Cell, config: &ProfilerConfig) -> String {
    match cell {
        Cell::Missing => config.missing_label.clone(),
        other => other.as_display(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Aligned plain text: header, dashed rule, then rows, columns separated
    /// by two spaces.
    pub fn render_text(&self) -> String {
        let mut widths = self.headers.iter().map(|h| text_width(h)).collect::<Vec<_>>();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(text_width(cell));
            }
        }
        let rule = widths.iter().map(|w| "-".repeat((*w).max(3))).collect::<Vec<_>>();

        let mut output = String::new();
        let _ = writeln!(output, "{}", join_padded(&self.headers, &widths));
        let _ = writeln!(output, "{}", rule.join("  "));
        for row in &self.rows {
            let _ = writeln!(output, "{}", join_padded(row, &widths));
        }
        output
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let flat = cell.replace(['\n', '\r', '\t'], " ");
            let padding = width.saturating_sub(text_width(&flat));
            format!("{flat}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn text_width(value: &str) -> usize {
    value.chars().count()
}

pub fn frequency_grid(table: &FrequencyTable, config: &ProfilerConfig) -> TableGrid {
    let headers = vec![
        table.column.clone(),
        "count".to_string(),
        "relative frequency".to_string(),
        "cumulative relative frequency".to_string(),
    ];
    let rows = table
        .rows
        .iter()
        .map(|row| {
            vec![
                cell_text(&row.category, config),
                row.count.to_string(),
                format_fixed(row.relative_frequency, config.decimals),
                format_fixed(row.cumulative_relative_frequency, config.decimals),
            ]
        })
        .collect();
    TableGrid { headers, rows }
}

pub fn stats_grid(stats: &DescriptiveStats, config: &ProfilerConfig) -> TableGrid {
    let headers = vec!["statistic".to_string(), "value".to_string()];
    let rows = stats
        .entries
        .iter()
        .map(|entry| {
            vec![
                entry.label.as_str().to_string(),
                format_fixed(entry.value, config.decimals),
            ]
        })
        .collect();
    TableGrid { headers, rows }
}

/// The profile table as text, or the column's guidance message when the
/// profile failed.
pub fn profile_grid(profile: &ColumnProfile, config: &ProfilerConfig) -> TableGrid {
    match &profile.table {
        Ok(ProfileTable::Frequency(table)) => frequency_grid(table, config),
        Ok(ProfileTable::Descriptive(stats)) => stats_grid(stats, config),
        Err(err) => TableGrid {
            headers: vec![profile.column.clone()],
            rows: vec![vec![err.user_message()]],
        },
    }
}

pub fn render_profiles(profiles: &[ColumnProfile], config: &ProfilerConfig) -> String {
    let mut output = String::new();
    for profile in profiles {
        let _ = writeln!(output, "{}", profile.title);
        output.push_str(&profile_grid(profile, config).render_text());
        output.push('\n');
    }
    output
}

pub fn to_json<T>(view: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(view).context("Serializing view to JSON")
}
