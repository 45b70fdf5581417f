use itertools::Itertools;
use serde::Serialize;

use crate::data::Cell;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub category: Cell,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "bars", rename_all = "snake_case")]
pub enum Histogram {
    Bins(Vec<HistogramBin>),
    Categories(Vec<CategoryBar>),
}

/// Equal-width bins spanning the finite values. The last bin is closed so
/// the maximum lands in it; a constant input collapses to one bin.
pub fn equal_width_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .collect::<Vec<_>>();
    let (Some(min), Some(max)) = (
        finite.iter().copied().reduce(f64::min),
        finite.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    let width = (max - min) / bins as f64;
    if min == max || !width.is_finite() {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let mut counts = vec![0usize; bins];
    for value in &finite {
        let slot = (((value - min) / width).floor() as usize).min(bins - 1);
        counts[slot] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: min + width * idx as f64,
            upper: if idx + 1 == bins {
                max
            } else {
                min + width * (idx + 1) as f64
            },
            count,
        })
        .collect()
}

/// One bar per run of equal cells in an already sorted sequence.
pub fn category_bars(sorted: &[Cell]) -> Vec<CategoryBar> {
    sorted
        .iter()
        .dedup_with_count()
        .map(|(count, category)| CategoryBar {
            category: category.clone(),
            count,
        })
        .collect()
}
