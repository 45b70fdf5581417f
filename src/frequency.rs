use std::collections::HashMap;

use serde::Serialize;

use crate::{data::Cell, dataset::Column};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub category: Cell,
    pub count: usize,
    pub relative_frequency: f64,
    pub cumulative_relative_frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    pub column: String,
    pub total: usize,
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    pub fn get(&self, category: &Cell) -> Option<&FrequencyRow> {
        self.rows.iter().find(|row| &row.category == category)
    }
}

/// Counts every distinct value of `column`, missing cells included as their
/// own category. Rows are ordered by descending count; equal counts keep the
/// order in which the values first appear.
pub fn frequency_table(column: &Column) -> FrequencyTable {
    let mut accumulator = FrequencyAccumulator::default();
    for cell in column.values() {
        accumulator.ingest(cell);
    }
    accumulator.into_table(column.name())
}

#[derive(Default)]
struct FrequencyAccumulator {
    total: usize,
    first_seen: Vec<Cell>,
    counts: HashMap<Cell, usize>,
}

impl FrequencyAccumulator {
    fn ingest(&mut self, cell: &Cell) {
        self.total += 1;
        match self.counts.get_mut(cell) {
            Some(count) => *count += 1,
            None => {
                self.first_seen.push(cell.clone());
                self.counts.insert(cell.clone(), 1);
            }
        }
    }

    fn into_table(self, column: &str) -> FrequencyTable {
        let total = self.total;
        let mut items = self
            .first_seen
            .into_iter()
            .map(|cell| {
                let count = self.counts.get(&cell).copied().unwrap_or_default();
                (cell, count)
            })
            .collect::<Vec<_>>();
        // Stable sort keeps first-seen order among ties.
        items.sort_by(|a, b| b.1.cmp(&a.1));

        let mut running = 0.0;
        let rows = items
            .into_iter()
            .map(|(category, count)| {
                let relative_frequency = count as f64 / total as f64;
                running += relative_frequency;
                FrequencyRow {
                    category,
                    count,
                    relative_frequency,
                    cumulative_relative_frequency: running,
                }
            })
            .collect();
        FrequencyTable {
            column: column.to_string(),
            total,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let column = Column::new(
            "fruit",
            vec![text("pear"), text("apple"), text("apple"), text("fig"), text("pear")],
        );
        let table = frequency_table(&column);
        let categories = table
            .rows
            .iter()
            .map(|row| row.category.clone())
            .collect::<Vec<_>>();
        assert_eq!(categories, vec![text("pear"), text("apple"), text("fig")]);
        assert_eq!(table.total, 5);
    }

    #[test]
    fn missing_is_its_own_category() {
        let column = Column::new("n", vec![Cell::Number(1.0), Cell::Missing, Cell::Missing]);
        let table = frequency_table(&column);
        assert_eq!(table.rows[0].category, Cell::Missing);
        assert_eq!(table.rows[0].count, 2);
        assert!((table.rows[1].cumulative_relative_frequency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_column_yields_empty_table() {
        let table = frequency_table(&Column::new("n", Vec::new()));
        assert!(table.rows.is_empty());
        assert_eq!(table.total, 0);
    }
}
