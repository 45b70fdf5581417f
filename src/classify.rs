use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use crate::dataset::Dataset;

/// How a column is profiled. Assigned per request from the caller's
/// selection, never inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Qualitative,
    Quantitative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    kinds: Vec<(String, ColumnKind)>,
}

impl Classification {
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        self.kinds
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, kind)| *kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnKind)> {
        self.kinds.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn qualitative(&self) -> Vec<&str> {
        self.names_of(ColumnKind::Qualitative)
    }

    pub fn quantitative(&self) -> Vec<&str> {
        self.names_of(ColumnKind::Quantitative)
    }

    fn names_of(&self, wanted: ColumnKind) -> Vec<&str> {
        self.iter()
            .filter(|(_, kind)| *kind == wanted)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Marks the selected columns qualitative and every other column
/// quantitative. Selected names missing from the dataset are ignored: a
/// selection may outlive the dataset it was made against.
pub fn classify<S>(dataset: &Dataset, qualitative: &[S]) -> Classification
where
    S: AsRef<str>,
{
    let selected = qualitative
        .iter()
        .map(|name| name.as_ref())
        .collect::<HashSet<_>>();
    let kinds = dataset
        .columns()
        .iter()
        .map(|column| {
            let kind = if selected.contains(column.name()) {
                ColumnKind::Qualitative
            } else {
                ColumnKind::Quantitative
            };
            (column.name().to_string(), kind)
        })
        .collect::<Vec<_>>();
    let stale = selected
        .iter()
        .filter(|name| dataset.column_index(name).is_none())
        .count();
    if stale > 0 {
        debug!("Ignoring {stale} qualitative selection(s) not present in dataset");
    }
    Classification { kinds }
}
