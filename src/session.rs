//! Caller-owned session holding the one live dataset.
//!
//! The dataset is parsed once per upload and replaced wholesale by the next
//! upload. Every view is recomputed on request and stamped with the
//! generation of the dataset it was computed from; [`Session::accept`] drops
//! views whose dataset has since been replaced.
//!
//! Profiling, pairing and sequencing only run for a nonzero action counter
//! (the number of times the user pressed the view's button). Changing a
//! selection or uploading a file never triggers them on its own.

use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    bivariate::{AxisRole, PairSeries, pair_series},
    classify::classify,
    config::ProfilerConfig,
    dataset::{Dataset, RowRecord},
    error::ProfileResult,
    init_logging,
    longitudinal::{TimeSeries, time_series},
    profile::{ColumnProfile, profile_columns},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// A computed view tagged with the dataset generation it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View<T> {
    generation: u64,
    content: T,
}

impl<T> View<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn into_content(self) -> T {
        self.content
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView<'a> {
    pub filename: &'a str,
    pub columns: Vec<String>,
    pub rows: Vec<RowRecord<'a>>,
}

#[derive(Debug)]
struct Loaded {
    filename: String,
    dataset: Dataset,
}

#[derive(Debug)]
pub struct Session {
    config: ProfilerConfig,
    loaded: Option<Loaded>,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ProfilerConfig::default())
    }
}

impl Session {
    pub fn new(config: ProfilerConfig) -> Self {
        init_logging();
        Self {
            config,
            loaded: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Parses the upload and makes it the live dataset. The previous dataset
    /// is dropped even when parsing fails.
    pub fn upload(&mut self, upload: &Upload) -> ProfileResult<&Dataset> {
        self.generation += 1;
        self.loaded = None;
        let dataset = match Dataset::from_csv_bytes(&upload.bytes, &self.config) {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!("Rejected upload '{}': {err}", upload.filename);
                return Err(err);
            }
        };
        info!(
            "Loaded '{}' with {} row(s) across {} column(s)",
            upload.filename,
            dataset.row_count(),
            dataset.column_count()
        );
        let loaded = self.loaded.insert(Loaded {
            filename: upload.filename.clone(),
            dataset,
        });
        Ok(&loaded.dataset)
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.loaded = None;
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.loaded.as_ref().map(|loaded| &loaded.dataset)
    }

    pub fn filename(&self) -> Option<&str> {
        self.loaded.as_ref().map(|loaded| loaded.filename.as_str())
    }

    /// Column names for the selection dropdowns; empty before an upload.
    pub fn column_names(&self) -> Vec<String> {
        self.dataset()
            .map(Dataset::column_names)
            .unwrap_or_default()
    }

    pub fn is_current<T>(&self, view: &View<T>) -> bool {
        self.loaded.is_some() && view.generation == self.generation
    }

    /// Unwraps a view computed against the live dataset; stale views are
    /// discarded.
    pub fn accept<T>(&self, view: View<T>) -> Option<T> {
        if self.is_current(&view) {
            Some(view.content)
        } else {
            debug!(
                "Discarding view from generation {} (current {})",
                view.generation, self.generation
            );
            None
        }
    }

    pub fn table_view(&self) -> Option<View<TableView<'_>>> {
        let loaded = self.loaded.as_ref()?;
        Some(self.stamp(TableView {
            filename: &loaded.filename,
            columns: loaded.dataset.column_names(),
            rows: loaded.dataset.records(),
        }))
    }

    pub fn univariate_view<S>(
        &self,
        action_count: u64,
        qualitative: &[S],
    ) -> Option<View<Vec<ColumnProfile>>>
    where
        S: AsRef<str>,
    {
        let dataset = self.triggered(action_count)?;
        let classification = classify(dataset, qualitative);
        Some(self.stamp(profile_columns(dataset, &classification, &self.config)))
    }

    pub fn bivariate_view(
        &self,
        action_count: u64,
        axis_column: &str,
        role: AxisRole,
    ) -> Option<View<ProfileResult<Vec<PairSeries>>>> {
        let dataset = self.triggered(action_count)?;
        Some(self.stamp(pair_series(dataset, axis_column, role)))
    }

    pub fn longitudinal_view(
        &self,
        action_count: u64,
        sequence_column: &str,
    ) -> Option<View<ProfileResult<Vec<TimeSeries>>>> {
        let dataset = self.triggered(action_count)?;
        Some(self.stamp(time_series(dataset, sequence_column)))
    }

    fn triggered(&self, action_count: u64) -> Option<&Dataset> {
        if action_count == 0 {
            return None;
        }
        self.dataset()
    }

    fn stamp<T>(&self, content: T) -> View<T> {
        View {
            generation: self.generation,
            content,
        }
    }
}
