//! Tabular profiling and relationship engine.
//!
//! A CSV upload becomes an immutable [`Dataset`]; a caller-owned [`Session`]
//! holds it and serves four views over it:
//!
//! - the raw table as ordered row records;
//! - univariate profiles (frequency tables for qualitative columns,
//!   descriptive statistics for quantitative ones);
//! - bivariate [`PairSeries`] against a chosen axis column;
//! - longitudinal [`TimeSeries`] ordered by a chosen sequencing column.
//!
//! Views are plain serializable data for an external presentation layer;
//! [`format`] turns them into display text.

pub mod bivariate;
pub mod classify;
pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod format;
pub mod frequency;
pub mod histogram;
pub mod io_utils;
pub mod longitudinal;
pub mod profile;
pub mod session;
pub mod stats;

use std::{env, sync::OnceLock};

use log::LevelFilter;

pub use crate::{
    bivariate::{AxisRole, PairSeries},
    classify::{Classification, ColumnKind},
    config::ProfilerConfig,
    data::Cell,
    dataset::{Column, Dataset},
    error::{ProfileError, ProfileResult},
    longitudinal::TimeSeries,
    profile::ColumnProfile,
    session::{Session, Upload, View},
};

static LOGGER: OnceLock<()> = OnceLock::new();

/// Installs the `env_logger` backend once per process. `RUST_LOG` wins when
/// set; otherwise this crate logs at info.
pub fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("csv_profiler", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}
