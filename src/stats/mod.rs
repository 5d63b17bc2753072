//! Descriptive statistics over a filtered trip dataset.
//!
//! Each generator reads the same immutable [`TripDataset`] and degrades to
//! absent values on empty input or missing demographic columns instead of
//! failing. Generators run inside a `tracing` span, so a subscriber with
//! span-close events enabled reports how long each one took.

pub mod duration;
pub mod station;
pub mod temporal;
pub mod users;
pub mod utility;

use serde::Serialize;
use tracing::warn;

use crate::dataset::TripDataset;
use crate::selection::{City, FilterCriteria};

pub use duration::{DurationReport, trip_duration_stats};
pub use station::{StationReport, station_stats};
pub use temporal::{TemporalReport, time_stats};
pub use users::{BirthYearStats, Demographics, UserReport, user_stats};

/// All four reports for one city and filter selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub city: City,
    pub criteria: FilterCriteria,
    pub trips: usize,
    pub temporal: TemporalReport,
    pub stations: StationReport,
    pub durations: DurationReport,
    pub users: UserReport,
}

impl TripReport {
    pub fn build(dataset: &TripDataset, criteria: FilterCriteria) -> Self {
        for warning in dataset.warnings() {
            warn!(city = %dataset.city(), "{warning}");
        }

        TripReport {
            city: dataset.city(),
            criteria,
            trips: dataset.len(),
            temporal: time_stats(dataset),
            stations: station_stats(dataset),
            durations: trip_duration_stats(dataset),
            users: user_stats(dataset),
        }
    }
}
