use std::time::Duration;

use serde::Serialize;

use super::utility::mean;
use crate::dataset::TripDataset;

/// Total and average trip duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    /// Zero for no trips; `None` only when the sum exceeds what `Duration` holds.
    pub total: Option<Duration>,
    /// `None` when there are no trips to average or the mean overflows.
    pub mean: Option<Duration>,
}

#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn trip_duration_stats(dataset: &TripDataset) -> DurationReport {
    let seconds: Vec<f64> = dataset.iter().map(|r| r.trip_duration).collect();

    DurationReport {
        total: Duration::try_from_secs_f64(seconds.iter().sum()).ok(),
        mean: mean(&seconds).and_then(|m| Duration::try_from_secs_f64(m).ok()),
    }
}

/// Renders a duration as `D days HH:MM:SS`, keeping any fractional seconds.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    let micros = d.subsec_micros();

    if micros == 0 {
        format!("{days} days {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{days} days {hours:02}:{minutes:02}:{seconds:02}.{micros:06}")
    }
}
