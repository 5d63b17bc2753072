use chrono::Weekday;
use serde::Serialize;

use super::utility::{hour_mode, mode};
use crate::dataset::TripDataset;
use crate::selection::{Month, serialize_opt_weekday};

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalReport {
    pub most_common_month: Option<Month>,
    #[serde(serialize_with = "serialize_opt_weekday")]
    pub most_common_day: Option<Weekday>,
    pub most_common_hour: Option<u32>,
}

/// Computes the most common month, day of week and start hour.
///
/// A month outside the six-month table has no name and reports as absent.
#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn time_stats(dataset: &TripDataset) -> TemporalReport {
    TemporalReport {
        most_common_month: mode(dataset.iter().map(|r| r.month)).and_then(Month::from_number),
        most_common_day: mode(dataset.iter().map(|r| r.day_of_week)),
        most_common_hour: hour_mode(dataset.iter().map(|r| r.hour)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::*;

    #[test]
    fn test_time_stats_empty() {
        let report = time_stats(&dataset(vec![]));
        assert_eq!(report.most_common_month, None);
        assert_eq!(report.most_common_day, None);
        assert_eq!(report.most_common_hour, None);
    }

    #[test]
    fn test_most_common_hour() {
        let report = time_stats(&dataset(vec![at_hour(8), at_hour(8), at_hour(17)]));
        assert_eq!(report.most_common_hour, Some(8));
    }

    #[test]
    fn test_most_common_month_and_day() {
        let report = time_stats(&dataset(vec![
            trip("2017-02-06 08:00:00", 60.0, "A", "B", "Subscriber"), // Monday
            trip("2017-05-02 08:00:00", 60.0, "A", "B", "Subscriber"), // Tuesday
            trip("2017-05-09 08:00:00", 60.0, "A", "B", "Subscriber"), // Tuesday
        ]));
        assert_eq!(report.most_common_month, Some(Month::May));
        assert_eq!(report.most_common_day, Some(Weekday::Tue));
    }

    #[test]
    fn test_month_and_day_ties_go_to_first_seen() {
        let report = time_stats(&dataset(vec![
            trip("2017-04-07 08:00:00", 60.0, "A", "B", "Subscriber"), // Friday
            trip("2017-01-02 08:00:00", 60.0, "A", "B", "Subscriber"), // Monday
        ]));
        assert_eq!(report.most_common_month, Some(Month::April));
        assert_eq!(report.most_common_day, Some(Weekday::Fri));
    }

    #[test]
    fn test_report_serializes_day_name() {
        let report = time_stats(&dataset(vec![at_hour(9)]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["most_common_day"], "Wednesday");
        assert_eq!(json["most_common_month"], "March");
        assert_eq!(json["most_common_hour"], 9);
    }
}
