use serde::Serialize;

use super::utility::mode;
use crate::dataset::{TripDataset, TripRecord};

/// Separator joining start and end station into a route.
pub const ROUTE_SEPARATOR: &str = " to ";

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    pub most_common_route: Option<String>,
}

/// Composite route key; routes compare by this exact string.
pub fn route(record: &TripRecord) -> String {
    format!(
        "{}{ROUTE_SEPARATOR}{}",
        record.start_station, record.end_station
    )
}

#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn station_stats(dataset: &TripDataset) -> StationReport {
    StationReport {
        most_common_start_station: mode(dataset.iter().map(|r| r.start_station.as_str()))
            .map(str::to_string),
        most_common_end_station: mode(dataset.iter().map(|r| r.end_station.as_str()))
            .map(str::to_string),
        most_common_route: mode(dataset.iter().map(route)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::*;

    fn ride(from: &str, to: &str) -> TripRecord {
        trip("2017-03-01 08:00:00", 60.0, from, to, "Subscriber")
    }

    #[test]
    fn test_most_common_route() {
        let report = station_stats(&dataset(vec![ride("A", "B"), ride("A", "B"), ride("C", "D")]));
        assert_eq!(report.most_common_route.as_deref(), Some("A to B"));
        assert_eq!(report.most_common_start_station.as_deref(), Some("A"));
        assert_eq!(report.most_common_end_station.as_deref(), Some("B"));
    }

    #[test]
    fn test_route_is_independent_of_station_modes() {
        let report = station_stats(&dataset(vec![
            ride("A", "X"),
            ride("A", "Y"),
            ride("B", "Z"),
            ride("B", "Z"),
            ride("A", "Z"),
        ]));
        assert_eq!(report.most_common_start_station.as_deref(), Some("A"));
        assert_eq!(report.most_common_end_station.as_deref(), Some("Z"));
        assert_eq!(report.most_common_route.as_deref(), Some("B to Z"));
    }

    #[test]
    fn test_route_equality_is_on_composite_string() {
        // different station pairs that join to the same route text
        let report = station_stats(&dataset(vec![
            ride("A to B", "C"),
            ride("A", "B to C"),
            ride("D", "E"),
        ]));
        assert_eq!(report.most_common_route.as_deref(), Some("A to B to C"));
    }

    #[test]
    fn test_station_stats_empty() {
        let report = station_stats(&dataset(vec![]));
        assert_eq!(report.most_common_start_station, None);
        assert_eq!(report.most_common_end_station, None);
        assert_eq!(report.most_common_route, None);
    }
}
