use tracing::debug;

use super::TripDataset;
use crate::selection::FilterCriteria;

impl TripDataset {
    /// Returns the trips matching both axes of `criteria`, in load order.
    ///
    /// `All` on an axis leaves that axis unconstrained. An empty result is a
    /// valid dataset; see [`TripDataset::warnings`].
    pub fn filter(&self, criteria: &FilterCriteria) -> TripDataset {
        let records: Vec<_> = self
            .records
            .iter()
            .filter(|r| criteria.month.matches(r.month) && criteria.day.matches(r.day_of_week))
            .cloned()
            .collect();

        debug!(
            month = %criteria.month,
            day = %criteria.day,
            before = self.records.len(),
            after = records.len(),
            "Trips filtered"
        );

        TripDataset::new(self.city, self.schema, records)
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::test_support::*;
    use crate::selection::{DayFilter, FilterCriteria, Month, MonthFilter};
    use chrono::Weekday;

    fn sample_dataset() -> crate::dataset::TripDataset {
        dataset(vec![
            trip("2017-01-02 08:00:00", 100.0, "A", "B", "Subscriber"), // Monday
            trip("2017-01-03 09:00:00", 200.0, "A", "C", "Customer"),   // Tuesday
            trip("2017-03-06 10:00:00", 300.0, "B", "C", "Subscriber"), // Monday
            trip("2017-06-04 17:00:00", 400.0, "C", "A", "Subscriber"), // Sunday
        ])
    }

    #[test]
    fn test_all_all_is_identity() {
        let ds = sample_dataset();
        let filtered = ds.filter(&FilterCriteria::default());
        assert_eq!(filtered, ds);
    }

    #[test]
    fn test_month_only() {
        let ds = sample_dataset();
        let filtered = ds.filter(&FilterCriteria::new(
            MonthFilter::Only(Month::January),
            DayFilter::All,
        ));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.month == 1));
    }

    #[test]
    fn test_month_and_day_are_conjunctive() {
        let ds = sample_dataset();
        let filtered = ds.filter(&FilterCriteria::new(
            MonthFilter::Only(Month::January),
            DayFilter::Only(Weekday::Mon),
        ));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].trip_duration, 100.0);
    }

    #[test]
    fn test_day_only_preserves_order() {
        let ds = sample_dataset();
        let filtered = ds.filter(&FilterCriteria::new(
            MonthFilter::All,
            DayFilter::Only(Weekday::Mon),
        ));
        let durations: Vec<_> = filtered.iter().map(|r| r.trip_duration).collect();
        assert_eq!(durations, vec![100.0, 300.0]);
    }

    #[test]
    fn test_every_criteria_pair_yields_matching_subset() {
        let ds = sample_dataset();
        let months = std::iter::once(MonthFilter::All).chain(Month::ALL.map(MonthFilter::Only));
        for month in months {
            for day in [DayFilter::All, DayFilter::Only(Weekday::Mon), DayFilter::Only(Weekday::Sun)] {
                let filtered = ds.filter(&FilterCriteria::new(month, day));
                for r in &filtered {
                    assert!(month.matches(r.month));
                    assert!(day.matches(r.day_of_week));
                    assert!(ds.records().contains(r));
                }
            }
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let ds = sample_dataset();
        let filtered = ds.filter(&FilterCriteria::new(
            MonthFilter::Only(Month::May),
            DayFilter::All,
        ));
        assert!(filtered.is_empty());
        assert_eq!(ds.len(), 4);
    }
}
