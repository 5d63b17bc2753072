//! Trip records for one city and the loader/filter that produce them.
//!
//! A [`TripDataset`] is built fresh by [`load`] for each analysis run and
//! narrowed with [`TripDataset::filter`], which never touches the source.

mod filter;
mod loader;

pub use loader::{load, load_path};

use chrono::{NaiveDateTime, Weekday};
use serde::Serialize;

use crate::error::TripDataWarning;
use crate::selection::{City, serialize_weekday};

/// Whether the city's source carries the optional demographic columns.
///
/// Decided once from the header row; a per-city property, never per-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    WithDemographics,
    WithoutDemographics,
}

/// One bicycle rental, plus the time attributes derived from its start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: NaiveDateTime,
    #[serde(rename = "End Time")]
    pub end_time: NaiveDateTime,
    /// Seconds, as stored in the source file.
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year")]
    pub birth_year: Option<i32>,

    // derived from start_time
    pub hour: u32,
    pub month: u32,
    #[serde(serialize_with = "serialize_weekday")]
    pub day_of_week: Weekday,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripDataset {
    city: City,
    schema: Schema,
    records: Vec<TripRecord>,
}

impl TripDataset {
    pub fn new(city: City, schema: Schema, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            schema,
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-fatal conditions the statistics engine will degrade around.
    pub fn warnings(&self) -> Vec<TripDataWarning> {
        let mut warnings = Vec::new();
        if self.is_empty() {
            warnings.push(TripDataWarning::EmptyResult);
        }
        if self.schema == Schema::WithoutDemographics {
            warnings.push(TripDataWarning::OptionalColumnAbsent(self.city));
        }
        warnings
    }
}

impl<'a> IntoIterator for &'a TripDataset {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_warnings_for_empty_dataset_without_demographics() {
        let ds = dataset(vec![]);
        assert_eq!(
            ds.warnings(),
            vec![
                TripDataWarning::EmptyResult,
                TripDataWarning::OptionalColumnAbsent(City::Washington)
            ]
        );
    }

    #[test]
    fn test_no_warnings_for_populated_demographic_dataset() {
        let ds = demographic_dataset(vec![at_hour(8)]);
        assert!(ds.warnings().is_empty());
        assert_eq!(ds.len(), 1);
    }
}
