use serde::Serialize;

use super::utility::{frequency_table, mode};
use crate::dataset::{Schema, TripDataset};

/// Label for trips whose rider did not record a gender.
pub const UNDISCLOSED: &str = "Undisclosed";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    /// User type counts, most frequent first.
    pub user_types: Vec<(String, usize)>,
    pub demographics: Demographics,
}

/// Gender and birth-year breakdown, when the city records them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Demographics {
    NotApplicable,
    Available {
        /// Gender counts, most frequent first, followed by an [`UNDISCLOSED`] row.
        gender: Vec<(String, usize)>,
        /// `None` when no trip in the dataset has a birth year.
        birth_year: Option<BirthYearStats>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

#[tracing::instrument(skip_all, fields(records = dataset.len(), schema = ?dataset.schema()))]
pub fn user_stats(dataset: &TripDataset) -> UserReport {
    // blank user types are left out of the counts, like missing values
    let present = dataset
        .iter()
        .map(|r| r.user_type.trim())
        .filter(|t| !t.is_empty());
    let user_types = frequency_table(present)
        .into_iter()
        .map(|(t, n)| (t.to_string(), n))
        .collect();

    let demographics = match dataset.schema() {
        Schema::WithDemographics => Demographics::Available {
            gender: gender_table(dataset),
            birth_year: birth_year_stats(dataset),
        },
        Schema::WithoutDemographics => Demographics::NotApplicable,
    };

    UserReport {
        user_types,
        demographics,
    }
}

fn gender_table(dataset: &TripDataset) -> Vec<(String, usize)> {
    let mut table: Vec<(String, usize)> =
        frequency_table(dataset.iter().filter_map(|r| r.gender.as_deref()))
            .into_iter()
            .map(|(g, n)| (g.to_string(), n))
            .collect();

    let undisclosed = dataset.iter().filter(|r| r.gender.is_none()).count();
    table.push((UNDISCLOSED.to_string(), undisclosed));
    table
}

fn birth_year_stats(dataset: &TripDataset) -> Option<BirthYearStats> {
    let years: Vec<i32> = dataset.iter().filter_map(|r| r.birth_year).collect();

    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        latest: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}
