//! Typed city, month and day selectors accepted by the analysis pipeline.
//!
//! Inputs are validated once here; everything downstream takes the enums.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Serialize, Serializer};

use crate::error::SelectionError;

/// Cities with a trip log on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name used for input matching and source overrides.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Default storage file for this city, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| SelectionError::UnknownCity(s.to_string()))
    }
}

/// The six months covered by the trip logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Maps a calendar month number back to a name. Months after June have no entry.
    pub fn from_number(n: u32) -> Option<Month> {
        n.checked_sub(1)
            .and_then(|i| Month::ALL.get(i as usize))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month axis of the filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, month_number: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number() == month_number,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if key == "all" {
            return Ok(MonthFilter::All);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.name().to_lowercase() == key)
            .map(MonthFilter::Only)
            .ok_or_else(|| SelectionError::UnknownMonth(s.to_string()))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => write!(f, "{m}"),
        }
    }
}

/// Day-of-week axis of the filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let titled = title_case(s.trim());
        if titled == "All" {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| day_name(*d) == titled)
            .map(DayFilter::Only)
            .ok_or_else(|| SelectionError::UnknownDay(s.to_string()))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(day_name(*d)),
        }
    }
}

impl Serialize for DayFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Conjunctive (month, day) criteria applied to a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterCriteria {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Self { month, day }
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday, e.g. `"Monday"`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serializes a weekday by its full name rather than chrono's abbreviation.
pub(crate) fn serialize_weekday<S: Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(day_name(*day))
}

pub(crate) fn serialize_opt_weekday<S: Serializer>(
    day: &Option<Weekday>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match day {
        Some(d) => s.serialize_some(day_name(*d)),
        None => s.serialize_none(),
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parse_ignores_case_and_whitespace() {
        assert_eq!("  Chicago ".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("NEW YORK CITY".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("washington\n".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        let err = "boston".parse::<City>().unwrap_err();
        assert_eq!(err, SelectionError::UnknownCity("boston".to_string()));
    }

    #[test]
    fn test_city_file_names() {
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.to_string(), "Washington");
    }

    #[test]
    fn test_month_numbers_round_trip_through_table() {
        for (i, m) in Month::ALL.iter().enumerate() {
            assert_eq!(m.number(), i as u32 + 1);
            assert_eq!(Month::from_number(m.number()), Some(*m));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(7), None);
    }

    #[test]
    fn test_month_filter_parse() {
        assert_eq!(" ALL ".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "March".parse::<MonthFilter>().unwrap(),
            MonthFilter::Only(Month::March)
        );
        assert!("july".parse::<MonthFilter>().is_err());
        assert!("jan".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_day_filter_parse_is_title_cased() {
        assert_eq!("all".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "tUESDAY".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Tue)
        );
        assert!("tues".parse::<DayFilter>().is_err());
    }

    #[test]
    fn test_filters_match() {
        assert!(MonthFilter::All.matches(12));
        assert!(MonthFilter::Only(Month::June).matches(6));
        assert!(!MonthFilter::Only(Month::June).matches(5));
        assert!(DayFilter::All.matches(Weekday::Sun));
        assert!(!DayFilter::Only(Weekday::Sat).matches(Weekday::Sun));
    }

    #[test]
    fn test_day_filter_serializes_full_name() {
        let json = serde_json::to_string(&DayFilter::Only(Weekday::Wed)).unwrap();
        assert_eq!(json, "\"Wednesday\"");
    }
}
