use std::fs::File;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use super::{Schema, TripDataset, TripRecord};
use crate::config::SourceConfig;
use crate::error::TripDataError;
use crate::selection::City;

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Columns every city file must carry.
const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Accepted start/end time layouts, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A row as it appears in the city CSV. The unnamed index column is ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads every trip for `city` from the file `config` resolves it to.
///
/// # Errors
///
/// [`TripDataError::SourceNotFound`] if the file cannot be opened or read, and
/// [`TripDataError::DataFormat`] if a required column is missing or any row
/// fails to parse.
pub fn load(config: &SourceConfig, city: City) -> Result<TripDataset, TripDataError> {
    load_path(config.resolve(city), city)
}

/// Loads `city`'s trips from an explicit CSV path.
#[tracing::instrument(skip_all, fields(city = %city, path = %path.as_ref().display()))]
pub fn load_path(path: impl AsRef<Path>, city: City) -> Result<TripDataset, TripDataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TripDataError::SourceNotFound {
        city,
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|e| csv_error(path, city, e))?
        .clone();
    check_required_columns(&headers).map_err(|message| TripDataError::DataFormat {
        path: path.to_path_buf(),
        line: 1,
        message,
    })?;
    let schema = detect_schema(&headers);
    debug!(?schema, columns = headers.len(), "Trip file opened");

    let mut records = Vec::new();
    let mut row = StringRecord::new();

    while rdr.read_record(&mut row).map_err(|e| csv_error(path, city, e))? {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawTrip = row
            .deserialize(Some(&headers))
            .map_err(|e| csv_error(path, city, e))?;

        let record = to_record(raw, schema).map_err(|message| TripDataError::DataFormat {
            path: path.to_path_buf(),
            line,
            message,
        })?;
        records.push(record);
    }

    info!(rows = records.len(), ?schema, "Trip data loaded");
    Ok(TripDataset::new(city, schema, records))
}

fn check_required_columns(headers: &StringRecord) -> Result<(), String> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|h| h == *name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("missing required columns: {}", missing.join(", ")))
    }
}

fn detect_schema(headers: &StringRecord) -> Schema {
    let has = |name: &str| headers.iter().any(|h| h == name);
    if has(GENDER_COLUMN) && has(BIRTH_YEAR_COLUMN) {
        Schema::WithDemographics
    } else {
        Schema::WithoutDemographics
    }
}

fn to_record(raw: RawTrip, schema: Schema) -> Result<TripRecord, String> {
    let start_time = parse_timestamp(&raw.start_time)?;
    let end_time = parse_timestamp(&raw.end_time)?;

    if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
        return Err(format!("invalid trip duration {}", raw.trip_duration));
    }

    let (gender, birth_year) = match schema {
        Schema::WithDemographics => {
            let birth_year = match raw.birth_year {
                Some(y) => Some(whole_year(y)?),
                None => None,
            };
            (raw.gender.filter(|g| !g.trim().is_empty()), birth_year)
        }
        Schema::WithoutDemographics => (None, None),
    };

    Ok(TripRecord {
        start_time,
        end_time,
        trip_duration: raw.trip_duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender,
        birth_year,
        hour: start_time.hour(),
        month: start_time.month(),
        day_of_week: start_time.weekday(),
    })
}

/// Truncates a birth year to an integer, rejecting values outside `i32`.
fn whole_year(y: f64) -> Result<i32, String> {
    let whole = y.trunc();
    if whole.is_finite() && (i32::MIN as f64..=i32::MAX as f64).contains(&whole) {
        Ok(whole as i32)
    } else {
        Err(format!("invalid birth year {y}"))
    }
}

fn parse_timestamp(text: &str) -> Result<NaiveDateTime, String> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .ok_or_else(|| format!("unparseable timestamp '{text}'"))
}

/// Read failures mean the source is unreadable; anything else is bad content.
fn csv_error(path: &Path, city: City, err: csv::Error) -> TripDataError {
    let line = err.position().map(|p| p.line()).unwrap_or_default();
    let message = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(source) => TripDataError::SourceNotFound {
            city,
            path: path.to_path_buf(),
            source,
        },
        _ => TripDataError::DataFormat {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}
