//! Output formatting for trip reports and raw samples.
//!
//! Supports a human-readable text report, JSON, and CSV dumps of raw records.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use csv::WriterBuilder;
use tracing::debug;

use crate::dataset::TripRecord;
use crate::selection::day_name;
use crate::stats::duration::format_duration;
use crate::stats::{Demographics, TripReport};

const NOT_AVAILABLE: &str = "not available";
const RULE: &str = "----------------------------------------";

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Renders every section of `report` as plain text.
pub fn render_text(report: &TripReport) -> String {
    let mut out = String::new();
    write_text(&mut out, report).expect("fmt::Write for String never returns an error");
    out
}

fn write_text(out: &mut String, report: &TripReport) -> std::fmt::Result {
    writeln!(
        out,
        "{} trips for {} (month: {}, day: {})",
        report.trips, report.city, report.criteria.month, report.criteria.day
    )?;
    if report.trips == 0 {
        writeln!(out, "No trips match the requested filters.")?;
    }
    writeln!(out, "{RULE}")?;

    let t = &report.temporal;
    writeln!(out, "\nMost Frequent Times of Travel\n")?;
    writeln!(out, "Most popular month: {}", or_na(t.most_common_month))?;
    writeln!(
        out,
        "Most popular day of the week: {}",
        or_na(t.most_common_day.map(day_name))
    )?;
    writeln!(out, "Most frequent start hour: {}", or_na(t.most_common_hour))?;
    writeln!(out, "{RULE}")?;

    let s = &report.stations;
    writeln!(out, "\nMost Popular Stations and Trip\n")?;
    writeln!(
        out,
        "Most commonly used start station: {}",
        or_na(s.most_common_start_station.as_deref())
    )?;
    writeln!(
        out,
        "Most commonly used end station: {}",
        or_na(s.most_common_end_station.as_deref())
    )?;
    writeln!(
        out,
        "Most frequent trip: {}",
        or_na(s.most_common_route.as_deref())
    )?;
    writeln!(out, "{RULE}")?;

    let d = &report.durations;
    writeln!(out, "\nTrip Duration\n")?;
    writeln!(
        out,
        "Total travel time: {}",
        or_na(d.total.map(format_duration))
    )?;
    writeln!(out, "Mean travel time: {}", or_na(d.mean.map(format_duration)))?;
    writeln!(out, "{RULE}")?;

    let u = &report.users;
    writeln!(out, "\nUser Stats\n")?;
    writeln!(out, "User types:")?;
    for (user_type, count) in &u.user_types {
        writeln!(out, "  {user_type:<20} {count}")?;
    }
    match &u.demographics {
        Demographics::NotApplicable => {
            writeln!(
                out,
                "\nGender and birth year are not applicable for this dataset."
            )?;
        }
        Demographics::Available { gender, birth_year } => {
            writeln!(out, "\nGender:")?;
            for (g, count) in gender {
                writeln!(out, "  {g:<20} {count}")?;
            }
            match birth_year {
                Some(b) => writeln!(
                    out,
                    "\nEarliest birth year: {}\nMost recent birth year: {}\nMost common birth year: {}",
                    b.earliest, b.latest, b.most_common
                )?,
                None => writeln!(out, "\nBirth year: {NOT_AVAILABLE}")?,
            }
        }
    }
    writeln!(out, "{RULE}")
}

/// Writes `report` to stdout as pretty-printed JSON.
pub fn print_json(report: &TripReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Writes raw trip records as CSV rows, with a header, to `writer`.
pub fn write_records<W: io::Write>(records: &[&TripRecord], writer: W) -> Result<()> {
    debug!(rows = records.len(), "Writing raw trip records");

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
