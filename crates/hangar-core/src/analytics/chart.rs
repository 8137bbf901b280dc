use crate::{AnalyticsReport, Priority, Status};

use std::collections::BTreeMap;

const MS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;
const RECENT_DAYS: usize = 14;

/// One bar, slice or point of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

/// Order count per stage, board stages first in board order.
pub fn status_series(report: &AnalyticsReport) -> Vec<SeriesPoint> {
    let known: Vec<&str> = Status::BOARD
        .iter()
        .chain(std::iter::once(&Status::Done))
        .map(Status::as_str)
        .collect();
    ordered_series(&report.orders_by_status, &known, |count| *count as f64)
}

/// Order count per priority, lowest first.
pub fn priority_series(report: &AnalyticsReport) -> Vec<SeriesPoint> {
    let known: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
    ordered_series(&report.orders_by_priority, &known, |count| *count as f64)
}

/// Average time spent per stage, in hours.
pub fn stage_hours_series(report: &AnalyticsReport) -> Vec<SeriesPoint> {
    let known: Vec<&str> = Status::BOARD.iter().map(Status::as_str).collect();
    ordered_series(&report.stage_averages, &known, |ms| ms_to_hours(*ms))
}

/// Orders created per day, the last two weeks of dates only.
pub fn orders_over_time(report: &AnalyticsReport) -> Vec<SeriesPoint> {
    let skip = report.orders_by_date.len().saturating_sub(RECENT_DAYS);
    report
        .orders_by_date
        .iter()
        .skip(skip)
        .map(|(date, count)| SeriesPoint::new(date.clone(), *count as f64))
        .collect()
}

/// Milliseconds to hours, rounded to two decimals.
pub fn ms_to_hours(ms: f64) -> f64 {
    (ms / MS_PER_HOUR * 100.0).round() / 100.0
}

/// `3 days`, `1 day`, `5 hours`; whole units, rounded down.
pub fn format_duration_ms(ms: f64) -> String {
    let hours = (ms / MS_PER_HOUR).floor().max(0.0) as u64;
    let days = hours / 24;

    if days > 0 {
        format!("{days} day{}", if days > 1 { "s" } else { "" })
    } else {
        format!("{hours} hour{}", if hours > 1 { "s" } else { "" })
    }
}

fn ordered_series<T, F>(values: &BTreeMap<String, T>, known: &[&str], to_value: F) -> Vec<SeriesPoint>
where
    F: Fn(&T) -> f64,
{
    let in_order = known
        .iter()
        .filter_map(|key| values.get_key_value(*key));
    let rest = values
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()));

    in_order
        .chain(rest)
        .map(|(key, value)| SeriesPoint::new(capitalize(key), to_value(value)))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
