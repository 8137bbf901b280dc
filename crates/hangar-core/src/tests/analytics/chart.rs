use crate::{
    AnalyticsReport, SeriesPoint, format_duration_ms, ms_to_hours, orders_over_time,
    priority_series, stage_hours_series, status_series,
};

use serde_json::json;

fn report() -> AnalyticsReport {
    serde_json::from_value(json!({
        "totalOrders": 12,
        "completedOrders": 3,
        "completionRate": "25.0",
        "overdueOrders": 1,
        "avgCompletionTime": 259200000.0,
        "ordersByStatus": { "shipped": 2, "pending": 5, "moulding": 4, "legacy": 1 },
        "ordersByPriority": { "urgent": 1, "normal": 9, "low": 2 },
        "stageAverages": { "moulding": 5400000, "pending": 7200000 },
        "ordersByDate": {
            "2024-01-01": 1, "2024-01-02": 1, "2024-01-03": 1, "2024-01-04": 1,
            "2024-01-05": 1, "2024-01-06": 1, "2024-01-07": 1, "2024-01-08": 1,
            "2024-01-09": 1, "2024-01-10": 1, "2024-01-11": 1, "2024-01-12": 1,
            "2024-01-13": 1, "2024-01-14": 1, "2024-01-15": 2, "2024-01-16": 3
        },
        "totalItems": 30,
        "avgItemsPerOrder": 2.5
    }))
    .unwrap()
}

fn labels(series: &[SeriesPoint]) -> Vec<&str> {
    series.iter().map(|point| point.label.as_str()).collect()
}

#[test]
fn test_report_accepts_numbers_or_text_for_ratios() {
    let report = report();
    assert_eq!(report.completion_rate, "25.0");
    assert_eq!(report.avg_items_per_order, "2.5");
    assert_eq!(report.total_orders, 12);
}

#[test]
fn test_report_missing_fields_default() {
    let report: AnalyticsReport = serde_json::from_value(json!({ "totalOrders": 1 })).unwrap();
    assert_eq!(report.total_orders, 1);
    assert!(report.orders_by_status.is_empty());
    assert_eq!(report.completion_rate, "");
}

#[test]
fn test_status_series_follows_board_order_and_capitalizes() {
    let series = status_series(&report());

    assert_eq!(labels(&series), vec!["Pending", "Moulding", "Shipped", "Legacy"]);
    assert_eq!(series[0].value, 5.0);
}

#[test]
fn test_priority_series_orders_lowest_first() {
    assert_eq!(labels(&priority_series(&report())), vec!["Low", "Normal", "Urgent"]);
}

#[test]
fn test_stage_hours_series_converts_milliseconds() {
    let series = stage_hours_series(&report());

    assert_eq!(labels(&series), vec!["Pending", "Moulding"]);
    assert_eq!(series[0].value, 2.0);
    assert_eq!(series[1].value, 1.5);
}

#[test]
fn test_orders_over_time_keeps_last_fourteen_days() {
    let series = orders_over_time(&report());

    assert_eq!(series.len(), 14);
    assert_eq!(series[0].label, "2024-01-03");
    assert_eq!(series[13].label, "2024-01-16");
    assert_eq!(series[13].value, 3.0);
}

#[test]
fn test_ms_to_hours_rounds_to_two_decimals() {
    assert_eq!(ms_to_hours(1_000_000.0), 0.28);
    assert_eq!(ms_to_hours(0.0), 0.0);
}

#[test]
fn test_format_duration() {
    const HOUR: f64 = 3_600_000.0;

    assert_eq!(format_duration_ms(0.0), "0 hour");
    assert_eq!(format_duration_ms(HOUR), "1 hour");
    assert_eq!(format_duration_ms(5.5 * HOUR), "5 hours");
    assert_eq!(format_duration_ms(24.0 * HOUR), "1 day");
    assert_eq!(format_duration_ms(72.0 * HOUR), "3 days");
}
