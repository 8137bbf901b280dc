//! Plain-text views of the board and the analytics dashboard.

use hangar_core::{
    AnalyticsReport, Board, Order, SeriesPoint, Status, format_duration_ms, orders_over_time,
    priority_series, stage_hours_series, status_series,
};

use std::fmt::Write;

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%B %-d, %Y";

/// The Kanban board, one block per stage column.
pub fn board_text(board: &Board, now: DateTime<Utc>, lead_days: i64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Orders: {}", board.total());

    for bucket in board.buckets() {
        let _ = writeln!(
            out,
            "\n{} {} ({})",
            bucket.stage.icon(),
            bucket.stage.label(),
            bucket.len()
        );
        for (index, order) in bucket.orders.iter().enumerate() {
            out.push_str(&card_text(index, order, now, lead_days));
        }
    }

    out
}

fn card_text(index: usize, order: &Order, now: DateTime<Utc>, lead_days: i64) -> String {
    let mut out = String::new();
    let timing = if order.is_overdue(now, lead_days) {
        "Overdue"
    } else {
        "On Time"
    };

    let _ = writeln!(
        out,
        "  [{}] {} · {} · ordered {} · due {} · {}",
        index,
        order.name,
        order.priority,
        order.created_at.format(DATE_FORMAT),
        order.due_date(lead_days).format(DATE_FORMAT),
        timing
    );
    let _ = writeln!(out, "      id: {}", order.id);
    for plane in &order.planes {
        let _ = writeln!(
            out,
            "      - {} - {} pc/s ({})",
            plane.name, plane.quantity, plane.size
        );
    }

    out
}

/// Archived orders with their dates and total production time.
pub fn done_orders_text(orders: &[Order]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Done Orders: {}", orders.len());

    for order in orders {
        let _ = writeln!(out, "\n{} {} ({})", Status::Done.icon(), order.name, order.id);
        let _ = writeln!(out, "  Created: {}", order.created_at.format(DATE_FORMAT));
        if let Some(completed) = order.completed_at {
            let _ = writeln!(out, "  Shipped: {}", completed.format(DATE_FORMAT));
        }
        if let Some(done) = order.done_at {
            let _ = writeln!(out, "  Done: {}", done.format(DATE_FORMAT));
        }
        if let Some(days) = order.production_days() {
            let _ = writeln!(out, "  Total time: {days} days");
        }
    }

    out
}

/// Summary figures followed by each chart as a table.
pub fn analytics_text(report: &AnalyticsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Analytics Dashboard");
    let _ = writeln!(out, "  Total orders:        {}", report.total_orders);
    let _ = writeln!(
        out,
        "  Completed:           {} ({}%)",
        report.completed_orders, report.completion_rate
    );
    let _ = writeln!(out, "  Overdue:             {}", report.overdue_orders);
    let _ = writeln!(
        out,
        "  Avg completion time: {}",
        format_duration_ms(report.avg_completion_time)
    );
    let _ = writeln!(
        out,
        "  Total items:         {} ({} per order)",
        report.total_items, report.avg_items_per_order
    );

    section(&mut out, "Orders by status", &status_series(report), 0);
    section(&mut out, "Orders by priority", &priority_series(report), 0);
    section(
        &mut out,
        "Average time per stage (hours)",
        &stage_hours_series(report),
        2,
    );
    section(
        &mut out,
        "Orders over time (last 14 days)",
        &orders_over_time(report),
        0,
    );

    out
}

fn section(out: &mut String, title: &str, series: &[SeriesPoint], decimals: usize) {
    let _ = writeln!(out, "\n{title}");
    if series.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return;
    }

    let width = series.iter().map(|p| p.label.len()).max().unwrap_or(0);
    for point in series {
        let _ = writeln!(
            out,
            "  {:<width$}  {:.decimals$}",
            point.label,
            point.value,
            width = width,
            decimals = decimals
        );
    }
}
