pub mod analytics;
pub mod board;
pub mod error;
pub mod form;
pub mod models;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use analytics::chart::{
    SeriesPoint, format_duration_ms, ms_to_hours, orders_over_time, priority_series,
    stage_hours_series, status_series,
};
pub use analytics::report::AnalyticsReport;
pub use board::board::{Board, Bucket};
pub use board::drag::{Drag, DragLocation, DragOutcome};
pub use error::{CoreError, Result};
pub use form::order_draft::{NewOrder, OrderDraft};
pub use form::order_edit::{OrderEdit, OrderUpdate};
pub use form::plane_row::PlaneRow;
pub use models::order::Order;
pub use models::plane::Plane;
pub use models::priority::Priority;
pub use models::reposition::Reposition;
pub use models::status::Status;
