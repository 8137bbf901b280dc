//! Due dates and production times shown on order cards.

use crate::Order;

use chrono::{DateTime, Duration, Utc};

impl Order {
    /// Estimated due date: creation plus the lead time.
    pub fn due_date(&self, lead_days: i64) -> DateTime<Utc> {
        self.created_at + Duration::days(lead_days)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>, lead_days: i64) -> bool {
        now > self.due_date(lead_days)
    }

    /// Whole days from creation to completion, once completed.
    pub fn production_days(&self) -> Option<i64> {
        self.completed_at
            .map(|completed| (completed - self.created_at).num_days())
    }
}
