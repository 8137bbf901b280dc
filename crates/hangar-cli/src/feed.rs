use crate::{CliClientResult, Client, Notice};

use hangar_core::Order;

use std::time::Duration;

use log::{debug, warn};
use tokio::time::{MissedTickBehavior, interval};

/// The order collection as last fetched, with manual and periodic
/// revalidation.
pub struct OrderFeed<'a> {
    client: &'a Client,
    interval: Duration,
    snapshot: Option<Vec<Order>>,
}

impl<'a> OrderFeed<'a> {
    pub fn new(client: &'a Client, interval: Duration) -> Self {
        Self {
            client,
            interval,
            snapshot: None,
        }
    }

    /// Last successfully fetched orders, if any fetch succeeded yet.
    pub fn snapshot(&self) -> Option<&[Order]> {
        self.snapshot.as_deref()
    }

    /// Refetch now. On failure the previous snapshot is kept.
    pub async fn revalidate(&mut self) -> CliClientResult<&[Order]> {
        let orders = self.client.list_orders().await?;
        debug!("Order feed revalidated: {} orders", orders.len());
        Ok(self.snapshot.insert(orders).as_slice())
    }

    /// Revalidate on every tick and hand each fresh snapshot to `on_update`.
    ///
    /// The first tick fires immediately. A failed poll is reported and the
    /// loop continues. Runs forever unless `max_ticks` is given.
    pub async fn poll<F>(&mut self, max_ticks: Option<usize>, mut on_update: F)
    where
        F: FnMut(&[Order]),
    {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0;

        while max_ticks.is_none_or(|max| ticks < max) {
            ticker.tick().await;
            ticks += 1;

            match self.revalidate().await {
                Ok(orders) => on_update(orders),
                Err(e) => {
                    warn!("Order poll {} failed: {}", ticks, e);
                    Notice::error("Failed to load orders. Please check your connection.").emit();
                }
            }
        }
    }
}
