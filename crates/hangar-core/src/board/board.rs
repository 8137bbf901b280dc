use crate::{
    CoreError, Drag, DragLocation, DragOutcome, Order, Reposition, Result as CoreErrorResult,
    Status,
};

/// The orders of one stage column, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub stage: Status,
    pub orders: Vec<Order>,
}

impl Bucket {
    fn new(stage: Status) -> Self {
        Self {
            stage,
            orders: Vec::new(),
        }
    }

    /// Rewrite every order's index to its position, `0..n-1`.
    fn reindex(&mut self) {
        for (index, order) in self.orders.iter_mut().enumerate() {
            order.index = Some(index);
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Orders partitioned into one bucket per board stage.
///
/// Every mutation leaves each bucket indexed `0..n-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    buckets: Vec<Bucket>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            buckets: Status::BOARD.iter().copied().map(Bucket::new).collect(),
        }
    }
}

impl Board {
    /// Partition a flat order list into stage buckets.
    ///
    /// Archived orders are left out. Within a bucket, orders are sorted by
    /// their stored index (orders without one keep their arrival order and
    /// go last), then re-indexed.
    pub fn from_orders<I>(orders: I) -> Self
    where
        I: IntoIterator<Item = Order>,
    {
        let mut board = Self::default();

        for order in orders {
            if let Some(position) = order.status.board_position() {
                board.buckets[position].orders.push(order);
            }
        }

        for bucket in &mut board.buckets {
            bucket
                .orders
                .sort_by_key(|order| order.index.unwrap_or(usize::MAX));
            bucket.reindex();
        }

        board
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Orders in the given stage; empty for the archival state.
    pub fn bucket(&self, stage: Status) -> &[Order] {
        stage
            .board_position()
            .map(|position| self.buckets[position].orders.as_slice())
            .unwrap_or(&[])
    }

    /// Number of orders on the board.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.orders.iter())
            .find(|order| order.id == order_id)
    }

    /// Apply a drag gesture to the board.
    ///
    /// A drag without destination is a no-op. An invalid source leaves the
    /// board untouched. A destination index past the end of the column
    /// appends.
    #[track_caller]
    pub fn apply_drag(&mut self, drag: Drag) -> CoreErrorResult<DragOutcome> {
        let Some(destination) = drag.destination else {
            return Ok(DragOutcome::Cancelled);
        };

        let source_position = Self::column(drag.source.stage)?;
        let destination_position = Self::column(destination.stage)?;
        self.check_source(drag.source)?;

        if source_position == destination_position {
            let bucket = &mut self.buckets[source_position];
            let order = bucket.orders.remove(drag.source.index);
            let order_id = order.id.clone();
            let at = destination.index.min(bucket.orders.len());
            bucket.orders.insert(at, order);
            bucket.reindex();

            return Ok(DragOutcome::Reordered {
                order_id,
                stage: drag.source.stage,
            });
        }

        let mut order = self.buckets[source_position]
            .orders
            .remove(drag.source.index);
        order.status = destination.stage;
        let order_id = order.id.clone();

        let target = &mut self.buckets[destination_position];
        let at = destination.index.min(target.orders.len());
        target.orders.insert(at, order);

        self.buckets[source_position].reindex();
        self.buckets[destination_position].reindex();

        Ok(DragOutcome::Moved {
            order_id,
            from: drag.source.stage,
            to: destination.stage,
        })
    }

    /// Flatten the board, in stage order, into the batch reposition payload.
    ///
    /// Indices restart at zero in every stage; they are not a board-wide
    /// counter.
    pub fn repositions(&self) -> Vec<Reposition> {
        self.buckets
            .iter()
            .flat_map(|bucket| {
                bucket
                    .orders
                    .iter()
                    .enumerate()
                    .map(|(index, order)| Reposition {
                        id: order.id.clone(),
                        status: bucket.stage,
                        index,
                    })
            })
            .collect()
    }

    #[track_caller]
    fn column(stage: Status) -> CoreErrorResult<usize> {
        stage
            .board_position()
            .ok_or_else(|| CoreError::invalid_drag(format!("'{stage}' is not a board column")))
    }

    #[track_caller]
    fn check_source(&self, source: DragLocation) -> CoreErrorResult<()> {
        let len = self.bucket(source.stage).len();
        if source.index >= len {
            return Err(CoreError::invalid_drag(format!(
                "no order at {}:{} (column holds {})",
                source.stage, source.index, len
            )));
        }
        Ok(())
    }
}
