use crate::pictures::{ClipboardItem, PasteOutcome, PictureFile, classify_paste};
use crate::{CliClientResult, Client, ClientError, OrderFeed};

use hangar_core::{Board, Drag, DragOutcome, Order, OrderDraft, OrderEdit};

use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

/// Result of adding pictures to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReport {
    pub order_id: String,
    pub uploaded: usize,
    pub pictures: Vec<String>,
}

/// The board as one client sees it: the local partition of the order feed,
/// kept optimistic between drags and refetches.
///
/// A failed write is not rolled back; the local board stays ahead of the
/// server until the next refresh.
pub struct BoardSession<'a> {
    client: &'a Client,
    feed: OrderFeed<'a>,
    board: Board,
}

impl<'a> BoardSession<'a> {
    pub fn new(client: &'a Client, poll_interval: Duration) -> Self {
        Self {
            client,
            feed: OrderFeed::new(client, poll_interval),
            board: Board::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn client(&self) -> &'a Client {
        self.client
    }

    /// Refetch the orders and rebuild the board from them.
    pub async fn refresh(&mut self) -> CliClientResult<&Board> {
        let orders = self.feed.revalidate().await?.to_vec();
        self.board = Board::from_orders(orders);
        Ok(&self.board)
    }

    /// Refresh after a write; a failure only costs freshness.
    async fn refresh_quietly(&mut self) {
        if let Err(e) = self.refresh().await {
            warn!("Refresh after write failed: {}", e);
        }
    }

    /// Keep the board in sync with the server, calling `on_board` after
    /// every successful poll.
    pub async fn watch<F>(&mut self, max_ticks: Option<usize>, mut on_board: F)
    where
        F: FnMut(&Board),
    {
        let board = &mut self.board;
        self.feed
            .poll(max_ticks, |orders| {
                *board = Board::from_orders(orders.to_vec());
                on_board(board);
            })
            .await;
    }

    /// Board order with the given id, refreshing once if it is not known yet.
    pub async fn find_order(&mut self, order_id: &str) -> CliClientResult<Order> {
        if self.board.find(order_id).is_none() {
            self.refresh().await?;
        }

        self.board
            .find(order_id)
            .cloned()
            .ok_or_else(|| ClientError::api_error("NOT_FOUND", format!("Order {order_id} not found")))
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Apply a drag locally, then commit the whole board in one batch.
    ///
    /// The local board changes before the request is sent. If the batch call
    /// fails the error is returned and the local change stays.
    pub async fn drag(&mut self, drag: Drag) -> CliClientResult<DragOutcome> {
        let outcome = self.board.apply_drag(drag)?;

        if !outcome.changed() {
            debug!("Drag released outside the board, nothing to persist");
            return Ok(outcome);
        }

        let batch = self.board.repositions();
        info!("Committing {} positions after {:?}", batch.len(), outcome);
        self.client.batch_reposition(&batch).await?;

        self.refresh_quietly().await;
        Ok(outcome)
    }

    // =========================================================================
    // Order lifecycle
    // =========================================================================

    /// Validate the draft and create the order. Nothing is sent when the
    /// draft is invalid.
    pub async fn create_order(&mut self, draft: &OrderDraft) -> CliClientResult<Value> {
        let payload = draft.validate()?;
        let created = self.client.create_order(&payload).await?;
        self.refresh_quietly().await;
        Ok(created)
    }

    pub async fn update_order(&mut self, edit: &OrderEdit) -> CliClientResult<Value> {
        let update = edit.validate()?;
        let updated = self.client.update_order(&edit.order_id, &update).await?;
        self.refresh_quietly().await;
        Ok(updated)
    }

    pub async fn delete_order(&mut self, order_id: &str) -> CliClientResult<Value> {
        let deleted = self.client.delete_order(order_id).await?;
        self.refresh_quietly().await;
        Ok(deleted)
    }

    pub async fn mark_done(&mut self, order_id: &str) -> CliClientResult<Value> {
        let archived = self.client.mark_done(order_id).await?;
        self.refresh_quietly().await;
        Ok(archived)
    }

    pub async fn mark_undone(&mut self, order_id: &str) -> CliClientResult<Value> {
        let restored = self.client.mark_undone(order_id).await?;
        self.refresh_quietly().await;
        Ok(restored)
    }

    // =========================================================================
    // Pictures
    // =========================================================================

    /// Upload files to an order, then reload its pictures and the board.
    ///
    /// Every input path (files, URL, paste) ends here.
    pub async fn append_pictures(
        &mut self,
        order_id: &str,
        files: Vec<PictureFile>,
    ) -> CliClientResult<UploadReport> {
        if files.is_empty() {
            return Err(ClientError::picture("No files selected for upload"));
        }

        info!("Uploading {} picture(s) to order {}", files.len(), order_id);
        self.client.upload_pictures(order_id, &files).await?;
        self.refresh_quietly().await;

        let pictures = self.client.list_pictures(order_id).await?;
        Ok(UploadReport {
            order_id: order_id.to_string(),
            uploaded: files.len(),
            pictures,
        })
    }

    pub async fn append_from_paths(
        &mut self,
        order_id: &str,
        paths: &[PathBuf],
    ) -> CliClientResult<UploadReport> {
        let files = paths
            .iter()
            .map(|path| PictureFile::from_path(path))
            .collect::<CliClientResult<Vec<_>>>()?;

        if let Some(file) = files.iter().find(|file| !file.is_image()) {
            return Err(ClientError::picture(format!(
                "{} is not an image file",
                file.name
            )));
        }

        self.append_pictures(order_id, files).await
    }

    pub async fn append_from_url(
        &mut self,
        order_id: &str,
        url: &str,
    ) -> CliClientResult<UploadReport> {
        let file = self.client.fetch_image(url).await?;
        self.append_pictures(order_id, vec![file]).await
    }

    /// Resolve pasted content: image data is uploaded directly, a pasted
    /// image link is downloaded first.
    pub async fn append_from_paste(
        &mut self,
        order_id: &str,
        items: Vec<ClipboardItem>,
    ) -> CliClientResult<UploadReport> {
        match classify_paste(items) {
            PasteOutcome::Files(files) => self.append_pictures(order_id, files).await,
            PasteOutcome::Url(url) => self.append_from_url(order_id, &url).await,
            PasteOutcome::Empty => Err(ClientError::picture(
                "No images found in clipboard. Try copying an image first.",
            )),
        }
    }

    /// Delete one picture and return what is left.
    pub async fn delete_picture(
        &mut self,
        order_id: &str,
        filename: &str,
    ) -> CliClientResult<Vec<String>> {
        self.client.delete_picture(order_id, filename).await?;
        let pictures = self.client.list_pictures(order_id).await?;
        self.refresh_quietly().await;
        Ok(pictures)
    }
}
