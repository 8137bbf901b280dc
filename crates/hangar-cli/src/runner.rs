//! Executes one parsed command line against the order API.

use crate::board_commands::BoardCommands;
use crate::cli::Cli;
use crate::commands::Commands;
use crate::order_commands::OrderCommands;
use crate::picture_commands::PictureCommands;
use crate::pictures::ClipboardItem;
use crate::render::{analytics_text, board_text, done_orders_text};
use crate::{BoardSession, CliClientResult, Client, ClientError, Notice};

use hangar_config::Config;
use hangar_core::{
    CoreError, Drag, DragLocation, DragOutcome, OrderDraft, OrderEdit, PlaneRow, Priority,
};

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use dialoguer::Confirm;
use log::info;
use serde_json::{Value, json};
use tokio::io::AsyncReadExt;

/// What a successful command prints on stdout.
#[derive(Debug)]
pub enum Output {
    Json(Value),
    Text(String),
    Nothing,
}

/// A failed command: what was attempted and why it failed.
#[derive(Debug)]
pub struct Failure {
    pub action: &'static str,
    pub source: ClientError,
}

impl Failure {
    fn to(action: &'static str) -> impl FnOnce(ClientError) -> Failure {
        move |source| Failure { action, source }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(format!(
            "Failed to {}: {}",
            self.action,
            self.source.user_message()
        ))
    }
}

type RunResult = Result<Output, Failure>;

pub async fn run(cli: Cli, client: &Client, config: &Config) -> RunResult {
    let poll_interval = Duration::from_secs(config.feed.poll_interval_secs);
    let mut session = BoardSession::new(client, poll_interval);

    match cli.command {
        Commands::Order { action } => run_order(&mut session, action).await,
        Commands::Board { action } => run_board(&mut session, action, config).await,
        Commands::Pics { action } => run_pictures(&mut session, action).await,
        Commands::Analytics { json } => {
            let report = client.analytics().await.map_err(Failure::to("load analytics"))?;
            if json {
                to_json(&report).map_err(Failure::to("load analytics"))
            } else {
                Ok(Output::Text(analytics_text(&report)))
            }
        }
    }
}

async fn run_order(session: &mut BoardSession<'_>, action: OrderCommands) -> RunResult {
    match action {
        OrderCommands::List => {
            let orders = session
                .client()
                .list_orders()
                .await
                .map_err(Failure::to("load orders"))?;
            to_json(&orders).map_err(Failure::to("load orders"))
        }

        OrderCommands::Done { text } => {
            let orders = session
                .client()
                .list_done_orders()
                .await
                .map_err(Failure::to("load done orders"))?;
            if text {
                Ok(Output::Text(done_orders_text(&orders)))
            } else {
                to_json(&orders).map_err(Failure::to("load done orders"))
            }
        }

        OrderCommands::Create {
            name,
            priority,
            planes,
        } => {
            let draft =
                parse_draft(&name, &priority, &planes).map_err(Failure::to("create order"))?;
            let created = session
                .create_order(&draft)
                .await
                .map_err(Failure::to("create order"))?;
            Notice::success("Order created successfully").emit();
            Ok(Output::Json(created))
        }

        OrderCommands::Update {
            id,
            name,
            priority,
            planes,
            add_planes,
            remove_planes,
        } => {
            let order = session
                .find_order(&id)
                .await
                .map_err(Failure::to("update order"))?;
            let mut edit = OrderEdit::from_order(&order);
            apply_edits(
                &mut edit,
                name,
                priority,
                &planes,
                &add_planes,
                remove_planes,
            )
            .map_err(Failure::to("update order"))?;

            let updated = session
                .update_order(&edit)
                .await
                .map_err(Failure::to("update order"))?;
            Notice::success("Order updated successfully").emit();
            Ok(Output::Json(updated))
        }

        OrderCommands::Delete { id, yes } => {
            let confirmed = yes
                || confirmation(
                    Confirm::new()
                        .with_prompt(format!(
                            "Delete order {id}? This action cannot be undone."
                        ))
                        .default(false)
                        .interact(),
                )
                .map_err(Failure::to("delete order"))?;

            if !confirmed {
                Notice::info("Delete cancelled").emit();
                return Ok(Output::Nothing);
            }

            let deleted = session
                .delete_order(&id)
                .await
                .map_err(Failure::to("delete order"))?;
            Notice::success("Order deleted successfully").emit();
            Ok(Output::Json(deleted))
        }

        OrderCommands::MarkDone { id } => {
            let archived = session
                .mark_done(&id)
                .await
                .map_err(Failure::to("mark order as done"))?;
            Notice::success("Order marked as done and moved to archive").emit();
            Ok(Output::Json(archived))
        }

        OrderCommands::MarkUndone { id } => {
            let restored = session
                .mark_undone(&id)
                .await
                .map_err(Failure::to("restore order"))?;
            Notice::success("Order restored to the board").emit();
            Ok(Output::Json(restored))
        }
    }
}

async fn run_board(
    session: &mut BoardSession<'_>,
    action: BoardCommands,
    config: &Config,
) -> RunResult {
    let lead_days = config.board.lead_days;

    match action {
        BoardCommands::Show { json } => {
            let board = session.refresh().await.map_err(Failure::to("load orders"))?;
            if json {
                to_json(&board.repositions()).map_err(Failure::to("load orders"))
            } else {
                Ok(Output::Text(board_text(board, Utc::now(), lead_days)))
            }
        }

        BoardCommands::Move { from, to } => {
            let drag = parse_drag(&from, to.as_deref()).map_err(Failure::to("move order"))?;
            session.refresh().await.map_err(Failure::to("move order"))?;

            let outcome = session.drag(drag).await.map_err(Failure::to("move order"))?;
            match &outcome {
                DragOutcome::Cancelled => Notice::info("Drag cancelled, nothing moved").emit(),
                DragOutcome::Reordered { stage, .. } => {
                    Notice::success(format!("Order reordered in {}", stage.label())).emit()
                }
                DragOutcome::Moved { from, to, .. } => Notice::success(format!(
                    "Order moved from {} to {}",
                    from.label(),
                    to.label()
                ))
                .emit(),
            }

            Ok(Output::Text(board_text(
                session.board(),
                Utc::now(),
                lead_days,
            )))
        }

        BoardCommands::Watch { interval, ticks } => {
            let interval = interval.unwrap_or(config.feed.poll_interval_secs).max(1);
            let mut watcher = BoardSession::new(session.client(), Duration::from_secs(interval));
            info!("Watching the board every {}s", interval);

            tokio::select! {
                _ = watcher.watch(ticks, |board| {
                    println!("{}", board_text(board, Utc::now(), lead_days));
                }) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Board watch interrupted");
                }
            }

            Ok(Output::Nothing)
        }
    }
}

async fn run_pictures(session: &mut BoardSession<'_>, action: PictureCommands) -> RunResult {
    match action {
        PictureCommands::List { order_id } => {
            let client = session.client();
            let pictures = client
                .list_pictures(&order_id)
                .await
                .map_err(Failure::to("load pictures"))?;

            let listed = pictures
                .iter()
                .map(|filename| {
                    let url = client.picture_url(filename)?;
                    Ok(json!({ "filename": filename, "url": url }))
                })
                .collect::<CliClientResult<Vec<Value>>>()
                .map_err(Failure::to("load pictures"))?;
            Ok(Output::Json(json!({ "orderId": order_id, "pictures": listed })))
        }

        PictureCommands::Delete { order_id, filename } => {
            let remaining = session
                .delete_picture(&order_id, &filename)
                .await
                .map_err(Failure::to("delete picture"))?;
            Notice::success("Picture deleted successfully").emit();
            Ok(Output::Json(json!({ "orderId": order_id, "pictures": remaining })))
        }

        PictureCommands::Upload {
            order_id,
            files,
            url,
            paste,
        } => {
            let (report, message) = if paste {
                let item = read_paste().await.map_err(Failure::to("upload pictures"))?;
                let report = session
                    .append_from_paste(&order_id, vec![item])
                    .await
                    .map_err(Failure::to("upload pictures"))?;
                let message = format!("{} image(s) pasted from clipboard", report.uploaded);
                (report, message)
            } else if let Some(url) = url {
                let report = session
                    .append_from_url(&order_id, &url)
                    .await
                    .map_err(Failure::to("load image from URL"))?;
                (report, String::from("Image loaded from URL"))
            } else {
                let report = session
                    .append_from_paths(&order_id, &files)
                    .await
                    .map_err(Failure::to("upload pictures"))?;
                (report, String::from("Pictures uploaded successfully"))
            };

            Notice::success(message).emit();
            to_json(&report).map_err(Failure::to("upload pictures"))
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> CliClientResult<Output> {
    Ok(Output::Json(serde_json::to_value(value)?))
}

fn parse_rows(rows: &[String]) -> Result<Vec<PlaneRow>, CoreError> {
    rows.iter().map(|row| PlaneRow::from_str(row)).collect()
}

pub(crate) fn parse_draft(
    name: &str,
    priority: &str,
    planes: &[String],
) -> CliClientResult<OrderDraft> {
    let priority = Priority::from_str(priority)?;
    let rows = parse_rows(planes)?;
    Ok(OrderDraft::from_rows(name, priority, rows))
}

pub(crate) fn parse_drag(from: &str, to: Option<&str>) -> CliClientResult<Drag> {
    let source = DragLocation::from_str(from)?;
    let destination = to.map(DragLocation::from_str).transpose()?;
    Ok(Drag::new(source, destination))
}

/// Apply command-line edits in a fixed order: replace, remove, append.
pub(crate) fn apply_edits(
    edit: &mut OrderEdit,
    name: Option<String>,
    priority: Option<String>,
    planes: &[String],
    add_planes: &[String],
    mut remove_planes: Vec<usize>,
) -> CliClientResult<()> {
    if let Some(name) = name {
        edit.name = name;
    }

    if let Some(priority) = priority {
        edit.priority = Priority::from_str(&priority)?;
    }

    if !planes.is_empty() {
        edit.set_planes(parse_rows(planes)?);
    }

    // Highest row first so earlier numbers stay valid.
    remove_planes.sort_unstable_by(|a, b| b.cmp(a));
    remove_planes.dedup();
    for row in remove_planes {
        if row == 0 {
            return Err(CoreError::validation("Plane rows are numbered from 1").into());
        }
        edit.remove_plane(row - 1)?;
    }

    for row in parse_rows(add_planes)? {
        let index = edit.add_plane();
        if let Some(slot) = edit.plane_mut(index) {
            *slot = row;
        }
    }

    Ok(())
}

/// Answer of a confirmation prompt. A prompt that cannot be shown (no
/// terminal) is an error, not a "no".
pub(crate) fn confirmation(answer: Result<bool, dialoguer::Error>) -> CliClientResult<bool> {
    answer.map_err(|e| {
        ClientError::prompt(format!(
            "Cannot ask for confirmation ({e}); pass --yes to delete without prompting"
        ))
    })
}

async fn read_paste() -> CliClientResult<ClipboardItem> {
    let mut data = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut data)
        .await
        .map_err(|e| ClientError::io(PathBuf::from("<stdin>"), e))?;
    Ok(ClipboardItem::from_bytes(data))
}
