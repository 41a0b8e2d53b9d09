//! The remote moodboard loader node behavior.
//!
//! Adds a "Load Boards" button to its node. A press validates the API key,
//! fetches the board list on a worker thread, and opens the board selector
//! once the list has arrived; the chosen id lands in the hidden `board_id`
//! widget. Fetch and credential errors go through the host's blocking
//! notifier before the dialog would ever open.

use crate::host::{NodeWidgets, Notifier, API_KEY_WIDGET, BOARD_ID_WIDGET, BROWSE_BUTTON};
use boardflow_core::{BoardSummary, Moodboard};
use boardflow_io::{IoError, RemoteClient, Result};
use boardflow_ui::{BoardSelector, SelectorError, SelectorResponse};
use crossbeam_channel::{Receiver, TryRecvError};
use std::thread;
use tracing::{debug, info, warn};

/// Per-node behavior for the remote loader.
#[derive(Default)]
pub struct RemoteBoardLoader {
    selector: BoardSelector,
    /// In-flight board list fetch, at most one.
    fetch_rx: Option<Receiver<Result<Vec<BoardSummary>>>>,
    /// Pending selection from an open dialog.
    selection_rx: Option<Receiver<String>>,
    api_base: Option<String>,
}

impl RemoteBoardLoader {
    /// Creates a behavior talking to the production API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API base URL, for tests and self-hosted deployments.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Called once by the host when the node is created.
    pub fn on_created(&mut self, node: &mut dyn NodeWidgets) {
        node.add_button(BROWSE_BUTTON, "Load Boards");
    }

    /// Called by the host when one of this node's buttons is pressed.
    pub fn on_button(&mut self, button: &str, node: &dyn NodeWidgets, notifier: &mut dyn Notifier) {
        if button != BROWSE_BUTTON {
            return;
        }
        if self.fetch_rx.is_some() {
            debug!("board list fetch already in flight");
            return;
        }
        let api_key = node.widget_value(API_KEY_WIDGET).unwrap_or_default();
        if api_key.is_empty() {
            notifier.error("Please enter an API key first.");
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded(1);
        let api_base = self.api_base.clone();
        thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(Err(IoError::Io(e)));
                    return;
                }
            };
            let result = rt.block_on(async {
                let mut client = RemoteClient::new(api_key)?;
                if let Some(base) = api_base {
                    client = client.with_api_base(base);
                }
                client.list_boards().await
            });
            if tx.send(result).is_err() {
                debug!("board list receiver dropped");
            }
        });
        self.fetch_rx = Some(rx);
    }

    /// Whether a board list fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        self.fetch_rx.is_some()
    }

    /// Whether the board selector is open.
    pub fn is_browsing(&self) -> bool {
        self.selector.is_open()
    }

    /// Opens the board selector over an already-fetched list.
    pub fn open_browser(&mut self, boards: Vec<BoardSummary>) -> std::result::Result<(), SelectorError> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.selector.open(boards, move |board_id| {
            let _ = tx.send(board_id);
        })?;
        self.selection_rx = Some(rx);
        Ok(())
    }

    /// Per-frame hook, called by the host with the active egui context.
    ///
    /// Drains the fetch worker, shows the selector, and applies a delivered
    /// selection to the `board_id` widget.
    pub fn update(
        &mut self,
        ctx: &egui::Context,
        node: &mut dyn NodeWidgets,
        notifier: &mut dyn Notifier,
    ) -> SelectorResponse {
        if let Some(rx) = &self.fetch_rx {
            match rx.try_recv() {
                Ok(result) => {
                    self.fetch_rx = None;
                    match result {
                        Ok(boards) => {
                            info!(count = boards.len(), "board list fetched");
                            if let Err(e) = self.open_browser(boards) {
                                warn!(error = %e, "could not open board selector");
                            }
                        }
                        Err(e) => notifier.error(&format!("Failed to load boards: {e}")),
                    }
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.fetch_rx = None;
                    notifier.error("Failed to load boards: fetch worker exited");
                }
            }
        }

        let response = self.selector.show(ctx);

        if let Some(rx) = &self.selection_rx {
            if let Ok(board_id) = rx.try_recv() {
                node.set_widget_value(BOARD_ID_WIDGET, &board_id);
                self.selection_rx = None;
            }
        }
        if !self.selector.is_open() {
            self.selection_rx = None;
        }

        response
    }

    /// Evaluation entry: fetches the configured board.
    pub fn load(&self, node: &dyn NodeWidgets) -> Result<Moodboard> {
        let api_key = node.widget_value(API_KEY_WIDGET).unwrap_or_default();
        let board_id = node.widget_value(BOARD_ID_WIDGET).unwrap_or_default();
        let mut client = RemoteClient::new(api_key)?;
        if let Some(base) = &self.api_base {
            client = client.with_api_base(base.clone());
        }
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        rt.block_on(client.fetch_board(&board_id))
    }
}
