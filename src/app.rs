use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::error::Result;
use crate::models::SummarizeResponse;
use crate::services::BackendClient;
use crate::toast::{ToastKind, Toasts};
use crate::tui::{copy_to_clipboard, AppAction};
use crate::workflow::Workflow;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Completed remote call, tagged with the workflow sequence it belongs to.
pub struct RequestOutcome {
    pub seq: u64,
    pub result: Result<SummarizeResponse>,
}

pub struct App {
    // Core workflow
    pub workflow: Workflow,
    pub toasts: Toasts,
    pub share_origin: String,

    // UI State
    pub url_input: String,
    pub url_input_active: bool,
    pub show_help: bool,
    spinner_frame: usize,

    // Async state
    outcome_rx: mpsc::Receiver<RequestOutcome>,
    outcome_tx: mpsc::Sender<RequestOutcome>,

    // Services
    backend: Arc<BackendClient>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(1);

        Self {
            workflow: Workflow::new(),
            toasts: Toasts::new(),
            share_origin: config.share_origin.clone(),
            url_input: String::new(),
            url_input_active: true,
            show_help: false,
            spinner_frame: 0,
            outcome_rx,
            outcome_tx,
            backend: Arc::new(BackendClient::new(config)),
        }
    }

    pub fn handle_action(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Quit => return true,

            AppAction::EditUrl => {
                self.url_input_active = true;
            }

            AppAction::Submit | AppAction::UrlInputConfirm => {
                self.url_input_active = false;
                self.submit();
            }

            AppAction::OpenOriginal => {
                if let Some(summary) = self.workflow.state().summary() {
                    let _ = open::that(&summary.original_url);
                }
            }

            AppAction::OpenShareLink => {
                if let Some(link) = self.workflow.share_link(&self.share_origin) {
                    let _ = open::that(&link);
                }
            }

            AppAction::CopyShareLink => {
                self.copy_share_link();
            }

            AppAction::DismissToast => {
                self.toasts.dismiss();
            }

            AppAction::ShowHelp => {
                self.show_help = true;
            }

            AppAction::HideHelp => {
                self.show_help = false;
            }

            AppAction::UrlInputChar(c) => {
                self.url_input.push(c);
            }

            AppAction::UrlInputBackspace => {
                self.url_input.pop();
            }

            AppAction::UrlInputClear => {
                self.url_input.clear();
            }

            AppAction::UrlInputCancel => {
                self.url_input_active = false;
            }
        }

        false
    }

    /// Begin a new summarization request. Local validation happens in the
    /// workflow; only when it hands back a sequence number does a remote call
    /// get spawned, so an empty submission never touches the network.
    fn submit(&mut self) {
        let Some(seq) = self.workflow.begin(&self.url_input) else {
            return;
        };

        let article_url = self.url_input.trim().to_string();
        let backend = Arc::clone(&self.backend);
        let tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let result = backend.summarize(&article_url).await;
            let _ = tx.send(RequestOutcome { seq, result }).await;
        });
    }

    /// Poll for a completed summarize call (non-blocking). Stale outcomes
    /// are discarded by the workflow's sequence guard.
    pub fn poll_outcome(&mut self) {
        if let Ok(outcome) = self.outcome_rx.try_recv() {
            if let Err(e) = &outcome.result {
                tracing::warn!("Summarize request failed: {}", e);
            }
            self.workflow.complete(outcome.seq, outcome.result);
        }
    }

    fn copy_share_link(&mut self) {
        let Some(link) = self.workflow.share_link(&self.share_origin) else {
            self.toasts
                .notify(ToastKind::Warning, "Nenhum resumo para compartilhar.");
            return;
        };

        match copy_to_clipboard(&link) {
            Ok(()) => self.toasts.notify(ToastKind::Success, "Link copiado!"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {}", e);
                self.toasts
                    .notify(ToastKind::Danger, "Não foi possível copiar o link.");
            }
        }
    }

    /// Advance per-frame state: spinner animation and the toast expiry.
    pub fn tick(&mut self) {
        if self.workflow.state().is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
        self.toasts.tick(Instant::now());
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }
}
