use crate::error::AppError;
use crate::models::{CompletedSummary, SummarizeResponse};

pub const VALIDATION_MESSAGE: &str = "Por favor, insira uma URL.";
const UNKNOWN_ERROR_MESSAGE: &str = "Ocorreu um erro desconhecido.";

/// Lifecycle of one page view of the submission form. Idle is both the
/// initial state and reachable again through a new submission; there is no
/// terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Loading,
    Success(CompletedSummary),
    Failed(String),
}

impl WorkflowState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowState::Loading)
    }

    pub fn summary(&self) -> Option<&CompletedSummary> {
        match self {
            WorkflowState::Success(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// State machine for the submit → loading → result/error cycle.
///
/// The workflow never talks to the network itself: `begin` hands back a
/// sequence number for the caller to tag the remote call with, and
/// `complete` accepts the outcome. An outcome carrying a stale sequence is
/// dropped, so a response from an earlier in-flight request can never
/// overwrite newer state.
#[derive(Debug, Default)]
pub struct Workflow {
    state: WorkflowState,
    seq: u64,
    pending_url: Option<String>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Start a new submission. Returns the sequence number to tag the remote
    /// call with, or `None` when no call must be made: empty input fails
    /// locally without touching the network, and a submission while one is
    /// already in flight is ignored (single-flight).
    pub fn begin(&mut self, url: &str) -> Option<u64> {
        if self.state.is_loading() {
            return None;
        }

        let url = url.trim();
        if url.is_empty() {
            let err = AppError::Validation(VALIDATION_MESSAGE.to_string());
            self.state = WorkflowState::Failed(user_message(err));
            return None;
        }

        self.seq += 1;
        self.pending_url = Some(url.to_string());
        // Entering Loading drops any previous summary or error so no stale
        // data is shown during the new request.
        self.state = WorkflowState::Loading;
        Some(self.seq)
    }

    /// Record the outcome of the remote call tagged with `seq`. Outcomes for
    /// anything but the most recently issued request are discarded.
    pub fn complete(&mut self, seq: u64, result: Result<SummarizeResponse, AppError>) {
        if seq != self.seq || !self.state.is_loading() {
            tracing::debug!("Dropping stale summarize outcome (seq {})", seq);
            return;
        }

        let original_url = self.pending_url.take().unwrap_or_default();
        self.state = match result {
            Ok(response) => WorkflowState::Success(CompletedSummary {
                id: response.id,
                summary: response.summary,
                original_url,
            }),
            Err(err) => WorkflowState::Failed(user_message(err)),
        };
    }

    /// `<origin>/resumo/<id>` for the current result, if any.
    pub fn share_link(&self, origin: &str) -> Option<String> {
        self.state
            .summary()
            .map(|s| format!("{}/resumo/{}", origin.trim_end_matches('/'), s.id))
    }
}

/// Collapse any request error into a single user-visible message. Nothing
/// propagates past the workflow boundary.
fn user_message(err: AppError) -> String {
    let message = match err {
        AppError::Validation(m)
        | AppError::Transport(m)
        | AppError::Payload(m)
        | AppError::Unknown(m) => m,
        other => other.to_string(),
    };
    if message.is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
