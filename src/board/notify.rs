use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// A yes/no question shown before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            confirm_label: "Yes".into(),
            cancel_label: "Cancel".into(),
        }
    }

    pub fn labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }
}

/// User-facing notifications: toasts plus an asynchronous confirmation.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);

    fn info(&self, message: &str);

    /// Resolves with whether the user confirmed.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// A notifier that logs through `tracing`, or into a buffer.
///
/// Lines are recorded as `"success: ..."`, `"error: ..."`, `"info: ..."`
/// and `"confirm: <title>"`. Every confirmation is answered with the
/// decision given at construction.
pub struct LogNotifier {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
    decision: bool,
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LogNotifier {
    /// Log only; confirmations are declined.
    pub fn new() -> Self {
        LogNotifier {
            buffer: None,
            decision: false,
        }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogNotifier {
            buffer: Some(buffer),
            decision: false,
        }
    }

    /// Answer every confirmation with `decision`.
    pub fn confirming(mut self, decision: bool) -> Self {
        self.decision = decision;
        self
    }

    fn record(&self, line: String) {
        let Some(buffer) = &self.buffer else {
            return;
        };
        match buffer.lock() {
            Ok(mut lines) => lines.push(line),
            Err(_) => tracing::warn!(%line, "notifier buffer poisoned, line dropped"),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "success", "{}", message);
        self.record(format!("success: {}", message));
    }

    fn error(&self, message: &str) {
        tracing::error!(kind = "error", "{}", message);
        self.record(format!("error: {}", message));
    }

    fn info(&self, message: &str) {
        tracing::info!(kind = "info", "{}", message);
        self.record(format!("info: {}", message));
    }

    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        tracing::info!(title = %prompt.title, decision = self.decision, "confirmation requested");
        self.record(format!("confirm: {}", prompt.title));
        self.decision
    }
}
