use std::sync::{Arc, Mutex};

use crate::domain::ports::Notifier;

/// In-memory notification sink. Messages accumulate until cleared, so a UI
/// (or a test) can read back everything the service reported. Clones share
/// the same store.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("message log lock poisoned").clone()
    }

    pub fn clear(&self) {
        self.messages.lock().expect("message log lock poisoned").clear();
    }
}

impl Notifier for MessageLog {
    fn add(&self, message: &str) {
        self.messages
            .lock()
            .expect("message log lock poisoned")
            .push(message.to_string());
    }
}

/// Notifier that forwards messages to the log stream. Suits the CLI, where
/// there is no message pane to render into.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn add(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
