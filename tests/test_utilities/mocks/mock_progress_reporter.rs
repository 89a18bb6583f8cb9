use sg_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing, recording every message it receives.
///
/// Messages are held behind shared handles so assertions can run after the
/// reporter has been moved into a use case.
#[derive(Default)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    warnings: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.messages)
    }

    pub fn warnings_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.warnings)
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
