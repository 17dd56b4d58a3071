use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::constants::LOG_BUFFER_CAP;

/// Shared in-app logger backing the log view dialog.
///
/// Bounded: old entries fall off once the buffer is full.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAP))),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted = format!("[{}] {}", timestamp, message);

        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == LOG_BUFFER_CAP {
                entries.pop_front();
            }
            entries.push_back(formatted);
        }
    }

    /// Get all entries, newest first
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            entries.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
