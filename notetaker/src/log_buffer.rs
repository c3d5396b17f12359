use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::Level;

/// Entries kept for the in-app log screen
pub const DEFAULT_CAPACITY: usize = 5000;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe ring buffer of recent log entries.
///
/// A panic while holding the lock cannot leave the queue half-updated, so
/// a poisoned lock is simply taken over.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    max_entries: usize,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_entries))),
            max_entries,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Copy of the `count` entries ending `offset` entries before the newest
    pub fn window(&self, offset: usize, count: usize) -> Vec<LogEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let end = entries.len().saturating_sub(offset);
        let start = end.saturating_sub(count);
        entries.range(start..end).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: chrono::Local::now(),
            level: Level::INFO,
            target: "notetaker".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn drops_oldest_when_full() {
        let buffer = LogBuffer::new(2);
        buffer.push(entry("one"));
        buffer.push(entry("two"));
        buffer.push(entry("three"));

        let messages: Vec<_> = buffer.window(0, 10).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, ["two", "three"]);
    }

    #[test]
    fn window_counts_back_from_newest() {
        let buffer = LogBuffer::new(10);
        for i in 0..5 {
            buffer.push(entry(&i.to_string()));
        }

        let messages: Vec<_> = buffer.window(1, 2).into_iter().map(|e| e.message).collect();
        assert_eq!(messages, ["2", "3"]);
        assert!(buffer.window(9, 2).is_empty());
    }
}
