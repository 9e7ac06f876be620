//! Logging utilities.
//!
//! The crate reports through the [`log`] facade. This module provides an
//! optional in-memory logger keeping the last records in a bounded queue,
//! so an application can show them without writing to the terminal it is
//! drawing on.

use lazy_static::lazy_static;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Number of records kept in the queue.
pub const CAPACITY: usize = 1_000;

/// Saves all log records in a global deque.
///
/// Install it with [`init()`], read the records back with [`drain()`].
pub struct StateLogger;

static LOGGER: StateLogger = StateLogger;

/// A log record.
#[derive(Clone, Debug)]
pub struct Record {
    /// Log level used for this record
    pub level: log::Level,
    /// Module that emitted this record
    pub target: String,
    /// Time this message was logged
    pub time: time::OffsetDateTime,
    /// Message content
    pub message: String,
}

lazy_static! {
    /// Circular buffer for logs.
    pub static ref LOGS: Mutex<VecDeque<Record>> =
        Mutex::new(VecDeque::with_capacity(CAPACITY));
}

/// Appends `record`, dropping the oldest entries to stay under `capacity`.
fn push_bounded(logs: &mut VecDeque<Record>, record: Record, capacity: usize) {
    while logs.len() >= capacity.max(1) {
        logs.pop_front();
    }
    logs.push_back(record);
}

fn to_record(record: &log::Record<'_>) -> Record {
    Record {
        level: record.level(),
        target: record.target().to_string(),
        message: format!("{}", record.args()),
        time: time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc()),
    }
}

impl log::Log for StateLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        // Records survive a poisoned lock.
        let mut logs = LOGS.lock().unwrap_or_else(|e| e.into_inner());
        push_bounded(&mut logs, to_record(record), CAPACITY);
    }

    fn flush(&self) {}
}

/// Initialize the in-memory logger.
///
/// Returns an error if another logger was already installed.
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Removes and returns every record currently in the queue.
pub fn drain() -> Vec<Record> {
    LOGS.lock()
        .unwrap_or_else(|e| e.into_inner())
        .drain(..)
        .collect()
}
