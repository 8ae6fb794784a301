//! Record id generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Generates timestamp-derived record ids that are unique and strictly
/// increasing within a process.
///
/// Ids are seeded from the wall clock in milliseconds; when two calls land in
/// the same millisecond (or the clock steps backwards) the generator advances
/// past the last issued id instead of repeating it.
#[derive(Debug, Default)]
pub struct RecordIdGenerator {
    last: AtomicI64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Issue the next record id.
    pub fn next(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now > last { now } else { last + 1 };
            match self.last.compare_exchange_weak(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }
}
