use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond-timestamp id, strictly increasing within the process.
///
/// Two calls in the same millisecond bump the second value by one, so ids
/// stay unique for the running session even under rapid successive adds.
pub fn next_id() -> String {
    next_millis().to_string()
}

pub(crate) fn next_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}

/// Current wall-clock time in milliseconds, for ids that embed a timestamp
/// alongside their own disambiguator.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
