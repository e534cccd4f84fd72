//! Utility modules: identifiers and timestamps.

pub mod ids;

pub use ids::new_id;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
