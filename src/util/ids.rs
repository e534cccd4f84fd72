//! Prefixed opaque identifiers for runs, messages and tool calls.

use uuid::Uuid;

/// Prefix for generated thread ids.
pub const THREAD_PREFIX: &str = "thread";
/// Prefix for generated run ids.
pub const RUN_PREFIX: &str = "run";
/// Prefix for assistant text message ids.
pub const MESSAGE_PREFIX: &str = "msg";
/// Prefix for tool result message ids.
pub const TOOL_MESSAGE_PREFIX: &str = "toolmsg";

/// Generate `<prefix>_<32 lowercase hex chars>`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}
