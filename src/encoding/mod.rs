//! Server-sent event framing for outbound events.

use std::fmt::Debug;

use futures::stream::BoxStream;
use futures::StreamExt;
use serde::Serialize;

use crate::error::FoundryError;
use crate::types::AgUiEvent;

/// Encode one event as `data: <json>\n\n`.
pub fn encode_event(event: &AgUiEvent) -> String {
    encode_frame(event)
}

/// Encode any serializable value as one SSE frame.
///
/// Compact single-line JSON with non-ASCII kept as-is. If the value cannot be
/// serialized, its debug representation is sent as a JSON string instead.
pub fn encode_frame<T: Serialize + Debug>(value: &T) -> String {
    let body = serde_json::to_string(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "event serialization failed; sending debug text");
        fallback_body(value)
    });
    format!("data: {body}\n\n")
}

fn fallback_body<T: Debug>(value: &T) -> String {
    let text = format!("{value:?}");
    serde_json::to_string(&text).unwrap_or_else(|_| format!("\"{}\"", text.escape_default()))
}

/// Frame every event of a translated stream; errors pass through untouched.
pub fn encode_stream(
    events: BoxStream<'static, Result<AgUiEvent, FoundryError>>,
) -> BoxStream<'static, Result<String, FoundryError>> {
    Box::pin(events.map(|item| item.map(|event| encode_event(&event))))
}
