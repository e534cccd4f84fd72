//! Upstream captures in JSONL form.
//!
//! Each non-blank line is either an upstream chunk
//! (`{"record": ..., "metadata": {...}}`) or a simulated failure
//! (`{"error": "message"}`). Lines that parse as neither are failures too.

use std::path::Path;

use futures::StreamExt;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;

use crate::error::{FoundryError, Result};
use crate::types::{UpstreamChunk, UpstreamStream};

#[derive(Deserialize)]
#[serde(untagged)]
enum CaptureLine {
    Failure { error: String },
    Chunk(UpstreamChunk),
}

/// Parse one capture line into an upstream item.
pub fn parse_capture_line(line: &str) -> Result<UpstreamChunk> {
    match serde_json::from_str::<CaptureLine>(line)? {
        CaptureLine::Chunk(chunk) => Ok(chunk),
        CaptureLine::Failure { error } => Err(FoundryError::Upstream(error)),
    }
}

/// Upstream stream over an in-memory capture.
pub fn capture_from_str(capture: &str) -> UpstreamStream {
    let items: Vec<Result<UpstreamChunk>> = capture
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_capture_line)
        .collect();
    Box::pin(futures::stream::iter(items))
}

/// Upstream stream reading a capture file line by line.
pub async fn open_capture(path: impl AsRef<Path>) -> Result<UpstreamStream> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path).await?;
    tracing::debug!(path = %path.display(), "replaying upstream capture");

    let lines = LinesStream::new(BufReader::new(file).lines());
    let stream = lines.filter_map(|line| async move {
        match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(parse_capture_line(&line)),
            Err(err) => Some(Err(FoundryError::Io(err))),
        }
    });
    Ok(Box::pin(stream))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chunk_line_keeps_record_and_metadata() {
        let chunk =
            parse_capture_line(r#"{"record":{"content":"hi"},"metadata":{"langgraph_node":"model"}}"#)
                .unwrap();
        assert_eq!(chunk.record, json!({"content": "hi"}));
        assert_eq!(
            chunk.metadata.unwrap().get("langgraph_node"),
            Some(&json!("model"))
        );
    }

    #[test]
    fn error_line_is_upstream_failure() {
        let err = parse_capture_line(r#"{"error":"backend went away"}"#).unwrap_err();
        assert!(matches!(err, FoundryError::Upstream(ref m) if m == "backend went away"));
    }

    #[test]
    fn garbage_line_is_serialization_failure() {
        let err = parse_capture_line("not json").unwrap_err();
        assert!(matches!(err, FoundryError::Serialization(_)));
    }
}
