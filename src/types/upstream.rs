//! Upstream generation records and their normalized form.

use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FoundryError;

/// One progress record from the generation backend, with its metadata bag.
///
/// `record` is untyped: backends emit plain strings, message
/// chunks with a flat `content`, or chunks exposing `content_blocks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamChunk {
    #[serde(default)]
    pub record: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl UpstreamChunk {
    pub fn new(record: Value) -> Self {
        Self {
            record,
            metadata: None,
        }
    }

    /// Attach a metadata entry.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Ordered sequence of upstream records; ends by exhaustion or an `Err`.
pub type UpstreamStream = BoxStream<'static, Result<UpstreamChunk, FoundryError>>;

/// A partial tool invocation: identity and/or a slice of JSON argument text.
///
/// Continuation fragments carry neither `id` nor `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}

impl ToolCallFragment {
    /// Fragment that opens a call.
    pub fn opening(id: impl Into<String>, name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            args: Some(args.into()),
        }
    }

    /// Argument-only continuation fragment.
    pub fn continuation(args: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            args: Some(args.into()),
        }
    }
}

/// A resolved content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text(String),
    ToolCallChunk(ToolCallFragment),
}

/// The three orthogonal facts extracted from one upstream record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub step: Option<String>,
    pub text_fragments: Vec<String>,
    pub tool_fragments: Vec<ToolCallFragment>,
}

impl NormalizedRecord {
    /// All text fragments joined in arrival order.
    pub fn text(&self) -> String {
        self.text_fragments.concat()
    }
}
