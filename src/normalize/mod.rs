//! Upstream record normalization.
//!
//! Records are probed by capability rather than by type: each extractor
//! either recognizes a shape and returns its blocks, or declines with `None`
//! so the next one can try. Nothing here fails; unsupported shapes resolve to
//! no blocks.

use serde_json::{Map, Value};

use crate::types::{ContentBlock, NormalizedRecord, ToolCallFragment, UpstreamChunk};

/// Metadata key carrying the step/node name by default.
pub const DEFAULT_STEP_KEY: &str = "langgraph_node";

const TEXT_BLOCK: &str = "text";
const TOOL_CALL_CHUNK_BLOCK: &str = "tool_call_chunk";

type Extractor = fn(&Value) -> Option<Vec<ContentBlock>>;

/// Tried in order; the first extractor that recognizes the record wins.
const EXTRACTORS: [Extractor; 3] = [structured_blocks, flat_content, bare_string];

/// Extracts step, text and tool-call fragments from upstream records.
#[derive(Debug, Clone)]
pub struct Normalizer {
    step_key: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_KEY)
    }
}

impl Normalizer {
    pub fn new(step_key: impl Into<String>) -> Self {
        Self {
            step_key: step_key.into(),
        }
    }

    /// Normalize one record and its metadata.
    pub fn normalize(&self, chunk: &UpstreamChunk) -> NormalizedRecord {
        let mut normalized = NormalizedRecord {
            step: step_name(chunk.metadata.as_ref(), &self.step_key),
            ..Default::default()
        };

        for block in resolve_blocks(&chunk.record) {
            match block {
                ContentBlock::Text(text) => normalized.text_fragments.push(text),
                ContentBlock::ToolCallChunk(fragment) => normalized.tool_fragments.push(fragment),
            }
        }

        normalized
    }
}

/// Read the step name from metadata; non-string values are stringified.
pub fn step_name(metadata: Option<&Map<String, Value>>, key: &str) -> Option<String> {
    scalar_text(metadata?.get(key)?)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Resolve the content blocks of a record of any shape.
pub fn resolve_blocks(record: &Value) -> Vec<ContentBlock> {
    EXTRACTORS
        .iter()
        .find_map(|extract| extract(record))
        .unwrap_or_default()
}

/// `{"content_blocks": [...]}`; non-object entries are skipped.
fn structured_blocks(record: &Value) -> Option<Vec<ContentBlock>> {
    let blocks = record.get("content_blocks")?.as_array()?;
    Some(
        blocks
            .iter()
            .filter_map(Value::as_object)
            .filter_map(parse_block)
            .collect(),
    )
}

/// `{"content": ...}` as a string or a list of parts.
fn flat_content(record: &Value) -> Option<Vec<ContentBlock>> {
    let content = record.get("content")?;
    let blocks = match content {
        Value::String(text) => text_block(text).into_iter().collect(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| match part {
                Value::String(text) => text_block(text),
                Value::Object(obj) => parse_block(obj),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Some(blocks)
}

/// The record is itself a string.
fn bare_string(record: &Value) -> Option<Vec<ContentBlock>> {
    record
        .as_str()
        .map(|text| text_block(text).into_iter().collect())
}

fn text_block(text: &str) -> Option<ContentBlock> {
    (!text.is_empty()).then(|| ContentBlock::Text(text.to_string()))
}

fn parse_block(block: &Map<String, Value>) -> Option<ContentBlock> {
    match block.get("type")?.as_str()? {
        TEXT_BLOCK => text_block(block.get("text")?.as_str()?),
        TOOL_CALL_CHUNK_BLOCK => Some(ContentBlock::ToolCallChunk(ToolCallFragment {
            id: identity_field(block, "id"),
            name: identity_field(block, "name"),
            args: string_field(block, "args"),
        })),
        _ => None,
    }
}

fn string_field(block: &Map<String, Value>, key: &str) -> Option<String> {
    block.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Tool-call id or name: scalars are stringified, empty text counts as absent.
fn identity_field(block: &Map<String, Value>, key: &str) -> Option<String> {
    block
        .get(key)
        .and_then(scalar_text)
        .filter(|text| !text.is_empty())
}
