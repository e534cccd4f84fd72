//! Shared upstream builders and event helpers.

#![allow(dead_code)]

use futures::StreamExt;
use serde_json::{json, Value};

use agent_foundry::error::FoundryError;
use agent_foundry::translate::{translate, TranslatorSettings};
use agent_foundry::types::*;

pub const MODEL: &str = "model";
pub const TOOLS: &str = "tools";

/// Record carrying flat text content during `step`.
pub fn text_chunk(step: &str, text: &str) -> UpstreamChunk {
    UpstreamChunk::new(json!({ "content": text })).with_meta("langgraph_node", step)
}

/// Record carrying one `tool_call_chunk` block during the model step.
pub fn tool_chunk(id: Option<&str>, name: Option<&str>, args: &str) -> UpstreamChunk {
    let mut block = json!({ "type": "tool_call_chunk", "args": args });
    if let Some(id) = id {
        block["id"] = Value::from(id);
    }
    if let Some(name) = name {
        block["name"] = Value::from(name);
    }
    UpstreamChunk::new(json!({ "content_blocks": [block] })).with_meta("langgraph_node", MODEL)
}

/// Upstream that yields `chunks` and then ends.
pub fn upstream(chunks: Vec<UpstreamChunk>) -> UpstreamStream {
    Box::pin(futures::stream::iter(chunks.into_iter().map(Ok)))
}

/// Upstream that yields `chunks` and then fails with `error`.
pub fn failing_upstream(chunks: Vec<UpstreamChunk>, error: FoundryError) -> UpstreamStream {
    let items: Vec<Result<UpstreamChunk, FoundryError>> =
        chunks.into_iter().map(Ok).chain(std::iter::once(Err(error))).collect();
    Box::pin(futures::stream::iter(items))
}

pub fn identity() -> RunIdentity {
    RunIdentity::resolve(Some("thread_1".into()), Some("run_1".into()))
}

/// Events of a pass plus the error it ended with, if any.
pub struct Outcome {
    pub events: Vec<AgUiEvent>,
    pub error: Option<FoundryError>,
}

pub async fn run(upstream: UpstreamStream, settings: TranslatorSettings) -> Outcome {
    let mut stream = translate(upstream, identity(), settings);
    let mut events = Vec::new();
    let mut error = None;
    while let Some(item) = stream.next().await {
        match item {
            Ok(event) => {
                assert!(error.is_none(), "event after error: {event:?}");
                events.push(event);
            }
            Err(err) => error = Some(err),
        }
    }
    Outcome { events, error }
}

pub async fn run_default(upstream: UpstreamStream) -> Outcome {
    run(upstream, TranslatorSettings::default()).await
}

/// AG-UI type names, in order.
pub fn types(events: &[AgUiEvent]) -> Vec<&'static str> {
    events.iter().map(AgUiEvent::event_type).collect()
}

pub fn kinds(events: &[AgUiEvent]) -> Vec<EventKind> {
    events.iter().map(|e| e.kind.clone()).collect()
}

/// Id of the first TEXT_MESSAGE_START, if any.
pub fn first_message_id(events: &[AgUiEvent]) -> Option<String> {
    events.iter().find_map(|e| match &e.kind {
        EventKind::TextMessageStart { message_id, .. } => Some(message_id.clone()),
        _ => None,
    })
}

/// Concatenated TOOL_CALL_ARGS deltas of one call.
pub fn tool_args(events: &[AgUiEvent], call_id: &str) -> String {
    events
        .iter()
        .filter_map(|e| match &e.kind {
            EventKind::ToolCallArgs { tool_call_id, delta } if tool_call_id == call_id => {
                Some(delta.as_str())
            }
            _ => None,
        })
        .collect()
}

/// Concatenated TEXT_MESSAGE_CONTENT deltas of one message.
pub fn message_text(events: &[AgUiEvent], id: &str) -> String {
    events
        .iter()
        .filter_map(|e| match &e.kind {
            EventKind::TextMessageContent { message_id, delta } if message_id == id => {
                Some(delta.as_str())
            }
            _ => None,
        })
        .collect()
}

/// Check run/step/message/tool-call bracketing and the one-open-at-a-time rule.
pub fn assert_well_bracketed(events: &[AgUiEvent]) {
    assert_eq!(events.first().map(AgUiEvent::event_type), Some("RUN_STARTED"));
    let last = events.last().map(AgUiEvent::event_type);
    assert!(
        matches!(last, Some("RUN_FINISHED") | Some("RUN_ERROR")),
        "last event was {last:?}"
    );
    let finished = last == Some("RUN_FINISHED");

    let mut step: Option<String> = None;
    let mut message: Option<String> = None;
    let mut call: Option<String> = None;
    for event in &events[1..events.len() - 1] {
        match &event.kind {
            EventKind::StepStarted { step_name } => {
                assert!(step.is_none(), "step {step_name} started inside {step:?}");
                step = Some(step_name.clone());
            }
            EventKind::StepFinished { step_name } => {
                assert_eq!(step.take().as_deref(), Some(step_name.as_str()));
            }
            EventKind::TextMessageStart { message_id, .. } => {
                assert!(message.is_none(), "second open message {message_id}");
                message = Some(message_id.clone());
            }
            EventKind::TextMessageContent { message_id, .. } => {
                assert_eq!(message.as_deref(), Some(message_id.as_str()));
            }
            EventKind::TextMessageEnd { message_id } => {
                assert_eq!(message.take().as_deref(), Some(message_id.as_str()));
            }
            EventKind::ToolCallStart { tool_call_id, .. } => {
                assert!(call.is_none(), "second open tool call {tool_call_id}");
                call = Some(tool_call_id.clone());
            }
            EventKind::ToolCallArgs { tool_call_id, .. } => {
                assert_eq!(call.as_deref(), Some(tool_call_id.as_str()));
            }
            EventKind::ToolCallEnd { tool_call_id } => {
                assert_eq!(call.take().as_deref(), Some(tool_call_id.as_str()));
            }
            EventKind::RunStarted { .. }
            | EventKind::RunFinished { .. }
            | EventKind::RunError { .. } => panic!("run event inside the run: {event:?}"),
            _ => {}
        }
    }

    if finished {
        assert!(step.is_none(), "step {step:?} left open");
        assert!(message.is_none(), "message {message:?} left open");
        assert!(call.is_none(), "tool call {call:?} left open");
    }
}
