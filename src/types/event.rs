//! AG-UI outbound event types.
//!
//! Events serialize to the AG-UI wire shape: a `type` tag in
//! SCREAMING_SNAKE_CASE, camelCase fields and a millisecond `timestamp`.
//!
//! ```text
//! RUN_STARTED → STEP_STARTED → TEXT_MESSAGE_START → TEXT_MESSAGE_CONTENT*
//!   → TEXT_MESSAGE_END → STEP_FINISHED → RUN_FINISHED
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::IntoStaticStr;

use crate::util::now_ms;

/// Role attached to message-bearing events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Developer,
    System,
    #[default]
    Assistant,
    User,
    Tool,
}

/// Event payload, tagged by AG-UI event type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, IntoStaticStr)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    #[serde(rename_all = "camelCase")]
    RunStarted { thread_id: String, run_id: String },

    #[serde(rename_all = "camelCase")]
    RunFinished { thread_id: String, run_id: String },

    RunError { message: String, code: String },

    #[serde(rename_all = "camelCase")]
    StepStarted { step_name: String },

    #[serde(rename_all = "camelCase")]
    StepFinished { step_name: String },

    #[serde(rename_all = "camelCase")]
    TextMessageStart { message_id: String, role: MessageRole },

    #[serde(rename_all = "camelCase")]
    TextMessageContent { message_id: String, delta: String },

    #[serde(rename_all = "camelCase")]
    TextMessageEnd { message_id: String },

    #[serde(rename_all = "camelCase")]
    ToolCallStart {
        tool_call_id: String,
        tool_call_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent_message_id: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    ToolCallArgs { tool_call_id: String, delta: String },

    #[serde(rename_all = "camelCase")]
    ToolCallEnd { tool_call_id: String },

    #[serde(rename_all = "camelCase")]
    ToolCallResult {
        message_id: String,
        tool_call_id: String,
        content: String,
        role: MessageRole,
    },

    /// Application-defined payload.
    Custom { name: String, value: Value },
}

/// A timestamped outbound event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgUiEvent {
    #[serde(flatten)]
    pub kind: EventKind,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl AgUiEvent {
    /// Stamp an event payload with the current time.
    pub fn now(kind: EventKind) -> Self {
        Self {
            kind,
            timestamp: now_ms(),
        }
    }

    /// AG-UI type name, e.g. `TOOL_CALL_ARGS`.
    pub fn event_type(&self) -> &'static str {
        (&self.kind).into()
    }

    pub fn run_started(thread_id: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self::now(EventKind::RunStarted {
            thread_id: thread_id.into(),
            run_id: run_id.into(),
        })
    }

    pub fn run_finished(thread_id: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self::now(EventKind::RunFinished {
            thread_id: thread_id.into(),
            run_id: run_id.into(),
        })
    }

    pub fn run_error(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::now(EventKind::RunError {
            message: message.into(),
            code: code.into(),
        })
    }

    pub fn step_started(step_name: impl Into<String>) -> Self {
        Self::now(EventKind::StepStarted {
            step_name: step_name.into(),
        })
    }

    pub fn step_finished(step_name: impl Into<String>) -> Self {
        Self::now(EventKind::StepFinished {
            step_name: step_name.into(),
        })
    }

    pub fn text_message_start(message_id: impl Into<String>) -> Self {
        Self::now(EventKind::TextMessageStart {
            message_id: message_id.into(),
            role: MessageRole::Assistant,
        })
    }

    pub fn text_message_content(message_id: impl Into<String>, delta: impl Into<String>) -> Self {
        Self::now(EventKind::TextMessageContent {
            message_id: message_id.into(),
            delta: delta.into(),
        })
    }

    pub fn text_message_end(message_id: impl Into<String>) -> Self {
        Self::now(EventKind::TextMessageEnd {
            message_id: message_id.into(),
        })
    }

    pub fn tool_call_start(
        tool_call_id: impl Into<String>,
        tool_call_name: impl Into<String>,
        parent_message_id: Option<String>,
    ) -> Self {
        Self::now(EventKind::ToolCallStart {
            tool_call_id: tool_call_id.into(),
            tool_call_name: tool_call_name.into(),
            parent_message_id,
        })
    }

    pub fn tool_call_args(tool_call_id: impl Into<String>, delta: impl Into<String>) -> Self {
        Self::now(EventKind::ToolCallArgs {
            tool_call_id: tool_call_id.into(),
            delta: delta.into(),
        })
    }

    pub fn tool_call_end(tool_call_id: impl Into<String>) -> Self {
        Self::now(EventKind::ToolCallEnd {
            tool_call_id: tool_call_id.into(),
        })
    }

    pub fn tool_call_result(
        message_id: impl Into<String>,
        tool_call_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::now(EventKind::ToolCallResult {
            message_id: message_id.into(),
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            role: MessageRole::Tool,
        })
    }

    /// Application-defined event, e.g. a designed agent spec sent after a run.
    pub fn custom(name: impl Into<String>, value: Value) -> Self {
        Self::now(EventKind::Custom {
            name: name.into(),
            value,
        })
    }

    /// Whether this event ends a run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            EventKind::RunFinished { .. } | EventKind::RunError { .. }
        )
    }
}
