//! Inbound run payloads and run identity resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::ModelMessage;
use crate::agent::AgentSpec;
use crate::error::{FoundryError, Result};
use crate::util::ids::{new_id, RUN_PREFIX, THREAD_PREFIX};

/// Thread/run pair identifying one translation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunIdentity {
    pub thread_id: String,
    pub run_id: String,
}

impl RunIdentity {
    /// Use caller-supplied ids, generating whichever is missing or empty.
    pub fn resolve(thread_id: Option<String>, run_id: Option<String>) -> Self {
        Self {
            thread_id: non_empty(thread_id).unwrap_or_else(|| new_id(THREAD_PREFIX)),
            run_id: non_empty(run_id).unwrap_or_else(|| new_id(RUN_PREFIX)),
        }
    }

    /// Fresh generated ids.
    pub fn generate() -> Self {
        Self::resolve(None, None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// User message of a chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUserMessage {
    #[serde(default)]
    pub id: Option<String>,
    pub content: String,
}

/// Chat request for the agent-designer run. A null `sessionId` starts a new thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub message: ChatUserMessage,
}

impl ChatRequest {
    /// Thread from the session id, run from the message id.
    pub fn identity(&self) -> RunIdentity {
        RunIdentity::resolve(self.session_id.clone(), self.message.id.clone())
    }

    pub fn messages(&self) -> Vec<ModelMessage> {
        vec![ModelMessage::user(self.message.content.clone())]
    }
}

/// Loosely-typed conversation message as sent by AG-UI clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Value,
}

impl InputMessage {
    fn content_text(&self) -> String {
        match &self.content {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Map to a model message; unknown roles pass through as user text.
    pub fn to_model_message(&self) -> ModelMessage {
        let text = self.content_text();
        match self.role.as_deref() {
            Some("system") => ModelMessage::system(text),
            Some("assistant") => ModelMessage::assistant(text),
            _ => ModelMessage::user(text),
        }
    }
}

/// Payload for running a designed agent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunAgentInput {
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub messages: Vec<InputMessage>,
    #[serde(default)]
    pub agent_spec: Option<Value>,
}

impl RunAgentInput {
    /// Parse a JSON payload (e.g. the URL-encoded `payload` of an EventSource GET).
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| FoundryError::InvalidArgument(format!("Invalid payload JSON: {e}")))?;
        if !value.is_object() {
            return Err(FoundryError::InvalidArgument(
                "payload must be a JSON object".into(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn identity(&self) -> RunIdentity {
        RunIdentity::resolve(self.thread_id.clone(), self.run_id.clone())
    }

    pub fn model_messages(&self) -> Vec<ModelMessage> {
        self.messages.iter().map(InputMessage::to_model_message).collect()
    }

    /// Parse and validate the embedded agent spec.
    pub fn agent_spec(&self) -> Result<AgentSpec> {
        let raw = self
            .agent_spec
            .clone()
            .ok_or_else(|| FoundryError::InvalidArgument("agent_spec is required".into()))?;
        let spec: AgentSpec =
            serde_json::from_value(raw).map_err(|e| FoundryError::InvalidSpec(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }
}
