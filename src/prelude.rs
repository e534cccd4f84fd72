//! Convenience re-exports for common use.

pub use crate::agent::{AgentBlueprint, AgentSpec, ModelTier};
pub use crate::config::FoundryConfig;
pub use crate::error::{FoundryError, Result};
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolRegistry};
pub use crate::translate::{translate, EventTranslator, FailurePolicy, TranslatorSettings};
pub use crate::types::{
    AgUiEvent, EventKind, ModelMessage, Role, RunIdentity, UpstreamChunk, UpstreamStream,
};
