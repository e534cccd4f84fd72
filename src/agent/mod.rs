//! Agent specifications and their assembly against a tool registry.

pub mod blueprint;
pub mod prompt;
pub mod spec;

pub use blueprint::AgentBlueprint;
pub use prompt::{master_system_prompt, AGENT_SPEC_EVENT};
pub use spec::{AgentSpec, ModelTier, SubAgentSpec};
