//! Tools available to designed agents.

pub mod registry;
pub mod tool;
pub mod types;

pub use registry::ToolRegistry;
pub use tool::{AgentTool, Tool};
pub use types::{AgentToolParameters, ParameterBuilder, ToolCatalogItem};
