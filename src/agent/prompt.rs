//! System prompt of the agent-designer run.

use crate::tools::ToolRegistry;

/// Name of the custom event carrying a designed spec back to the client.
pub const AGENT_SPEC_EVENT: &str = "agent_spec";

const CATALOG_PLACEHOLDER: &str = "{tool_catalog}";

const MASTER_PROMPT_TEMPLATE: &str = "\
## Role
You are an AI agent architect. Understand what the user needs through
conversation and design an agent configuration for it.

## Configuration fields
- **name**: identifier, e.g. `weather_assistant`
- **description**: one-sentence summary
- **system_prompt**: role, style and constraints as a structured prompt
- **model**: \"pro\" by default, \"flash\" for simple tasks
- **temperature**: 0.7 by default; lower for precise tasks, higher for creative ones
- **tools**: exact names from the catalog below

## Available tools
{tool_catalog}
";

/// Designer system prompt with the registry's catalog filled in.
///
/// Plain substitution, since tool descriptions may contain braces.
pub fn master_system_prompt(registry: &ToolRegistry) -> String {
    MASTER_PROMPT_TEMPLATE.replace(CATALOG_PLACEHOLDER, &registry.render_catalog())
}
