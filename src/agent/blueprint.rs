//! Resolving a spec into concrete model, tools and sub-agents.

use std::fmt;
use std::sync::Arc;

use super::spec::{AgentSpec, ModelTier, SubAgentSpec};
use crate::config::FoundryConfig;
use crate::error::Result;
use crate::tools::{Tool, ToolRegistry};

/// An agent ready to hand to an execution backend.
#[derive(Clone)]
pub struct AgentBlueprint {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub tier: ModelTier,
    /// Concrete model name resolved from `tier`.
    pub model: String,
    pub temperature: f64,
    pub tools: Vec<Arc<dyn Tool>>,
    pub subagents: Vec<AgentBlueprint>,
    pub max_iterations: Option<u32>,
}

impl fmt::Debug for AgentBlueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentBlueprint")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("tools", &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>())
            .field("subagents", &self.subagents)
            .finish()
    }
}

impl AgentBlueprint {
    /// Validate the spec, then resolve its model and load its tools and sub-agents.
    pub fn assemble(
        spec: &AgentSpec,
        registry: &ToolRegistry,
        config: &FoundryConfig,
    ) -> Result<Self> {
        spec.validate()?;

        let tools = registry.load(&spec.tools)?;
        let subagents = spec
            .subagents()
            .iter()
            .map(|sub| Self::assemble_subagent(sub, registry, config))
            .collect::<Result<Vec<_>>>()?;

        let blueprint = Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            system_prompt: spec.system_prompt.clone(),
            tier: spec.model,
            model: config.model_for(spec.model).to_string(),
            temperature: spec.temperature,
            tools,
            subagents,
            max_iterations: spec.max_iterations,
        };
        tracing::info!(
            agent = %blueprint.name,
            tools = blueprint.tools.len(),
            subagents = blueprint.subagents.len(),
            model = %blueprint.model,
            temperature = blueprint.temperature,
            "assembled agent"
        );
        Ok(blueprint)
    }

    fn assemble_subagent(
        spec: &SubAgentSpec,
        registry: &ToolRegistry,
        config: &FoundryConfig,
    ) -> Result<Self> {
        Ok(Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            system_prompt: spec.system_prompt.clone(),
            tier: spec.model,
            model: config.model_for(spec.model).to_string(),
            temperature: spec.temperature,
            tools: registry.load(&spec.tools)?,
            subagents: Vec::new(),
            max_iterations: None,
        })
    }

    /// Names the model can call: registered tools, then sub-agents.
    pub fn callable_names(&self) -> Vec<String> {
        self.tools
            .iter()
            .map(|t| t.name().to_string())
            .chain(self.subagents.iter().map(|s| s.name.clone()))
            .collect()
    }
}
