//! Declarative agent specifications.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::prompt::AGENT_SPEC_EVENT;
use crate::error::{FoundryError, Result};
use crate::types::AgUiEvent;

const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=2.0;

/// Model tier named by a spec; mapped to a concrete model by config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelTier {
    Pro,
    Flash,
}

fn default_agent_temperature() -> f64 {
    0.7
}

fn default_subagent_temperature() -> f64 {
    0.5
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Sub-agent exposed to its parent as a tool. Sub-agents do not nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAgentSpec {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub tools: Vec<String>,
    pub model: ModelTier,
    #[serde(default = "default_subagent_temperature")]
    pub temperature: f64,
}

/// Main agent specification, as designed by the architect agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub model: ModelTier,
    #[serde(default = "default_agent_temperature")]
    pub temperature: f64,
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subagents: Option<Vec<SubAgentSpec>>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u32>,
}

impl AgentSpec {
    pub fn subagents(&self) -> &[SubAgentSpec] {
        self.subagents.as_deref().unwrap_or_default()
    }

    /// Check ranges and naming constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        check_name("agent", &self.name)?;
        check_temperature(&self.name, self.temperature)?;
        if self.max_iterations == Some(0) {
            return Err(FoundryError::InvalidSpec(format!(
                "{}: max_iterations must be positive",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for sub in self.subagents() {
            check_name("subagent", &sub.name)?;
            check_temperature(&sub.name, sub.temperature)?;
            if !seen.insert(sub.name.as_str()) {
                return Err(FoundryError::InvalidSpec(format!(
                    "duplicate subagent name '{}'",
                    sub.name
                )));
            }
            if self.tools.contains(&sub.name) {
                return Err(FoundryError::InvalidSpec(format!(
                    "subagent '{}' shadows a tool of the same name",
                    sub.name
                )));
            }
        }
        Ok(())
    }

    /// `CUSTOM` event delivering this spec to the client after a designer run.
    pub fn to_event(&self) -> Result<AgUiEvent> {
        Ok(AgUiEvent::custom(AGENT_SPEC_EVENT, serde_json::to_value(self)?))
    }
}

fn check_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FoundryError::InvalidSpec(format!("{kind} name cannot be empty")));
    }
    Ok(())
}

fn check_temperature(owner: &str, temperature: f64) -> Result<()> {
    if !TEMPERATURE_RANGE.contains(&temperature) {
        return Err(FoundryError::InvalidSpec(format!(
            "{owner}: temperature {temperature} outside 0.0..=2.0"
        )));
    }
    Ok(())
}
