//! Tool registry and catalog.
//!
//! Built once at startup, then shared read-only (`Arc<ToolRegistry>`) by every
//! run that assembles an agent or renders the catalog.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::tool::Tool;
use super::types::ToolCatalogItem;
use crate::error::{FoundryError, Result};

/// Catalog text when nothing is registered.
pub const NO_TOOLS: &str = "No tools available.";

/// Name-keyed set of available tools.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::debug!(tool = %name, "replaced registered tool");
        } else {
            tracing::debug!(tool = %name, "registered tool");
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool);
        self
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Tool>> {
        self.tools
            .get(name)
            .cloned()
            .ok_or_else(|| FoundryError::tool_not_found(name, self.names()))
    }

    /// Load tools by name, in request order. Fails listing every missing name.
    pub fn load(&self, names: &[String]) -> Result<Vec<Arc<dyn Tool>>> {
        let mut loaded = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            match self.tools.get(name) {
                Some(tool) => loaded.push(tool.clone()),
                None => missing.push(name.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(FoundryError::ToolNotFound {
                missing,
                available: self.names(),
            });
        }
        Ok(loaded)
    }

    /// Catalog entries sorted by name.
    pub fn catalog(&self) -> Vec<ToolCatalogItem> {
        self.tools
            .values()
            .map(|tool| ToolCatalogItem {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    /// Markdown rendering of the catalog for prompt templates.
    pub fn render_catalog(&self) -> String {
        if self.tools.is_empty() {
            return NO_TOOLS.to_string();
        }
        self.catalog()
            .iter()
            .map(|item| format!("### {}\n**Description:** {}", item.name, item.description))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
