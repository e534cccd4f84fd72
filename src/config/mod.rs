//! Configuration (layered: code > env > defaults).

use crate::agent::ModelTier;
use crate::error::{FoundryError, Result};
use crate::normalize::DEFAULT_STEP_KEY;
use crate::translate::{
    FailurePolicy, TranslatorSettings, DEFAULT_GENERATION_STEP, DEFAULT_TOOL_NAME,
    DEFAULT_TOOL_STEP,
};

/// Default model behind the `pro` tier.
pub const DEFAULT_PRO_MODEL: &str = "gpt-5.2";
/// Default model behind the `flash` tier.
pub const DEFAULT_FLASH_MODEL: &str = "gpt-5-mini";

/// Environment variables read by [`FoundryConfig::from_env`].
pub const ENV_VARS: [&str; 7] = [
    "FOUNDRY_STEP_KEY",
    "FOUNDRY_GENERATION_STEP",
    "FOUNDRY_TOOL_STEP",
    "FOUNDRY_DEFAULT_TOOL_NAME",
    "FOUNDRY_FAILURE_POLICY",
    "FOUNDRY_PRO_MODEL",
    "FOUNDRY_FLASH_MODEL",
];

/// Translator and model-mapping configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundryConfig {
    /// Metadata key holding the step/node name.
    pub step_key: String,
    /// Step during which tool calls are streamed.
    pub generation_step: String,
    /// Step whose text is tool output.
    pub tool_step: String,
    pub default_tool_name: String,
    pub failure_policy: FailurePolicy,
    pub pro_model: String,
    pub flash_model: String,
}

impl Default for FoundryConfig {
    fn default() -> Self {
        Self {
            step_key: DEFAULT_STEP_KEY.to_string(),
            generation_step: DEFAULT_GENERATION_STEP.to_string(),
            tool_step: DEFAULT_TOOL_STEP.to_string(),
            default_tool_name: DEFAULT_TOOL_NAME.to_string(),
            failure_policy: FailurePolicy::default(),
            pro_model: DEFAULT_PRO_MODEL.to_string(),
            flash_model: DEFAULT_FLASH_MODEL.to_string(),
        }
    }
}

impl FoundryConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or empty keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        let string_mappings: [(&str, &mut String); 6] = [
            ("FOUNDRY_STEP_KEY", &mut config.step_key),
            ("FOUNDRY_GENERATION_STEP", &mut config.generation_step),
            ("FOUNDRY_TOOL_STEP", &mut config.tool_step),
            ("FOUNDRY_DEFAULT_TOOL_NAME", &mut config.default_tool_name),
            ("FOUNDRY_PRO_MODEL", &mut config.pro_model),
            ("FOUNDRY_FLASH_MODEL", &mut config.flash_model),
        ];
        for (env_var, slot) in string_mappings {
            if let Some(value) = get(env_var) {
                *slot = value;
            }
        }

        if let Some(policy) = get("FOUNDRY_FAILURE_POLICY") {
            config.failure_policy = policy.trim().parse().map_err(|_| {
                FoundryError::Configuration(format!(
                    "FOUNDRY_FAILURE_POLICY must be 'terminate' or 'close_open_streams', got '{policy}'"
                ))
            })?;
        }

        if config.generation_step == config.tool_step {
            return Err(FoundryError::Configuration(format!(
                "generation and tool steps must differ (both '{}')",
                config.tool_step
            )));
        }

        Ok(config)
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Concrete model name behind a tier.
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Pro => &self.pro_model,
            ModelTier::Flash => &self.flash_model,
        }
    }

    /// Settings for one translation pass.
    pub fn translator_settings(&self) -> TranslatorSettings {
        TranslatorSettings::builder()
            .step_key(self.step_key.as_str())
            .generation_step(self.generation_step.as_str())
            .tool_step(self.tool_step.as_str())
            .default_tool_name(self.default_tool_name.as_str())
            .failure_policy(self.failure_policy)
            .build()
    }
}
