//! Error classification.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Broad error category, also used as the `RUN_ERROR` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Upstream,
    Stream,
    Timeout,
    Configuration,
    Serialization,
    Io,
    Tool,
    Validation,
}
