//! Agent Foundry: AG-UI event streams for agent runs
//!
//! Translates the progress records of an upstream LLM generation (text
//! fragments, streamed tool-call fragments, tool results, step/node metadata)
//! into a well-bracketed AG-UI event stream, framed as server-sent events.
//! Also carries the agent-designer pieces around it: a tool registry and
//! catalog, declarative agent specs and their assembly.
//!
//! # Quick Start
//!
//! ```no_run
//! use agent_foundry::prelude::*;
//! use futures::StreamExt;
//!
//! # async fn example(upstream: UpstreamStream) -> agent_foundry::error::Result<()> {
//! let config = FoundryConfig::from_env()?;
//! let events = translate(upstream, RunIdentity::generate(), config.translator_settings());
//! let mut frames = agent_foundry::encoding::encode_stream(events);
//! while let Some(frame) = frames.next().await {
//!     print!("{}", frame?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod encoding;
pub mod error;
pub mod normalize;
pub mod observability;
pub mod prelude;
pub mod replay;
pub mod tools;
pub mod translate;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
