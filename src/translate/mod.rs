//! Upstream generation records → AG-UI event stream.
//!
//! One [`EventTranslator`] owns the step, message and tool-call state of a
//! single run. [`translate`] drives it over an upstream stream:
//!
//! ```text
//! RUN_STARTED
//!   for each record: step transitions → tool-call fragments | tool result | text
//! tool call end → message end → step finish → RUN_FINISHED
//! ```
//!
//! The returned stream is pull-based: it asks upstream for the next record
//! only when the consumer polls, and dropping it drops the upstream.

pub mod message;
pub mod step;
pub mod tool_call;

pub use message::MessageStream;
pub use step::StepTracker;
pub use tool_call::{ToolCallStream, DEFAULT_TOOL_NAME};

use bon::Builder;
use futures::stream::BoxStream;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::FoundryError;
use crate::normalize::{Normalizer, DEFAULT_STEP_KEY};
use crate::types::{AgUiEvent, RunIdentity, UpstreamChunk, UpstreamStream};

/// Step name of model generation.
pub const DEFAULT_GENERATION_STEP: &str = "model";
/// Step name of tool execution.
pub const DEFAULT_TOOL_STEP: &str = "tools";

/// What to emit before `RUN_ERROR` when the upstream fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FailurePolicy {
    /// `RUN_ERROR` directly after the delivered prefix; it terminates all open streams.
    #[default]
    Terminate,
    /// End the open tool call, message and step first, then `RUN_ERROR`.
    CloseOpenStreams,
}

/// Per-run translation settings.
#[derive(Debug, Clone, Builder, PartialEq, Eq)]
pub struct TranslatorSettings {
    #[builder(into, default = DEFAULT_STEP_KEY.to_string())]
    pub step_key: String,
    #[builder(into, default = DEFAULT_GENERATION_STEP.to_string())]
    pub generation_step: String,
    #[builder(into, default = DEFAULT_TOOL_STEP.to_string())]
    pub tool_step: String,
    #[builder(into, default = DEFAULT_TOOL_NAME.to_string())]
    pub default_tool_name: String,
    #[builder(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Stateful translator for one run.
#[derive(Debug)]
pub struct EventTranslator {
    identity: RunIdentity,
    settings: TranslatorSettings,
    normalizer: Normalizer,
    steps: StepTracker,
    message: MessageStream,
    tool_calls: ToolCallStream,
}

impl EventTranslator {
    pub fn new(identity: RunIdentity, settings: TranslatorSettings) -> Self {
        Self {
            normalizer: Normalizer::new(settings.step_key.clone()),
            steps: StepTracker::new(),
            message: MessageStream::new(),
            tool_calls: ToolCallStream::new(
                settings.generation_step.clone(),
                settings.default_tool_name.clone(),
            ),
            identity,
            settings,
        }
    }

    pub fn identity(&self) -> &RunIdentity {
        &self.identity
    }

    /// First event of every run.
    pub fn start(&self) -> AgUiEvent {
        AgUiEvent::run_started(&self.identity.thread_id, &self.identity.run_id)
    }

    /// Translate one upstream record.
    pub fn observe(&mut self, chunk: &UpstreamChunk, out: &mut Vec<AgUiEvent>) {
        let record = self.normalizer.normalize(chunk);
        let step = record.step.as_deref();

        self.steps.observe(step, out);

        if !record.tool_fragments.is_empty() {
            self.tool_calls
                .observe_fragments(&record.tool_fragments, self.message.message_id(), out);
            return;
        }

        self.tool_calls.force_close_if_step_changed(step, out);

        if step == Some(self.settings.tool_step.as_str()) {
            self.tool_calls.attribute_result(&record.text(), out);
            return;
        }

        let text = record.text();
        if !text.is_empty() {
            self.message.observe_delta(&text, out);
        }
    }

    /// Close everything that is open, in tool call → message → step order.
    fn close_open(&mut self, out: &mut Vec<AgUiEvent>) {
        self.tool_calls.close(out);
        self.message.close(out);
        self.steps.flush(out);
    }

    /// Upstream exhausted normally.
    pub fn finish(&mut self, out: &mut Vec<AgUiEvent>) {
        self.close_open(out);
        out.push(AgUiEvent::run_finished(
            &self.identity.thread_id,
            &self.identity.run_id,
        ));
    }

    /// Upstream failed; apply the failure policy and emit `RUN_ERROR`.
    pub fn fail(&mut self, error: &FoundryError, out: &mut Vec<AgUiEvent>) {
        if self.settings.failure_policy == FailurePolicy::CloseOpenStreams {
            self.close_open(out);
        }
        out.push(AgUiEvent::run_error(error.to_string(), error.code()));
    }
}

/// Translate an upstream record stream into AG-UI events.
///
/// On upstream failure the stream yields `RUN_ERROR` and then the failure
/// itself as `Err`, after which it ends.
pub fn translate(
    upstream: UpstreamStream,
    identity: RunIdentity,
    settings: TranslatorSettings,
) -> BoxStream<'static, Result<AgUiEvent, FoundryError>> {
    let stream = async_stream::stream! {
        let mut translator = EventTranslator::new(identity, settings);
        let run_id = translator.identity().run_id.clone();
        tracing::debug!(run_id = %run_id, "translation started");
        yield Ok(translator.start());

        let mut upstream = upstream;
        let mut pending = Vec::new();
        let mut records = 0usize;
        while let Some(item) = upstream.next().await {
            match item {
                Ok(chunk) => {
                    records += 1;
                    translator.observe(&chunk, &mut pending);
                    for event in pending.drain(..) {
                        yield Ok(event);
                    }
                }
                Err(error) => {
                    tracing::warn!(run_id = %run_id, error = %error, "upstream failed during translation");
                    translator.fail(&error, &mut pending);
                    for event in pending.drain(..) {
                        yield Ok(event);
                    }
                    yield Err(error);
                    return;
                }
            }
        }

        translator.finish(&mut pending);
        for event in pending.drain(..) {
            yield Ok(event);
        }
        tracing::debug!(run_id = %run_id, records, "translation finished");
    };

    Box::pin(stream)
}
