//! Tool-call argument stream.

use crate::types::{AgUiEvent, ToolCallFragment};
use crate::util::ids::{new_id, TOOL_MESSAGE_PREFIX};

/// Name used when the opening fragment carries none.
pub const DEFAULT_TOOL_NAME: &str = "tool";

/// Tracks at most one active tool call and the most recently started one.
#[derive(Debug)]
pub struct ToolCallStream {
    active_id: Option<String>,
    active_name: Option<String>,
    last_id: Option<String>,
    generation_step: String,
    default_name: String,
}

impl ToolCallStream {
    /// `generation_step` is the step during which calls are being streamed.
    pub fn new(generation_step: impl Into<String>, default_name: impl Into<String>) -> Self {
        Self {
            active_id: None,
            active_name: None,
            last_id: None,
            generation_step: generation_step.into(),
            default_name: default_name.into(),
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active_name.as_deref()
    }

    /// Most recently started call, kept after it ends.
    pub fn last_id(&self) -> Option<&str> {
        self.last_id.as_deref()
    }

    /// Feed one record's fragments.
    ///
    /// Only the first fragment can open a new call. Argument fragments without
    /// an id (or with an empty one) continue the active call; with no active
    /// call they are dropped.
    pub fn observe_fragments(
        &mut self,
        fragments: &[ToolCallFragment],
        parent_message_id: Option<&str>,
        out: &mut Vec<AgUiEvent>,
    ) {
        if let Some(first) = fragments.first() {
            if let Some(id) = first.id.as_deref().filter(|id| !id.is_empty()) {
                if Some(id) != self.active_id.as_deref() {
                    self.close(out);
                    let name = first
                        .name
                        .clone()
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| self.default_name.clone());
                    self.active_id = Some(id.to_string());
                    self.active_name = Some(name.clone());
                    self.last_id = Some(id.to_string());
                    out.push(AgUiEvent::tool_call_start(
                        id,
                        name,
                        parent_message_id.map(str::to_string),
                    ));
                }
            }
        }

        let Some(active_id) = self.active_id.as_deref() else {
            tracing::trace!(
                fragments = fragments.len(),
                "dropping tool-call fragments with no active call"
            );
            return;
        };
        for args in fragments
            .iter()
            .filter_map(|f| f.args.as_deref())
            .filter(|a| !a.is_empty())
        {
            out.push(AgUiEvent::tool_call_args(active_id, args));
        }
    }

    /// End the active call when the upstream has moved past generation.
    pub fn force_close_if_step_changed(&mut self, step: Option<&str>, out: &mut Vec<AgUiEvent>) {
        match step {
            Some(step) if step != self.generation_step => self.close(out),
            _ => {}
        }
    }

    /// End the active call. No-op when nothing is active.
    pub fn close(&mut self, out: &mut Vec<AgUiEvent>) {
        self.active_name = None;
        if let Some(id) = self.active_id.take() {
            out.push(AgUiEvent::tool_call_end(id));
        }
    }

    /// Attribute tool output to the most recently started call.
    pub fn attribute_result(&self, text: &str, out: &mut Vec<AgUiEvent>) {
        if text.is_empty() {
            return;
        }
        match self.last_id.as_deref() {
            Some(call_id) => out.push(AgUiEvent::tool_call_result(
                new_id(TOOL_MESSAGE_PREFIX),
                call_id,
                text,
            )),
            None => tracing::trace!("tool output with no preceding tool call"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventKind;

    fn stream() -> ToolCallStream {
        ToolCallStream::new("model", DEFAULT_TOOL_NAME)
    }

    #[test]
    fn new_id_closes_previous_call_first() {
        let mut calls = stream();
        let mut out = Vec::new();
        calls.observe_fragments(&[ToolCallFragment::opening("t1", "search", "{}")], None, &mut out);
        out.clear();
        calls.observe_fragments(&[ToolCallFragment::opening("t2", "fetch", "")], None, &mut out);

        assert_eq!(
            out.iter().map(|e| e.kind.clone()).collect::<Vec<_>>(),
            vec![
                EventKind::ToolCallEnd {
                    tool_call_id: "t1".into()
                },
                EventKind::ToolCallStart {
                    tool_call_id: "t2".into(),
                    tool_call_name: "fetch".into(),
                    parent_message_id: None
                },
            ]
        );
        assert_eq!(calls.last_id(), Some("t2"));
    }

    #[test]
    fn missing_name_uses_default() {
        let mut calls = stream();
        let mut out = Vec::new();
        let fragment = ToolCallFragment {
            id: Some("t1".into()),
            ..Default::default()
        };
        calls.observe_fragments(&[fragment], Some("msg_1"), &mut out);
        assert_eq!(
            out[0].kind,
            EventKind::ToolCallStart {
                tool_call_id: "t1".into(),
                tool_call_name: "tool".into(),
                parent_message_id: Some("msg_1".into())
            }
        );
        assert_eq!(calls.active_name(), Some("tool"));
    }

    #[test]
    fn same_id_does_not_restart() {
        let mut calls = stream();
        let mut out = Vec::new();
        calls.observe_fragments(&[ToolCallFragment::opening("t1", "search", "a")], None, &mut out);
        calls.observe_fragments(&[ToolCallFragment::opening("t1", "search", "b")], None, &mut out);
        let starts = out
            .iter()
            .filter(|e| matches!(e.kind, EventKind::ToolCallStart { .. }))
            .count();
        assert_eq!(starts, 1);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn empty_id_continues_active_call() {
        let mut calls = stream();
        let mut out = Vec::new();
        calls.observe_fragments(&[ToolCallFragment::opening("t1", "search", "{")], None, &mut out);
        out.clear();
        let fragment = ToolCallFragment {
            id: Some(String::new()),
            name: Some(String::new()),
            args: Some("}".into()),
        };
        calls.observe_fragments(&[fragment], None, &mut out);
        assert_eq!(
            out.iter().map(|e| e.kind.clone()).collect::<Vec<_>>(),
            vec![EventKind::ToolCallArgs {
                tool_call_id: "t1".into(),
                delta: "}".into()
            }]
        );
        assert_eq!(calls.active_id(), Some("t1"));
    }

    #[test]
    fn orphan_args_are_dropped() {
        let mut calls = stream();
        let mut out = Vec::new();
        calls.observe_fragments(&[ToolCallFragment::continuation("{\"q\":1}")], None, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn only_first_fragment_can_open_a_call() {
        let mut calls = stream();
        let mut out = Vec::new();
        let fragments = [
            ToolCallFragment::continuation("x"),
            ToolCallFragment::opening("t9", "late", "y"),
        ];
        calls.observe_fragments(&fragments, None, &mut out);
        assert!(out.is_empty());
        assert_eq!(calls.active_id(), None);
    }

    #[test]
    fn step_change_closes_but_keeps_last_id() {
        let mut calls = stream();
        let mut out = Vec::new();
        calls.observe_fragments(&[ToolCallFragment::opening("t1", "search", "")], None, &mut out);
        out.clear();

        calls.force_close_if_step_changed(Some("model"), &mut out);
        calls.force_close_if_step_changed(None, &mut out);
        assert!(out.is_empty());

        calls.force_close_if_step_changed(Some("tools"), &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(calls.active_id(), None);
        assert_eq!(calls.last_id(), Some("t1"));

        out.clear();
        calls.attribute_result("done", &mut out);
        match &out[0].kind {
            EventKind::ToolCallResult {
                message_id,
                tool_call_id,
                content,
                ..
            } => {
                assert!(message_id.starts_with("toolmsg_"));
                assert_eq!(tool_call_id, "t1");
                assert_eq!(content, "done");
            }
            other => panic!("expected ToolCallResult, got {other:?}"),
        }
    }

    #[test]
    fn result_without_call_or_text_is_ignored() {
        let calls = stream();
        let mut out = Vec::new();
        calls.attribute_result("orphan", &mut out);
        assert!(out.is_empty());

        let mut calls = stream();
        calls.observe_fragments(&[ToolCallFragment::opening("t1", "search", "")], None, &mut out);
        out.clear();
        calls.attribute_result("", &mut out);
        assert!(out.is_empty());
    }
}
