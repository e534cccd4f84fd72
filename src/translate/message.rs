//! Assistant text message stream.

use crate::types::AgUiEvent;
use crate::util::ids::{new_id, MESSAGE_PREFIX};

/// Tracks the open assistant message, opening it on the first delta.
#[derive(Debug, Default)]
pub struct MessageStream {
    message_id: Option<String>,
}

impl MessageStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the open message, if any.
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.message_id.is_some()
    }

    /// Forward a text delta, opening a message first when none is open.
    pub fn observe_delta(&mut self, text: &str, out: &mut Vec<AgUiEvent>) {
        if text.is_empty() {
            return;
        }
        let message_id = match &self.message_id {
            Some(id) => id.clone(),
            None => {
                let id = new_id(MESSAGE_PREFIX);
                out.push(AgUiEvent::text_message_start(id.clone()));
                self.message_id = Some(id.clone());
                id
            }
        };
        out.push(AgUiEvent::text_message_content(message_id, text));
    }

    /// End the open message. No-op when nothing is open.
    pub fn close(&mut self, out: &mut Vec<AgUiEvent>) {
        if let Some(id) = self.message_id.take() {
            out.push(AgUiEvent::text_message_end(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, MessageRole};

    #[test]
    fn first_delta_opens_message() {
        let mut stream = MessageStream::new();
        let mut out = Vec::new();
        stream.observe_delta("Hel", &mut out);
        stream.observe_delta("lo", &mut out);

        let id = stream.message_id().expect("open message").to_string();
        assert!(id.starts_with("msg_"));
        assert_eq!(out.len(), 3);
        assert_eq!(
            out[0].kind,
            EventKind::TextMessageStart {
                message_id: id.clone(),
                role: MessageRole::Assistant
            }
        );
        assert_eq!(
            out[2].kind,
            EventKind::TextMessageContent {
                message_id: id,
                delta: "lo".into()
            }
        );
    }

    #[test]
    fn empty_delta_does_not_open() {
        let mut stream = MessageStream::new();
        let mut out = Vec::new();
        stream.observe_delta("", &mut out);
        assert!(out.is_empty());
        assert!(!stream.is_open());
    }

    #[test]
    fn close_is_idempotent_and_ids_are_not_reused() {
        let mut stream = MessageStream::new();
        let mut out = Vec::new();
        stream.observe_delta("a", &mut out);
        let first = stream.message_id().map(str::to_string);
        stream.close(&mut out);
        stream.close(&mut out);
        assert_eq!(
            out.iter()
                .filter(|e| matches!(e.kind, EventKind::TextMessageEnd { .. }))
                .count(),
            1
        );

        stream.observe_delta("b", &mut out);
        assert_ne!(stream.message_id().map(str::to_string), first);
    }
}
