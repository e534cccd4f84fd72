//! Step transition tracking.

use crate::types::AgUiEvent;

/// Emits step start/finish events only when the current step changes.
#[derive(Debug, Default)]
pub struct StepTracker {
    current: Option<String>,
}

impl StepTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Observe the step of the next record; `None` means "no step".
    pub fn observe(&mut self, step: Option<&str>, out: &mut Vec<AgUiEvent>) {
        if step == self.current.as_deref() {
            return;
        }
        if let Some(previous) = self.current.take() {
            out.push(AgUiEvent::step_finished(previous));
        }
        if let Some(next) = step {
            out.push(AgUiEvent::step_started(next));
        }
        self.current = step.map(str::to_string);
    }

    /// Finish the current step, if any.
    pub fn flush(&mut self, out: &mut Vec<AgUiEvent>) {
        if let Some(previous) = self.current.take() {
            out.push(AgUiEvent::step_finished(previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventKind;

    fn kinds(events: &[AgUiEvent]) -> Vec<EventKind> {
        events.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn repeated_step_emits_nothing() {
        let mut tracker = StepTracker::new();
        let mut out = Vec::new();
        tracker.observe(Some("model"), &mut out);
        tracker.observe(Some("model"), &mut out);
        assert_eq!(
            kinds(&out),
            vec![EventKind::StepStarted {
                step_name: "model".into()
            }]
        );
    }

    #[test]
    fn transition_finishes_then_starts() {
        let mut tracker = StepTracker::new();
        let mut out = Vec::new();
        tracker.observe(Some("model"), &mut out);
        out.clear();
        tracker.observe(Some("tools"), &mut out);
        assert_eq!(
            kinds(&out),
            vec![
                EventKind::StepFinished {
                    step_name: "model".into()
                },
                EventKind::StepStarted {
                    step_name: "tools".into()
                },
            ]
        );
        assert_eq!(tracker.current(), Some("tools"));
    }

    #[test]
    fn leaving_to_no_step_only_finishes() {
        let mut tracker = StepTracker::new();
        let mut out = Vec::new();
        tracker.observe(Some("model"), &mut out);
        out.clear();
        tracker.observe(None, &mut out);
        assert_eq!(
            kinds(&out),
            vec![EventKind::StepFinished {
                step_name: "model".into()
            }]
        );
        out.clear();
        tracker.flush(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn flush_closes_open_step_once() {
        let mut tracker = StepTracker::new();
        let mut out = Vec::new();
        tracker.observe(Some("model"), &mut out);
        out.clear();
        tracker.flush(&mut out);
        tracker.flush(&mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(tracker.current(), None);
    }
}
