//! What happens when a segment is tapped.
//!
//! The segmenter never performs side effects itself. Tappable segments map
//! to an [`Interaction`], which the rendering layer hands to its
//! [`SegmentHandler`].

use chatseg_types::Segment;
use serde::Serialize;

/// Effect requested by tapping a card or button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    /// Launch the task flow identified by `task_type`.
    StartTask { task_type: String },
    /// Navigate to an in-app route.
    Navigate { path: String },
    /// Send `message` as the user's next chat message.
    SendMessage { message: String },
}

/// Callbacks supplied by the rendering layer.
pub trait SegmentHandler {
    fn on_task_press(&mut self, task_type: &str);
    fn on_navigate(&mut self, path: &str);
    fn on_action_press(&mut self, message: &str);
}

/// Returns the interaction for a segment, or `None` for text and reasoning.
///
/// An action with a blank message sends its label instead.
pub fn interaction_for(segment: &Segment) -> Option<Interaction> {
    match segment {
        Segment::Text { .. } | Segment::Think { .. } => None,
        Segment::Task { task_type, .. } => Some(Interaction::StartTask {
            task_type: task_type.clone(),
        }),
        Segment::Link { path, .. } => Some(Interaction::Navigate { path: path.clone() }),
        Segment::Action { label, message, .. } => {
            let message = if message.trim().is_empty() {
                label
            } else {
                message
            };
            Some(Interaction::SendMessage {
                message: message.clone(),
            })
        }
    }
}

/// Lists tappable segments with their index in `segments`.
pub fn interactions(segments: &[Segment]) -> Vec<(usize, Interaction)> {
    segments
        .iter()
        .enumerate()
        .filter_map(|(index, segment)| interaction_for(segment).map(|i| (index, i)))
        .collect()
}

/// Routes an interaction to the matching handler callback.
pub fn dispatch<H: SegmentHandler + ?Sized>(interaction: &Interaction, handler: &mut H) {
    tracing::debug!(?interaction, "dispatching interaction");
    match interaction {
        Interaction::StartTask { task_type } => handler.on_task_press(task_type),
        Interaction::Navigate { path } => handler.on_navigate(path),
        Interaction::SendMessage { message } => handler.on_action_press(message),
    }
}

/// Open/closed state of a reasoning block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    /// Reasoning starts collapsed unless `expanded` is requested.
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}
