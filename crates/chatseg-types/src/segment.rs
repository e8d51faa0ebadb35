//! Renderable segments of an assistant message.
//!
//! A message is split into an ordered list of segments. The order is the
//! rendering order and always matches where each piece appeared in the
//! source text.
//!
//! Wire shape (JSON):
//! ```text
//! {"kind":"text","text":"Hello"}
//! {"kind":"think","text":"reasoning"}
//! {"kind":"task","text":"Post a job","taskType":"RECRUIT","icon":"building"}
//! {"kind":"link","text":"View jobs","path":"/jobs","icon":"briefcase"}
//! {"kind":"action","text":"Yes","message":"Confirm please","style":"primary"}
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    #[default]
    Assistant,
}

/// Discriminant of a [`Segment`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Text,
    Think,
    Task,
    Link,
    Action,
}

impl SegmentKind {
    /// Returns the lowercase wire name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Text => "text",
            SegmentKind::Think => "think",
            SegmentKind::Task => "task",
            SegmentKind::Link => "link",
            SegmentKind::Action => "action",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual weight of a quick-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActionStyle {
    Primary,
    #[default]
    Default,
}

impl ActionStyle {
    /// Parses a marker style field. Only `primary` is special; everything
    /// else renders as a default button.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "primary" {
            ActionStyle::Primary
        } else {
            ActionStyle::Default
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionStyle::Primary => "primary",
            ActionStyle::Default => "default",
        }
    }
}

impl From<String> for ActionStyle {
    fn from(value: String) -> Self {
        ActionStyle::parse(&value)
    }
}

/// One typed, renderable piece of an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Plain prose, rendered through the inline markdown styler.
    Text { text: String },
    /// Hidden reasoning, rendered as a collapsed disclosure.
    Think { text: String },
    /// Card that launches a task flow.
    Task {
        #[serde(rename = "text")]
        title: String,
        #[serde(rename = "taskType")]
        task_type: String,
        icon: String,
    },
    /// Card that navigates to an in-app route.
    Link {
        #[serde(rename = "text")]
        title: String,
        path: String,
        icon: String,
    },
    /// Button that sends a canned reply.
    Action {
        #[serde(rename = "text")]
        label: String,
        message: String,
        style: ActionStyle,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            text: content.into(),
        }
    }

    pub fn think(content: impl Into<String>) -> Self {
        Segment::Think {
            text: content.into(),
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Text { .. } => SegmentKind::Text,
            Segment::Think { .. } => SegmentKind::Think,
            Segment::Task { .. } => SegmentKind::Task,
            Segment::Link { .. } => SegmentKind::Link,
            Segment::Action { .. } => SegmentKind::Action,
        }
    }

    /// Primary display string: the prose, the reasoning, or the card label.
    pub fn display_text(&self) -> &str {
        match self {
            Segment::Text { text } | Segment::Think { text } => text,
            Segment::Task { title, .. } | Segment::Link { title, .. } => title,
            Segment::Action { label, .. } => label,
        }
    }

    /// Kind-specific attributes keyed by their wire names.
    ///
    /// Empty for `Text` and `Think`.
    pub fn attributes(&self) -> BTreeMap<&'static str, &str> {
        let mut attrs = BTreeMap::new();
        match self {
            Segment::Text { .. } | Segment::Think { .. } => {}
            Segment::Task {
                task_type, icon, ..
            } => {
                attrs.insert("taskType", task_type.as_str());
                attrs.insert("icon", icon.as_str());
            }
            Segment::Link { path, icon, .. } => {
                attrs.insert("path", path.as_str());
                attrs.insert("icon", icon.as_str());
            }
            Segment::Action { message, style, .. } => {
                attrs.insert("message", message.as_str());
                attrs.insert("style", style.as_str());
            }
        }
        attrs
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text { .. })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_task_wire_shape() {
        let segment = Segment::Task {
            title: "Post a job".to_string(),
            task_type: "RECRUIT".to_string(),
            icon: "building".to_string(),
        };

        let value = serde_json::to_value(&segment).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "task",
                "text": "Post a job",
                "taskType": "RECRUIT",
                "icon": "building",
            })
        );
    }

    #[test]
    fn test_action_style_unknown_deserializes_as_default() {
        let segment: Segment = serde_json::from_value(json!({
            "kind": "action",
            "text": "Maybe",
            "message": "Tell me more",
            "style": "danger",
        }))
        .unwrap();

        assert_eq!(
            segment,
            Segment::Action {
                label: "Maybe".to_string(),
                message: "Tell me more".to_string(),
                style: ActionStyle::Default,
            }
        );
    }

    #[test]
    fn test_attributes_use_wire_keys() {
        let segment = Segment::Action {
            label: "Yes".to_string(),
            message: "Confirm please".to_string(),
            style: ActionStyle::Primary,
        };

        let attrs = segment.attributes();
        assert_eq!(attrs.get("message"), Some(&"Confirm please"));
        assert_eq!(attrs.get("style"), Some(&"primary"));
        assert_eq!(segment.display_text(), "Yes");
        assert_eq!(segment.kind(), SegmentKind::Action);
    }

    #[test]
    fn test_text_has_no_attributes() {
        assert!(Segment::text("hello").attributes().is_empty());
        assert!(Segment::think("hmm").attributes().is_empty());
    }

    #[test]
    fn test_action_style_parse() {
        assert_eq!(ActionStyle::parse("primary"), ActionStyle::Primary);
        assert_eq!(ActionStyle::parse("default"), ActionStyle::Default);
        assert_eq!(ActionStyle::parse("Primary"), ActionStyle::Default);
        assert_eq!(ActionStyle::parse(""), ActionStyle::Default);
    }
}
