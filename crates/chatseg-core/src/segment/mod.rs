//! Segmentation of assistant messages into renderable pieces.
//!
//! Two passes:
//! 1. `think` pulls out `<think>...</think>` blocks, leaving ordered prose
//!    chunks between them.
//! 2. `marker` scans each prose chunk line by line. Marker lines become
//!    cards; everything else accumulates into `Text` segments.
//!
//! The result is a pure function of the input string.

pub mod marker;
pub mod think;

use chatseg_types::{MessageRole, Segment};

use self::marker::LineMatch;
use self::think::Chunk;

/// Accumulates prose lines and emitted segments in order.
#[derive(Debug, Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
    buffer: String,
}

impl SegmentBuilder {
    fn push_line(&mut self, line: &str) {
        tracing::trace!(len = line.len(), "prose line");
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Emits pending prose (if any) as a trimmed `Text` segment.
    fn flush_text(&mut self) {
        let text = self.buffer.trim();
        if !text.is_empty() {
            self.segments.push(Segment::text(text));
        }
        self.buffer.clear();
    }

    fn push_segment(&mut self, segment: Segment) {
        self.flush_text();
        self.segments.push(segment);
    }

    fn push_prose(&mut self, prose: &str) {
        for line in prose.split('\n') {
            match marker::classify_line(line) {
                LineMatch::Marker(segment) => self.push_segment(segment),
                LineMatch::Prose => self.push_line(line),
            }
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush_text();
        self.segments
    }
}

/// Splits an assistant message into ordered segments.
///
/// Never fails. When nothing survives scanning (empty or whitespace-only
/// input), returns one `Text` segment holding the input unchanged.
pub fn segment(content: &str) -> Vec<Segment> {
    let mut builder = SegmentBuilder::default();
    let mut think_blocks = 0usize;

    for chunk in think::split_reasoning(content) {
        match chunk {
            Chunk::Prose(prose) => builder.push_prose(prose),
            Chunk::Think(reasoning) => {
                tracing::debug!(len = reasoning.len(), "extracted reasoning block");
                think_blocks += 1;
                builder.push_segment(Segment::think(reasoning));
            }
        }
    }

    let segments = builder.finish();
    if segments.is_empty() {
        return vec![Segment::text(content)];
    }

    tracing::debug!(
        segments = segments.len(),
        think_blocks,
        input_len = content.len(),
        "segmented message"
    );
    segments
}

/// Segments a message according to who wrote it.
///
/// User messages are displayed verbatim and never scanned for markers.
pub fn segment_message(role: MessageRole, content: &str) -> Vec<Segment> {
    match role {
        MessageRole::Assistant => segment(content),
        MessageRole::User => vec![Segment::text(content)],
    }
}

#[cfg(test)]
mod tests {
    use chatseg_types::{ActionStyle, SegmentKind};

    use super::*;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|s| s.is_text())
            .map(Segment::display_text)
            .collect()
    }

    #[test]
    fn test_plain_message_is_single_trimmed_text() {
        let segments = segment("  Hello there.\nHow can I help?  \n");
        assert_eq!(segments, vec![Segment::text("Hello there.\nHow can I help?")]);
    }

    #[test]
    fn test_single_task_marker() {
        let segments = segment("[[TASK:Post a job:RECRUIT:building]]");
        assert_eq!(
            segments,
            vec![Segment::Task {
                title: "Post a job".to_string(),
                task_type: "RECRUIT".to_string(),
                icon: "building".to_string(),
            }]
        );
    }

    #[test]
    fn test_link_between_prose() {
        let segments = segment("Hello\n[[LINK:View jobs:/jobs:briefcase]]\nBye");
        assert_eq!(
            segments,
            vec![
                Segment::text("Hello"),
                Segment::Link {
                    title: "View jobs".to_string(),
                    path: "/jobs".to_string(),
                    icon: "briefcase".to_string(),
                },
                Segment::text("Bye"),
            ]
        );
    }

    #[test]
    fn test_think_then_answer() {
        let segments = segment("<think>reasoning here</think>Answer: 42");
        assert_eq!(
            segments,
            vec![Segment::think("reasoning here"), Segment::text("Answer: 42")]
        );
    }

    #[test]
    fn test_markers_inside_reasoning_are_not_parsed() {
        let input = "<think>\n[[TASK:Post a job:RECRUIT:building]]\n</think>\nOk.";
        let segments = segment(input);
        assert_eq!(
            segments,
            vec![
                Segment::think("[[TASK:Post a job:RECRUIT:building]]"),
                Segment::text("Ok."),
            ]
        );
    }

    #[test]
    fn test_think_in_middle_of_line_splits_text() {
        let segments = segment("Before <think>hidden</think> after");
        assert_eq!(
            segments,
            vec![
                Segment::text("Before"),
                Segment::think("hidden"),
                Segment::text("after"),
            ]
        );
    }

    #[test]
    fn test_unterminated_think_stays_text() {
        let segments = segment("<think>still thinking");
        assert_eq!(segments, vec![Segment::text("<think>still thinking")]);
    }

    #[test]
    fn test_placeholder_like_text_is_ordinary_prose() {
        let segments = segment("__THINK_0__\n<think>a</think>");
        assert_eq!(
            segments,
            vec![Segment::text("__THINK_0__"), Segment::think("a")]
        );
    }

    #[test]
    fn test_malformed_marker_kept_verbatim() {
        let segments = segment("[[TASK:OnlyTitle]]");
        assert_eq!(segments, vec![Segment::text("[[TASK:OnlyTitle]]")]);
    }

    #[test]
    fn test_empty_title_marker_falls_through() {
        let segments = segment("Try this:\n[[TASK::RECRUIT:building]]");
        assert_eq!(
            segments,
            vec![Segment::text("Try this:\n[[TASK::RECRUIT:building]]")]
        );
    }

    #[test]
    fn test_consecutive_actions_stay_separate() {
        let segments = segment(
            "Shall I continue?\n[[ACTION:Yes:Confirm please:primary]]\n[[ACTION:No:Stop here:default]]",
        );

        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[1],
            Segment::Action {
                label: "Yes".to_string(),
                message: "Confirm please".to_string(),
                style: ActionStyle::Primary,
            }
        );
        assert_eq!(
            segments[2],
            Segment::Action {
                label: "No".to_string(),
                message: "Stop here".to_string(),
                style: ActionStyle::Default,
            }
        );
    }

    #[test]
    fn test_mixed_kinds_keep_source_order() {
        let input = "<think>plan</think>\nIntro\n[[TASK:Post:RECRUIT:building]]\n\
                     [[LINK:Jobs:/jobs:briefcase]]\nMiddle\n[[ACTION:Go:Start:primary]]";
        let kinds: Vec<_> = segment(input).iter().map(Segment::kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Think,
                SegmentKind::Text,
                SegmentKind::Task,
                SegmentKind::Link,
                SegmentKind::Text,
                SegmentKind::Action,
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_fall_back_to_raw_input() {
        assert_eq!(segment(""), vec![Segment::text("")]);
        assert_eq!(segment("  \n\t"), vec![Segment::text("  \n\t")]);
    }

    #[test]
    fn test_text_segments_are_stable_when_resegmented() {
        let input = "Intro line\n[[TASK:Post:RECRUIT:building]]\nOutro line";
        let first = segment(input);
        let prose: Vec<_> = texts(&first);

        for text in prose {
            assert_eq!(segment(text), vec![Segment::text(text)]);
        }
    }

    #[test]
    fn test_user_messages_are_verbatim() {
        let content = "  [[TASK:Post a job:RECRUIT:building]]\n";
        assert_eq!(
            segment_message(MessageRole::User, content),
            vec![Segment::text(content)]
        );
        assert_eq!(
            segment_message(MessageRole::Assistant, content)[0].kind(),
            SegmentKind::Task
        );
    }
}
