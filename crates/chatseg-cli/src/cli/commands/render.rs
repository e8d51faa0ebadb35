//! Render command: terminal preview of a segmented message.

use anyhow::Result;
use chatseg_core::interaction::Disclosure;
use chatseg_core::markdown::{LineKind, Style, StyledLine, style_text};
use chatseg_core::{ActionStyle, MessageRole, Segment, segment_message};
use crossterm::style::{StyledContent, Stylize, style};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub expand_thinking: bool,
    pub thinking_label: String,
    /// Style `Text` segments as markdown.
    pub markdown: bool,
    /// Emit ANSI colors.
    pub color: bool,
}

struct Painter {
    color: bool,
}

impl Painter {
    fn paint<'a>(
        &self,
        text: &'a str,
        apply: impl FnOnce(StyledContent<&'a str>) -> StyledContent<&'a str>,
    ) -> String {
        if self.color {
            apply(style(text)).to_string()
        } else {
            text.to_string()
        }
    }

    fn span(&self, text: &str, span_style: Style) -> String {
        match span_style {
            Style::Plain => text.to_string(),
            Style::Strong => self.paint(text, |c| c.bold()),
            Style::Emphasis => self.paint(text, |c| c.italic()),
            Style::Code => self.paint(text, |c| c.yellow()),
        }
    }
}

fn render_markdown_line(line: &StyledLine, painter: &Painter) -> String {
    let body: String = match line.kind {
        LineKind::Heading(_) => line
            .spans
            .iter()
            .map(|s| painter.paint(&s.text, |c| c.bold()))
            .collect(),
        LineKind::CodeBlock => line
            .spans
            .iter()
            .map(|s| painter.paint(&s.text, |c| c.dim()))
            .collect(),
        _ => line
            .spans
            .iter()
            .map(|s| painter.span(&s.text, s.style))
            .collect(),
    };

    match &line.kind {
        LineKind::Paragraph | LineKind::Heading(_) => body,
        LineKind::ListItem { marker, depth } => {
            let indent = "  ".repeat(*depth);
            if marker.is_empty() {
                format!("{indent}  {body}")
            } else {
                format!("{indent}{marker} {body}")
            }
        }
        LineKind::CodeBlock => format!("    {body}"),
        LineKind::Rule => "─".repeat(24),
        LineKind::Blank => String::new(),
    }
}

fn render_segment(segment: &Segment, options: &RenderOptions, painter: &Painter) -> Vec<String> {
    match segment {
        Segment::Text { text } => {
            if options.markdown {
                style_text(text)
                    .iter()
                    .map(|line| render_markdown_line(line, painter))
                    .collect()
            } else {
                text.lines().map(str::to_string).collect()
            }
        }
        Segment::Think { text } => {
            let disclosure = Disclosure::new(options.expand_thinking);
            let arrow = if disclosure.is_expanded() { "▾" } else { "▸" };
            let header = format!("{arrow} {}", options.thinking_label);
            let mut lines = vec![painter.paint(&header, |c| c.dim())];
            if disclosure.is_expanded() {
                lines.extend(
                    text.lines()
                        .map(|l| painter.paint(&format!("  │ {l}"), |c| c.dim())),
                );
            }
            lines
        }
        Segment::Task {
            title, task_type, ..
        } => vec![format!(
            "▣ {} ({task_type})",
            painter.paint(title, |c| c.bold().cyan())
        )],
        Segment::Link { title, path, .. } => vec![format!(
            "↗ {} → {path}",
            painter.paint(title, |c| c.underlined().cyan())
        )],
        Segment::Action {
            label,
            style: action_style,
            ..
        } => {
            let button = format!("[ {label} ]");
            let rendered = match action_style {
                ActionStyle::Primary => painter.paint(&button, |c| c.bold().reverse()),
                ActionStyle::Default => button,
            };
            vec![rendered]
        }
    }
}

/// Renders segments into display lines.
pub fn render_segments(segments: &[Segment], options: &RenderOptions) -> Vec<String> {
    let painter = Painter {
        color: options.color,
    };
    segments
        .iter()
        .flat_map(|segment| render_segment(segment, options, &painter))
        .collect()
}

pub fn run(message: &str, role: MessageRole, options: &RenderOptions) -> Result<()> {
    let segments = segment_message(role, message);
    for line in render_segments(&segments, options) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chatseg_core::segment;

    use super::*;

    fn plain(expand_thinking: bool, markdown: bool) -> RenderOptions {
        RenderOptions {
            expand_thinking,
            thinking_label: "Thinking".to_string(),
            markdown,
            color: false,
        }
    }

    #[test]
    fn test_plain_render_of_cards() {
        let segments = segment(
            "Hello\n[[TASK:Post a job:RECRUIT:building]]\n[[LINK:View jobs:/jobs:briefcase]]\n\
             [[ACTION:Yes:Confirm please:primary]]",
        );
        let lines = render_segments(&segments, &plain(false, true));

        assert_eq!(
            lines,
            vec![
                "Hello",
                "▣ Post a job (RECRUIT)",
                "↗ View jobs → /jobs",
                "[ Yes ]",
            ]
        );
    }

    #[test]
    fn test_thinking_collapsed_by_default() {
        let segments = segment("<think>secret plan</think>Answer");
        let lines = render_segments(&segments, &plain(false, false));
        assert_eq!(lines, vec!["▸ Thinking", "Answer"]);
    }

    #[test]
    fn test_thinking_expanded() {
        let segments = segment("<think>line one\nline two</think>Answer");
        let lines = render_segments(&segments, &plain(true, false));
        assert_eq!(
            lines,
            vec!["▾ Thinking", "  │ line one", "  │ line two", "Answer"]
        );
    }

    #[test]
    fn test_markdown_list_and_heading() {
        let segments = vec![Segment::text("## Roles\n\n- **Backend**\n- Frontend")];
        let lines = render_segments(&segments, &plain(false, true));
        assert_eq!(lines, vec!["Roles", "", "• Backend", "• Frontend"]);
    }

    #[test]
    fn test_color_output_contains_ansi() {
        let segments = segment("[[TASK:Post a job:RECRUIT:building]]");
        let options = RenderOptions {
            color: true,
            ..plain(false, true)
        };
        let lines = render_segments(&segments, &options);
        assert!(lines[0].contains('\u{1b}'));
        assert!(lines[0].contains("Post a job"));
    }
}
