//! Inline markdown styling for `Text` segments.
//!
//! Runs on the content of a single `Text` segment, independently of
//! segmentation. Produces lines tagged with their block kind (paragraph,
//! heading, list item, code) and spans tagged with their inline style
//! (bold, italic, inline code). Layout and wrapping belong to the renderer.
//!
//! Uses pulldown-cmark for parsing.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Inline style of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Strong,
    Emphasis,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

/// Block-level role of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Paragraph,
    /// Heading level, 1 through 6.
    Heading(u8),
    /// List item. `marker` is `•` or `N.`, empty on continuation lines.
    ListItem { marker: String, depth: usize },
    CodeBlock,
    Rule,
    /// Spacing between blocks.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub kind: LineKind,
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            spans: Vec::new(),
        }
    }

    /// Concatenated text of all spans.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Styles markdown text into lines.
///
/// Empty input yields a single empty paragraph line.
pub fn style_text(text: &str) -> Vec<StyledLine> {
    if text.is_empty() {
        return vec![StyledLine {
            kind: LineKind::Paragraph,
            spans: Vec::new(),
        }];
    }

    let mut styler = Styler::default();
    for event in Parser::new_ext(text, Options::empty()) {
        styler.process_event(event);
    }
    styler.finish()
}

#[derive(Debug, Clone)]
struct ListState {
    /// None for unordered, Some(n) for ordered.
    ordered: Option<u64>,
    current_item: u64,
}

#[derive(Default)]
struct Styler {
    lines: Vec<StyledLine>,
    current_spans: Vec<StyledSpan>,
    style_stack: Vec<Style>,
    heading: Option<u8>,
    in_code_block: bool,
    list_stack: Vec<ListState>,
    /// Marker for the first line of the current list item.
    pending_marker: Option<String>,
}

impl Styler {
    fn current_style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or(Style::Plain)
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => self.push_span(&code, Style::Code),
            // Unknown tags (e.g. a stray `<think>`) are shown as written
            Event::InlineHtml(html) => self.add_text(&html),
            Event::Html(html) => {
                self.add_text(html.trim_end_matches('\n'));
                self.flush_line();
            }
            Event::SoftBreak => self.push_span(" ", self.current_style()),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(StyledLine {
                    kind: LineKind::Rule,
                    spans: Vec::new(),
                });
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.push_span(marker, Style::Plain);
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.heading = Some(heading_level(level));
            }
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(ListState {
                    ordered: start,
                    current_item: start.unwrap_or(1),
                });
            }
            Tag::Item => {
                self.flush_line();
                self.pending_marker = self.list_stack.last().map(|list| match list.ordered {
                    Some(_) => format!("{}.", list.current_item),
                    None => "•".to_string(),
                });
            }
            Tag::Strong => self.style_stack.push(Style::Strong),
            Tag::Emphasis => self.style_stack.push(Style::Emphasis),
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                if self.list_stack.is_empty() {
                    self.lines.push(StyledLine::blank());
                }
            }
            TagEnd::Heading(_) => {
                self.flush_line();
                self.heading = None;
                self.lines.push(StyledLine::blank());
            }
            TagEnd::CodeBlock => {
                self.flush_code_block();
                self.in_code_block = false;
                self.lines.push(StyledLine::blank());
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.lines.push(StyledLine::blank());
                }
            }
            TagEnd::Item => {
                self.flush_line();
                self.pending_marker = None;
                if let Some(list) = self.list_stack.last_mut() {
                    list.current_item += 1;
                }
            }
            TagEnd::HtmlBlock => self.flush_line(),
            TagEnd::Strong | TagEnd::Emphasis => {
                self.style_stack.pop();
            }
            _ => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if self.in_code_block {
            self.push_span(text, Style::Code);
        } else {
            self.push_span(text, self.current_style());
        }
    }

    fn push_span(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        // Merge adjacent runs of the same style.
        if let Some(last) = self.current_spans.last_mut()
            && last.style == style
        {
            last.text.push_str(text);
            return;
        }
        self.current_spans.push(StyledSpan {
            text: text.to_string(),
            style,
        });
    }

    fn line_kind(&mut self) -> LineKind {
        if let Some(level) = self.heading {
            return LineKind::Heading(level);
        }
        if self.list_stack.is_empty() {
            return LineKind::Paragraph;
        }
        LineKind::ListItem {
            marker: self.pending_marker.take().unwrap_or_default(),
            depth: self.list_stack.len() - 1,
        }
    }

    fn flush_line(&mut self) {
        if self.current_spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.current_spans);
        let kind = self.line_kind();
        self.lines.push(StyledLine { kind, spans });
    }

    fn flush_code_block(&mut self) {
        let spans = std::mem::take(&mut self.current_spans);
        let full_text: String = spans.iter().map(|s| s.text.as_str()).collect();

        for line in full_text.trim_end_matches('\n').split('\n') {
            self.lines.push(StyledLine {
                kind: LineKind::CodeBlock,
                spans: vec![StyledSpan {
                    text: line.to_string(),
                    style: Style::Code,
                }],
            });
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        if self.in_code_block {
            self.flush_code_block();
        } else {
            self.flush_line();
        }

        while self
            .lines
            .last()
            .is_some_and(|l| l.kind == LineKind::Blank)
        {
            self.lines.pop();
        }

        if self.lines.is_empty() {
            self.lines.push(StyledLine {
                kind: LineKind::Paragraph,
                spans: Vec::new(),
            });
        }

        self.lines
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
