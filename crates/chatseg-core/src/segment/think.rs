//! Extraction of `<think>` reasoning blocks.
//!
//! Reasoning is pulled out of the message before any line scanning happens,
//! so marker-looking text inside a reasoning block is never parsed as a
//! marker.
//!
//! Example input:
//! ```text
//! <think>Maybe suggest [[TASK:Post a job:RECRUIT:building]]?</think>
//! Here is my answer.
//! ```
//!
//! Splits into:
//! - Reasoning: "Maybe suggest [[TASK:Post a job:RECRUIT:building]]?"
//! - Prose: "\nHere is my answer."

use std::sync::OnceLock;

use regex::Regex;

const THINK_START: &str = "<think>";

fn think_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<think>(.*?)</think>").expect("valid think block regex"))
}

/// A closed `<think>...</think>` block found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkSpan {
    /// Byte offset of the opening `<think>`.
    pub start: usize,
    /// Byte offset just past the closing `</think>`.
    pub end: usize,
    /// Trimmed content between the tags.
    pub reasoning: String,
}

/// Piece of a message after reasoning extraction, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// Text outside any reasoning block; still subject to marker scanning.
    Prose(&'a str),
    /// Trimmed content of one reasoning block.
    Think(String),
}

/// Check if content contains a `<think>` opening tag.
pub fn contains_think_start(content: &str) -> bool {
    content.contains(THINK_START)
}

/// Finds every closed, non-overlapping reasoning block in order of
/// appearance. An opening tag with no matching close is not a block.
pub fn extract_think_spans(content: &str) -> Vec<ThinkSpan> {
    if !contains_think_start(content) {
        return Vec::new();
    }

    think_block_regex()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(ThinkSpan {
                start: whole.start(),
                end: whole.end(),
                reasoning: inner.as_str().trim().to_string(),
            })
        })
        .collect()
}

/// Splits a message into prose and reasoning chunks.
///
/// Prose chunks may be empty (e.g. when a message starts with a reasoning
/// block); the line scanner treats them as blank text.
pub fn split_reasoning(content: &str) -> Vec<Chunk<'_>> {
    let spans = extract_think_spans(content);
    let mut chunks = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        chunks.push(Chunk::Prose(&content[cursor..span.start]));
        chunks.push(Chunk::Think(span.reasoning));
        cursor = span.end;
    }
    chunks.push(Chunk::Prose(&content[cursor..]));

    chunks
}
