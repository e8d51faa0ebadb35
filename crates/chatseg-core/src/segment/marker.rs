//! Single-line card markers.
//!
//! A marker occupies a whole line and has exactly three fields:
//! ```text
//! [[TASK:title:taskType:icon]]
//! [[LINK:title:path:icon]]
//! [[ACTION:label:message:style]]
//! ```
//!
//! The first two fields are one or more characters other than `:` and `]`.
//! The last field is one or more characters other than `]`. Keywords are
//! case-sensitive. Anything that does not fit stays prose.

use std::sync::OnceLock;

use chatseg_types::{ActionStyle, Segment};
use regex::Regex;

type Build = fn(&str, &str, &str) -> Segment;

struct MarkerRule {
    keyword: &'static str,
    pattern: Regex,
    build: Build,
}

/// Outcome of scanning one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// The line is a marker and becomes its own segment.
    Marker(Segment),
    /// The line is ordinary text.
    Prose,
}

fn build_task(title: &str, task_type: &str, icon: &str) -> Segment {
    Segment::Task {
        title: title.to_string(),
        task_type: task_type.to_string(),
        icon: icon.to_string(),
    }
}

fn build_link(title: &str, path: &str, icon: &str) -> Segment {
    Segment::Link {
        title: title.to_string(),
        path: path.to_string(),
        icon: icon.to_string(),
    }
}

fn build_action(label: &str, message: &str, style: &str) -> Segment {
    Segment::Action {
        label: label.to_string(),
        message: message.to_string(),
        style: ActionStyle::parse(style),
    }
}

fn marker_pattern(keyword: &str) -> Regex {
    let source = format!(r"^\[\[{keyword}:([^:\]]+):([^:\]]+):([^\]]+)\]\]$");
    Regex::new(&source).expect("valid marker regex")
}

/// Rules in check order. First match wins.
fn marker_rules() -> &'static [MarkerRule] {
    static RULES: OnceLock<Vec<MarkerRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let table: [(&'static str, Build); 3] = [
            ("TASK", build_task),
            ("LINK", build_link),
            ("ACTION", build_action),
        ];
        table
            .into_iter()
            .map(|(keyword, build)| MarkerRule {
                keyword,
                pattern: marker_pattern(keyword),
                build,
            })
            .collect()
    })
}

/// Classifies one line of prose.
///
/// Surrounding whitespace (including a trailing `\r`) is ignored when
/// matching; text before or after a marker on the same line makes the
/// whole line prose.
pub fn classify_line(line: &str) -> LineMatch {
    let candidate = line.trim();
    if !candidate.starts_with("[[") {
        return LineMatch::Prose;
    }

    for rule in marker_rules() {
        let Some(caps) = rule.pattern.captures(candidate) else {
            continue;
        };
        let (Some(a), Some(b), Some(c)) = (caps.get(1), caps.get(2), caps.get(3)) else {
            continue;
        };
        tracing::debug!(keyword = rule.keyword, label = a.as_str(), "matched marker");
        return LineMatch::Marker((rule.build)(a.as_str(), b.as_str(), c.as_str()));
    }

    LineMatch::Prose
}
