//! Core chatseg library (segmenter, markdown styling, interactions, config).

pub mod config;
pub mod interaction;
pub mod markdown;
pub mod segment;

pub use chatseg_types::{ActionStyle, MessageRole, Segment, SegmentKind};
pub use segment::{segment, segment_message};
