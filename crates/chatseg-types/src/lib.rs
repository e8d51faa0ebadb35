//! Shared data model for segmented chat messages.

mod segment;

pub use segment::{ActionStyle, MessageRole, Segment, SegmentKind};
