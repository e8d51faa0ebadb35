//! Segment command handler.

use anyhow::{Context, Result};
use chatseg_core::{MessageRole, segment_message};

pub fn run(message: &str, role: MessageRole, pretty: bool) -> Result<()> {
    let segments = segment_message(role, message);
    let json = if pretty {
        serde_json::to_string_pretty(&segments)
    } else {
        serde_json::to_string(&segments)
    }
    .context("serialize segments")?;

    println!("{json}");
    Ok(())
}
