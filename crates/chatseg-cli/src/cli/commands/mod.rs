//! CLI command handlers.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

pub mod actions;
pub mod config;
pub mod render;
pub mod segment;

/// Reads a message from `path`, or stdin when `path` is `None` or `-`.
pub fn read_message(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("read message from {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read message from stdin")?;
            Ok(buf)
        }
    }
}
