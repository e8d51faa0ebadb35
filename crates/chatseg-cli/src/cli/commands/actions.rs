//! Actions command handler.

use anyhow::{Context, Result};
use chatseg_core::interaction::{Interaction, interactions};
use chatseg_core::{MessageRole, segment_message};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ActionEntry<'a> {
    index: usize,
    label: &'a str,
    interaction: Interaction,
}

fn describe(interaction: &Interaction) -> String {
    match interaction {
        Interaction::StartTask { task_type } => format!("start task {task_type}"),
        Interaction::Navigate { path } => format!("open {path}"),
        Interaction::SendMessage { message } => format!("send {message:?}"),
    }
}

pub fn run(message: &str, role: MessageRole, json: bool) -> Result<()> {
    let segments = segment_message(role, message);
    let entries: Vec<ActionEntry<'_>> = interactions(&segments)
        .into_iter()
        .map(|(index, interaction)| ActionEntry {
            index,
            label: segments[index].display_text(),
            interaction,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&entries).context("serialize actions")?;
        println!("{out}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("No actions in message.");
        return Ok(());
    }

    for (n, entry) in entries.iter().enumerate() {
        println!("{}. {}: {}", n + 1, entry.label, describe(&entry.interaction));
    }
    Ok(())
}
