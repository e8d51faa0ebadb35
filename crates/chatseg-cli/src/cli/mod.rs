//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chatseg_core::MessageRole;
use chatseg_core::config::Config;
use clap::Parser;

mod commands;
pub mod logging;

#[derive(Parser)]
#[command(name = "chatseg")]
#[command(version)]
#[command(about = "Split assistant chat messages into renderable segments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to read the message from.
#[derive(clap::Args, Debug, Clone, Default)]
struct InputArgs {
    /// Message file (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Author of the message; user messages are never segmented
    #[arg(long, value_enum, default_value_t = RoleArg::Assistant)]
    role: RoleArg,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
enum RoleArg {
    User,
    #[default]
    Assistant,
}

impl From<RoleArg> for MessageRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => MessageRole::User,
            RoleArg::Assistant => MessageRole::Assistant,
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the segments of a message as JSON
    Segment {
        #[command(flatten)]
        input: InputArgs,

        /// Single-line JSON (overrides `pretty_json` from config)
        #[arg(long)]
        compact: bool,
    },

    /// Preview a message the way a chat client would draw it
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Show reasoning blocks expanded
        #[arg(long)]
        expand_thinking: bool,

        /// Disable colors and markdown styling
        #[arg(long)]
        plain: bool,
    },

    /// List the cards and buttons a message offers
    Actions {
        #[command(flatten)]
        input: InputArgs,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment { input, compact } => {
            let config = Config::load().context("load config")?;
            let message = commands::read_message(input.file.as_deref())?;
            let pretty = config.pretty_json && !compact;
            commands::segment::run(&message, input.role.into(), pretty)
        }
        Commands::Render {
            input,
            expand_thinking,
            plain,
        } => {
            let config = Config::load().context("load config")?;
            let message = commands::read_message(input.file.as_deref())?;
            let options = commands::render::RenderOptions {
                expand_thinking: expand_thinking || config.expand_thinking,
                thinking_label: config.effective_thinking_label().to_string(),
                markdown: config.markdown.enabled && !plain,
                color: !plain,
            };
            commands::render::run(&message, input.role.into(), &options)
        }
        Commands::Actions { input, json } => {
            let message = commands::read_message(input.file.as_deref())?;
            commands::actions::run(&message, input.role.into(), json)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
