//! Command line interface
//!
//! | Command | Effect |
//! |---------|--------|
//! | `sync` | Pull the blog listing into the knowledge store |
//! | `retrieve QUERY` | Print the context block selected for a query |
//! | `chat TEXT` | Send a message and print the reply |
//! | `history` | Print the stored transcript |
//! | `reset` | Clear the transcript back to the greeting |
//! | `quick-replies` | Print the suggested prompts |
//! | `providers` | List registered adapters |
//! | `config` | Print or save the effective configuration |
//!
//! Results go to stdout, logs to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use blogctx_domain::{RetrievalOutcome, Transcript};
use blogctx_infrastructure::config::{AppConfig, ConfigLoader};
use blogctx_infrastructure::di::{ProviderListing, init_app};
use blogctx_infrastructure::logging::{init_logging, log_config_loaded};
use clap::{Parser, Subcommand};

const REDACTED: &str = "<redacted>";

/// Command line interface for blogctx
#[derive(Parser, Debug)]
#[command(name = "blogctx")]
#[command(about = "Chat assistant grounded on a blog's posts")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch posts and embed new or changed ones
    Sync,
    /// Show the context selected for a query
    Retrieve {
        query: String,
        /// Print the selection as JSON instead of the context block
        #[arg(long)]
        json: bool,
    },
    /// Send a chat message
    Chat { text: String },
    /// Print the transcript
    History,
    /// Reset the transcript to the greeting
    Reset,
    /// Print suggested prompts
    QuickReplies,
    /// List registered providers
    Providers,
    /// Print the effective configuration; API keys are redacted
    Config {
        /// Write the configuration to this file instead
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Load configuration, initialise logging and execute the command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let (config, source) = loader
        .load_with_source()
        .context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialise logging")?;
    log_config_loaded(&source);

    let mut out = std::io::stdout();

    match cli.command {
        Command::Providers => write_providers(&mut out, &ProviderListing::registered())?,
        Command::Config { output } => match output {
            Some(path) => {
                loader
                    .save_to_file(&config, &path)
                    .with_context(|| format!("Failed to save {}", path.display()))?;
                writeln!(out, "Configuration written to {}", path.display())?;
            }
            None => write!(out, "{}", render_config(&config)?)?,
        },
        command => execute(command, config, &mut out).await?,
    }

    Ok(())
}

async fn execute(command: Command, config: AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let context = init_app(config).context("Failed to initialise application")?;

    match command {
        Command::Sync => {
            let report = context.sync_service().sync().await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        Command::Retrieve { query, json: true } => {
            let outcome = context.retrieval_service().retrieve_posts(&query).await?;
            writeln!(out, "{}", retrieval_json(&outcome))?;
        }
        Command::Retrieve { query, json: false } => {
            writeln!(out, "{}", context.retrieval_service().retrieve(&query).await)?;
        }
        Command::Chat { text } => {
            let reply = context.chat_service().send(&text).await?;
            writeln!(out, "{}", reply.content)?;
        }
        Command::History => write_transcript(out, &context.chat_service().load().await?)?,
        Command::Reset => write_transcript(out, &context.chat_service().reset().await?)?,
        Command::QuickReplies => {
            for prompt in context.chat_service().quick_replies() {
                writeln!(out, "{prompt}")?;
            }
        }
        Command::Providers | Command::Config { .. } => {}
    }

    Ok(())
}

fn write_transcript(out: &mut impl Write, transcript: &Transcript) -> std::io::Result<()> {
    for message in transcript.messages() {
        writeln!(out, "{}: {}", message.role, message.content)?;
    }
    Ok(())
}

fn write_providers(out: &mut impl Write, listing: &ProviderListing) -> std::io::Result<()> {
    let sections = [
        ("embedding", &listing.embedding),
        ("generation", &listing.generation),
        ("store", &listing.store),
    ];
    for (kind, entries) in sections {
        writeln!(out, "{kind}:")?;
        for (name, description) in entries.iter() {
            writeln!(out, "  {name:<12} {description}")?;
        }
    }
    Ok(())
}

/// Selected posts without their embedding vectors
fn retrieval_json(outcome: &RetrievalOutcome) -> String {
    let posts: Vec<_> = outcome
        .posts
        .iter()
        .map(|scored| {
            serde_json::json!({
                "id": scored.post.id,
                "title": scored.post.title,
                "link": scored.post.link,
                "score": scored.score,
            })
        })
        .collect();
    serde_json::json!({ "tier": outcome.tier, "posts": posts }).to_string()
}

fn render_config(config: &AppConfig) -> anyhow::Result<String> {
    let mut shown = config.clone();
    for key in [&mut shown.embedding.api_key, &mut shown.generation.api_key] {
        if key.is_some() {
            *key = Some(REDACTED.to_string());
        }
    }
    toml::to_string_pretty(&shown).context("Failed to render configuration")
}
