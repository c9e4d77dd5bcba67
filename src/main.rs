//! a3s-moderation CLI
//!
//! Classify content from the command line, inspect the default
//! configuration, or run the demo pipeline.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use a3s_moderation::{
    ContentFilter, ModerationConfig, ModerationService, RuleBackend, RuleBasedClassifier,
    SeededJitter,
};

#[derive(Parser)]
#[command(name = "a3s-moderation")]
#[command(author = "A3S Lab")]
#[command(version)]
#[command(about = "Rule-based content classification and moderation pipeline")]
struct Cli {
    /// Configuration file path (.json)
    #[arg(short, long, env = "A3S_MODERATION_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a piece of content
    Analyze {
        /// Content to classify (reads stdin when omitted and no --file)
        text: Option<String>,

        /// Read content from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Content source label
        #[arg(short, long, default_value = "Website")]
        source: String,

        /// Seed the confidence jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Artificial processing delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run sample submissions through the pipeline and print a summary
    Demo {
        /// Seed the confidence jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show configuration
    Config {
        /// Show the default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("a3s_moderation={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match cli.config {
        Some(ref path) => ModerationConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ModerationConfig::default(),
    };

    match cli.command {
        Commands::Analyze {
            text,
            file,
            source,
            seed,
            delay_ms,
            json,
        } => {
            let content = read_content(text, file)?;
            let backend = build_backend(seed, delay_ms);
            let service = ModerationService::new(Arc::new(backend));

            let item = service.submit(&content, Some(&source), &config).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                let categories: Vec<&str> =
                    item.categories.iter().map(|c| c.as_str()).collect();
                println!("status     : {}", item.status);
                println!("confidence : {:.2}", item.confidence);
                println!("categories : {}", categories.join(", "));
                if let Some(moderator) = &item.moderated_by {
                    println!("moderated  : {}", moderator);
                }
            }
        }

        Commands::Demo { seed } => {
            let backend = build_backend(seed, None);
            let service = ModerationService::new(Arc::new(backend));
            run_demo(&service, &config).await?;
        }

        Commands::Config { default } => {
            let shown = if default {
                ModerationConfig::default()
            } else {
                config
            };
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
    }

    Ok(())
}

fn build_backend(seed: Option<u64>, delay_ms: Option<u64>) -> RuleBackend {
    let classifier = match seed {
        Some(seed) => RuleBasedClassifier::with_jitter(Box::new(SeededJitter::new(seed))),
        None => RuleBasedClassifier::new(),
    };
    let mut backend = RuleBackend::with_classifier(classifier);
    if let Some(ms) = delay_ms {
        backend = backend.with_delay(Duration::from_millis(ms));
    }
    backend
}

fn read_content(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading content from stdin")?;
    Ok(buffer)
}

async fn run_demo(service: &ModerationService, config: &ModerationConfig) -> Result<()> {
    let submissions = [
        ("Great article about sustainable energy solutions!", "Website"),
        (
            "This product is terrible and the company is a scam.",
            "Social Media",
        ),
        ("Check out this amazing deal on our new products.", "Email"),
        (
            "I hate this service, it never works properly!",
            "Customer Review",
        ),
        (
            "The new update includes several bug fixes and performance improvements.",
            "Release Notes",
        ),
    ];

    for (content, source) in submissions {
        let item = service.submit(content, Some(source), config).await?;
        println!(
            "[{}] {:.2}  {}",
            item.status,
            item.confidence,
            truncate(content, 60)
        );
    }

    let stats = service.stats().await;
    println!();
    println!(
        "approved {} / flagged {} / pending {} — mean confidence {:.0}%",
        stats.approved,
        stats.flagged,
        stats.pending,
        stats.average_confidence * 100.0
    );

    println!();
    println!("Recent activity:");
    for entry in service.activity().await {
        println!("  {}  {}", entry.time.format("%H:%M:%S"), entry.action);
    }

    let items = service.items(&ContentFilter::default()).await;
    let categories = a3s_moderation::category_distribution(&items);
    if !categories.is_empty() {
        println!();
        println!("Categories:");
        for entry in categories {
            println!("  {:<12} {}", entry.category, entry.count);
        }
    }

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}…", head)
    }
}
