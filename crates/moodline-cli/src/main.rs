//! Moodline CLI - Mood journaling from the terminal
//!
//! Thin client over the Moodline API server.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::MoodlineClient;
use config::Config;

#[derive(Parser)]
#[command(name = "moodline")]
#[command(about = "Moodline CLI - mood journaling from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log how you feel right now
    Log {
        /// Free text describing your mood
        text: String,
    },

    /// Show recent entries
    History {
        /// Max entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show the rolling mood trend
    Trend,

    /// Show pattern insights
    Insights {
        /// Regenerate insights before showing them
        #[arg(short, long)]
        refresh: bool,
    },

    /// Show weekly summaries
    Summaries,

    /// Show or set the server URL
    Config {
        /// New server URL to store
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Log { text } => cmd_log(text).await,
        Commands::History { limit } => cmd_history(limit).await,
        Commands::Trend => cmd_trend().await,
        Commands::Insights { refresh } => cmd_insights(refresh).await,
        Commands::Summaries => cmd_summaries().await,
        Commands::Config { server } => cmd_config(server),
    }
}

fn client() -> Result<MoodlineClient> {
    let config = Config::load()?;
    Ok(MoodlineClient::new(&config.base_url))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_log(text: String) -> Result<()> {
    let client = client()?;
    let entry = client.submit(&text).await?;

    println!(
        "{} {} {} ({:.0}% confident)",
        "✓".green(),
        entry.emoji,
        entry.mood.bold(),
        entry.confidence
    );
    if let Some(content) = entry.content {
        println!("  {}", content.italic());
    }
    Ok(())
}

async fn cmd_history(limit: usize) -> Result<()> {
    let client = client()?;
    let entries = client.history(Some(limit)).await?;

    if entries.is_empty() {
        println!("{}", "No entries yet. Log one with: moodline log \"...\"".yellow());
        return Ok(());
    }

    for entry in entries {
        println!(
            "{} {} {:<10} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            entry.emoji,
            entry.mood.bold(),
            entry.text
        );
        if let Some(content) = entry.content {
            println!("    {}", content.italic().dimmed());
        }
    }
    Ok(())
}

async fn cmd_trend() -> Result<()> {
    let client = client()?;
    let trend = client.trend().await?;

    let label = match trend.trend.as_str() {
        "positive" => "positive".green(),
        "concerning" => "concerning".red(),
        "mixed" => "mixed".yellow(),
        _ => "not enough entries yet".dimmed(),
    };
    println!("Recent trend: {}", label);
    Ok(())
}

async fn cmd_insights(refresh: bool) -> Result<()> {
    let client = client()?;
    let insights = if refresh {
        let response = client.refresh_insights().await?;
        if !response.refreshed {
            println!("{}", "Insights not regenerated (too few entries, or a refresh is already running).".yellow());
        }
        response.insights
    } else {
        client.insights().await?
    };

    if insights.is_empty() {
        println!("{}", "No pattern insights yet. Try: moodline insights --refresh".yellow());
        return Ok(());
    }

    for insight in insights {
        println!(
            "{} {} ({:.0}%, {})",
            "•".cyan(),
            insight.pattern.bold(),
            insight.frequency,
            insight.timeframe.dimmed()
        );
        println!("    {}", insight.description);
        println!("    {} {}", "→".cyan(), insight.recommendation);
    }
    Ok(())
}

async fn cmd_summaries() -> Result<()> {
    let client = client()?;
    let summaries = client.summaries().await?;

    if summaries.is_empty() {
        println!("{}", "No weekly summaries yet.".yellow());
        return Ok(());
    }

    for summary in summaries {
        println!(
            "{} {} - {} ({} entries, mostly {}, {:.0}% avg confidence)",
            "Week of".bold(),
            summary.week_start.format("%Y-%m-%d"),
            summary.week_end.format("%Y-%m-%d"),
            summary.entry_count,
            summary.dominant_mood.bold(),
            summary.average_confidence
        );
        for insight in &summary.insights {
            println!("  {} {}", "•".cyan(), insight);
        }
        for recommendation in &summary.recommendations {
            println!("  {} {}", "→".green(), recommendation);
        }
        println!();
    }
    Ok(())
}

fn cmd_config(server: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(server) = server {
        if !server.starts_with("http://") && !server.starts_with("https://") {
            bail!("Server URL must start with http:// or https://");
        }
        config.base_url = server;
        config.save()?;
        println!("{} Saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("Server: {}", config.base_url);
    Ok(())
}
