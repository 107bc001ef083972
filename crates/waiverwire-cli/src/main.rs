//! Waiverwire CLI - weekly waiver wire digest by email
//!
//! Asks Grok Live Search for this week's pickups and emails the answer.
//! Meant to be run by an external scheduler (cron, CI schedule).

mod profile;

use profile::{Overrides, ProfileSource};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use waiverwire::config::{
    EMAIL_PASSWORD, GROK_API_KEY, GROK_API_URL, RECIPIENT_EMAIL, SENDER_EMAIL, SMTP_HOST,
    SMTP_PORT,
};
use waiverwire::{pipeline, Config, DigestSource, GrokClient, SearchConfig, SearchProfile};
use waiverwire_integration_email::{SmtpNotifier, SUBJECT};

#[derive(Parser)]
#[command(name = "waiverwire")]
#[command(about = "Email this week's fantasy football waiver wire pickups", long_about = None)]
#[command(version)]
struct Cli {
    /// Search profile TOML (defaults to ~/.config/waiverwire/profile.toml)
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    /// Model to ask instead of the profile's
    #[arg(long, global = true)]
    model: Option<String>,

    /// Turn Live Search off for this run
    #[arg(long, global = true)]
    no_search: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the digest and email it (default)
    Send,

    /// Fetch the digest and print it without sending
    Preview,

    /// Show the active search profile as TOML
    Profile {
        /// Write the profile to the config directory
        #[arg(long)]
        init: bool,
        /// Overwrite an existing profile file
        #[arg(long, requires = "init")]
        force: bool,
    },

    /// Show which settings are configured
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Send);

    // Preview prints the digest on stdout, so its logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let logs = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if matches!(command, Commands::Preview) {
        logs.with_writer(std::io::stderr).init();
    } else {
        logs.init();
    }

    let overrides = Overrides {
        model: cli.model,
        no_search: cli.no_search,
    };

    match command {
        Commands::Send => cmd_send(cli.profile, &overrides).await,
        Commands::Preview => cmd_preview(cli.profile, &overrides).await,
        Commands::Profile { init, force } => cmd_profile(cli.profile, &overrides, init, force),
        Commands::Config => cmd_config(cli.profile),
    }
}

fn active_profile(
    profile_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<(SearchProfile, ProfileSource)> {
    let (profile, source) = profile::resolve(profile_path)?;
    Ok((overrides.apply(profile), source))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_send(profile_path: Option<PathBuf>, overrides: &Overrides) -> Result<()> {
    let config = Config::from_env().context("Configuration incomplete")?;
    let (profile, source) = active_profile(profile_path.as_deref(), overrides)?;
    tracing::info!("📋 Search profile: {}", source);

    let notifier = SmtpNotifier::new(config.mail).context("Mail configuration invalid")?;
    let grok = GrokClient::new(config.search, profile);

    pipeline::run(&grok, &notifier).await?;

    println!("{} Email sent successfully!", "✅".green());
    Ok(())
}

async fn cmd_preview(profile_path: Option<PathBuf>, overrides: &Overrides) -> Result<()> {
    let search = SearchConfig::from_env().context("Configuration incomplete")?;
    let (profile, source) = active_profile(profile_path.as_deref(), overrides)?;
    tracing::info!("📋 Search profile: {}", source);

    let grok = GrokClient::new(search, profile);
    let digest = grok
        .fetch()
        .await
        .context("Fetching recommendations failed")?;

    println!("{}", digest);
    Ok(())
}

fn cmd_profile(
    profile_path: Option<PathBuf>,
    overrides: &Overrides,
    init: bool,
    force: bool,
) -> Result<()> {
    let (active, source) = active_profile(profile_path.as_deref(), overrides)?;

    if init {
        let path = match profile_path {
            Some(path) => path,
            None => profile::default_profile_path()?,
        };
        profile::write(&active, &path, force)?;
        println!("{} Profile written to {:?}", "✓".green(), path);
        return Ok(());
    }

    eprintln!("{} {}", "# source:".dimmed(), source);
    print!("{}", active.to_toml().context("Failed to serialize profile")?);
    Ok(())
}

fn cmd_config(profile_path: Option<PathBuf>) -> Result<()> {
    let (_, source) = profile::resolve(profile_path.as_deref())?;

    println!("{}", "Configuration:".bold());
    for key in [GROK_API_KEY, SENDER_EMAIL, EMAIL_PASSWORD, RECIPIENT_EMAIL] {
        let status = if is_set(key) {
            "Set".green()
        } else {
            "Not set".red()
        };
        println!("  {}: {}", key, status);
    }
    for key in [GROK_API_URL, SMTP_HOST, SMTP_PORT] {
        let value = std::env::var(key).unwrap_or_else(|_| "(default)".to_string());
        println!("  {}: {}", key, value.dimmed());
    }
    println!("  Subject: {}", SUBJECT);
    println!("  Profile: {}", source.to_string().cyan());

    Ok(())
}

fn is_set(key: &str) -> bool {
    std::env::var(key)
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false)
}
