//! Binfinder CLI - Nearby waste facilities and photo sorting
//!
//! Finds recycling, disposal and compost facilities around an address and
//! asks Gemini where a photographed item belongs.

mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use binfinder::{GeoSearch, ProviderError, SearchRequest, WasteClassifier};
use binfinder_google::{
    load_image, GeminiClassifier, GeminiConfig, GoogleMapsClient, GoogleMapsConfig,
};

use config::Config;
use render::{render_classification, render_raw_answer, render_results};

const FALLBACK_ADDRESS: &str = "1 N State Dr, San Francisco, CA 94132";

#[derive(Parser)]
#[command(name = "binfinder")]
#[command(about = "Binfinder CLI - Find where to take your waste", long_about = None)]
#[command(version)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find recycling, disposal and compost facilities near an address
    Nearby {
        /// Address to search around (defaults to the configured address)
        address: Option<String>,
        /// Search radius in meters
        #[arg(short, long)]
        radius: Option<u32>,
        /// Search term as CATEGORY=KEYWORD (repeatable, replaces configured terms)
        #[arg(short, long = "term")]
        terms: Vec<SearchRequest>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask Gemini whether a photographed item is compost, recycling or trash
    Classify {
        /// Path to the image
        image: PathBuf,
        /// Gemini model to use
        #[arg(short, long)]
        model: Option<String>,
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store API keys in the config file
    Login {
        /// Google Maps API key (will prompt if neither key is given)
        #[arg(long)]
        maps_key: Option<String>,
        /// Gemini API key
        #[arg(long)]
        gemini_key: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Nearby { address, radius, terms, json } => {
            cmd_nearby(address, radius, terms, json).await
        }
        Commands::Classify { image, model, json } => cmd_classify(image, model, json).await,
        Commands::Login { maps_key, gemini_key } => cmd_login(maps_key, gemini_key),
        Commands::Config => cmd_config(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_nearby(
    address: Option<String>,
    radius: Option<u32>,
    terms: Vec<SearchRequest>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;

    // Credentials are checked before anything touches the network
    let api_key = config.maps_api_key().context(
        "No Google Maps API key. Set GOOGLE_MAPS_API_KEY or run 'binfinder login'.",
    )?;
    let maps = Arc::new(GoogleMapsClient::new(GoogleMapsConfig::new(api_key))?);
    let search = GeoSearch::new(Arc::clone(&maps), maps);

    let address = address
        .or_else(|| config.default_address.clone())
        .unwrap_or_else(|| FALLBACK_ADDRESS.to_string());
    let radius = radius.unwrap_or(config.radius_meters);
    let requests = if terms.is_empty() {
        config.search_requests()
    } else {
        terms
    };

    tracing::info!("Target Location: {}", address);

    let (origin, results) = search
        .find_nearest_facilities(&address, &requests, radius)
        .await
        .with_context(|| format!("Search around '{}' failed", address))?;

    if json {
        let errors: serde_json::Map<String, serde_json::Value> = results
            .failures()
            .map(|f| {
                let message = f.error.as_ref().map(|e| e.to_string());
                (f.category.clone(), serde_json::Value::from(message))
            })
            .collect();
        let output = serde_json::json!({
            "address": address,
            "origin": origin,
            "radius_meters": radius,
            "results": results,
            "errors": errors,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_results(&address, &origin, &results));
    }

    Ok(())
}

async fn cmd_classify(image: PathBuf, model: Option<String>, json: bool) -> Result<()> {
    let config = Config::load()?;

    let api_key = config
        .gemini_api_key()
        .context("No Gemini API key. Set GOOGLE_API_KEY or run 'binfinder login'.")?;
    let mut gemini = GeminiConfig::new(api_key);
    if let Some(model) = model.or_else(|| config.gemini_model.clone()) {
        gemini = gemini.with_model(model);
    }
    let classifier = GeminiClassifier::new(gemini)?;

    let input = load_image(&image)?;

    eprintln!("{}", format!("Analyzing image with {}...", classifier.model()).dimmed());
    let classification = match classifier.classify(&input).await {
        Ok(classification) => classification,
        // The model answered in its own words; show them instead of failing
        Err(ProviderError::Unparsed { reason, raw }) => {
            tracing::warn!("Could not read a decision from the answer: {}", reason);
            if json {
                let output = serde_json::json!({ "decision": null, "reason": null, "raw": raw });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", render_raw_answer(&raw));
            }
            return Ok(());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Gemini API error")),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        print!("{}", render_classification(&classification));
        println!(
            "{} binfinder nearby --term \"{}=...\"",
            "Find a drop-off:".dimmed(),
            classification.decision.facility_category()
        );
    }

    Ok(())
}

fn cmd_login(maps_key: Option<String>, gemini_key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let (maps_key, gemini_key) = match (maps_key, gemini_key) {
        (None, None) => {
            let maps = Password::new()
                .with_prompt("Google Maps API key (empty to skip)")
                .allow_empty_password(true)
                .interact()
                .context("Failed to read API key")?;
            let gemini = Password::new()
                .with_prompt("Gemini API key (empty to skip)")
                .allow_empty_password(true)
                .interact()
                .context("Failed to read API key")?;
            (non_empty(maps), non_empty(gemini))
        }
        (maps, gemini) => (maps.and_then(non_empty), gemini.and_then(non_empty)),
    };

    if maps_key.is_none() && gemini_key.is_none() {
        bail!("No API key given; nothing to save.");
    }

    if let Some(key) = maps_key {
        GoogleMapsClient::new(GoogleMapsConfig::new(key.clone()))?;
        config.maps_api_key = Some(key);
    }
    if let Some(key) = gemini_key {
        GeminiClassifier::new(GeminiConfig::new(key.clone()))?;
        config.gemini_api_key = Some(key);
    }

    config.save()?;
    println!("{} API keys saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    let key_status = |set: bool| if set { "Set".green() } else { "Not set".red() };

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Maps API Key: {}", key_status(config.maps_api_key().is_some()));
    println!("  Gemini API Key: {}", key_status(config.gemini_api_key().is_some()));
    println!(
        "  Default Address: {}",
        config.default_address.as_deref().unwrap_or(FALLBACK_ADDRESS).cyan()
    );
    println!("  Radius: {}m", config.radius_meters);
    println!("  Search Terms:");
    for request in config.search_requests() {
        println!("    {} = {}", request.category.cyan(), request.keyword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_keys_are_trimmed() {
        assert_eq!(non_empty(" key-123\n".to_string()), Some("key-123".to_string()));
        assert_eq!(non_empty("   ".to_string()), None);
    }
}
