//! Billing preview inspector
//!
//! Decodes a provider payload into one of the billing preview entities and
//! prints its summary and JSON form.
//!
//! # Usage
//!
//! ```bash
//! # Decode a file, guessing the format
//! preview-inspect renewal-preview renewal.xml
//!
//! # Decode stdin as JSON
//! curl -s ... | preview-inspect subscription-preview --format json
//! ```
//!
//! # Environment Variables
//!
//! * `PREVIEW_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `PREVIEW_CURRENCY` - Currency for the headline amount (default: USD)
//! * `PREVIEW_PRETTY` - Pretty-print the JSON output (default: true)

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use interface_cli::{inspect, EntityKind, InspectConfig, PayloadFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Decode a billing preview payload and print it
#[derive(Debug, Parser)]
#[command(name = "preview-inspect", version, about)]
struct Args {
    /// Entity the payload holds
    #[arg(value_enum)]
    entity: EntityKind,

    /// Payload file; stdin when omitted
    path: Option<PathBuf>,

    /// Payload format; guessed from the content when omitted
    #[arg(long, value_enum)]
    format: Option<PayloadFormat>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = load_config();
    init_tracing(&config.log_level);

    let text = read_payload(args.path.as_ref())?;
    let inspection = inspect(args.entity, args.format, &text)
        .with_context(|| format!("failed to decode {} payload", args.entity.root()))?;

    println!("{}", inspection.summary);
    if let Some(headline) = inspection.headline(config.currency) {
        println!("amount: {}", headline);
    }

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&inspection.document)?
    } else {
        serde_json::to_string(&inspection.document)?
    };
    println!("{}", rendered);

    Ok(())
}

/// Loads configuration from the environment, falling back to defaults
fn load_config() -> InspectConfig {
    InspectConfig::from_env().unwrap_or_else(|err| {
        eprintln!("ignoring invalid PREVIEW_* configuration: {}", err);
        InspectConfig::default()
    })
}

/// Initializes the tracing subscriber on stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn read_payload(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
