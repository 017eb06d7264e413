//! procure-match: match supplier offer rows against a master catalog.
//!
//! Thin JSON-in/JSON-out shim around the library for scripted runs and for
//! inspecting match decisions outside the full application. Spreadsheet and
//! PDF ingestion live upstream; this binary expects already-normalized rows.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use procure_match::matching::{apply_manual_link, match_offers, MasterIndex, MatchConfig};
use procure_match::model::{MasterProduct, SupplierOffer};
use procure_match::pricing::best_buy_order;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "procure-match")]
#[command(version)]
#[command(about = "Match supplier price offers against a master product catalog", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Match an offer batch and print one MatchResult per row
    procure-match match --master master.json --offers offers.json

    # Rank matched offers by effective unit cost
    procure-match rank --master master.json --offers offers.json

    # Force a reviewer link for a single row
    procure-match link --master master.json --offers offers.json --row 3 --item-code AA-1")]
struct Cli {
    /// Increase log verbosity (also honors RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct BatchArgs {
    /// Master catalog JSON (array of MasterProduct)
    #[arg(long)]
    master: PathBuf,

    /// Supplier offers JSON (array of SupplierOffer)
    #[arg(long)]
    offers: PathBuf,

    /// Optional alias table JSON (object of raw name -> item code)
    #[arg(long)]
    aliases: Option<PathBuf>,

    /// Optional MatchConfig JSON; defaults to the pharmaceutical profile
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the strict cutoff preset
    #[arg(long, conflicts_with = "config")]
    strict: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Match every offer row and emit the MatchResult array
    Match {
        #[command(flatten)]
        batch: BatchArgs,
    },
    /// Match, then list offers cheapest-per-unit first
    Rank {
        #[command(flatten)]
        batch: BatchArgs,
    },
    /// Apply a manual reviewer link to one offer row
    Link {
        #[command(flatten)]
        batch: BatchArgs,

        /// Zero-based row index into the offers file
        #[arg(long)]
        row: usize,

        /// Master item code to bind the row to
        #[arg(long)]
        item_code: String,
    },
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {} from {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing {} from {}", what, path.display()))
}

fn load_batch(args: &BatchArgs) -> Result<(MasterIndex, Vec<SupplierOffer>, MatchConfig)> {
    let config = if let Some(path) = &args.config {
        load_json::<MatchConfig>(path, "match config")?
    } else if args.strict {
        MatchConfig::strict()
    } else {
        MatchConfig::default()
    };

    let products: Vec<MasterProduct> = load_json(&args.master, "master catalog")?;
    let mut index = MasterIndex::build(products, &config)?;
    if let Some(path) = &args.aliases {
        let aliases: std::collections::BTreeMap<String, String> =
            load_json(path, "alias table")?;
        index = index.with_aliases(aliases)?;
    }

    let offers: Vec<SupplierOffer> = load_json(&args.offers, "supplier offers")?;
    Ok((index, offers, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("procure_match=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("procure_match=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Match { batch } => {
            let (index, offers, config) = load_batch(batch)?;
            let results = match_offers(&offers, &index, &config)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Rank { batch } => {
            let (index, offers, config) = load_batch(batch)?;
            let results = match_offers(&offers, &index, &config)?;
            let ranked: Vec<serde_json::Value> = best_buy_order(&results)
                .into_iter()
                .map(|i| {
                    serde_json::json!({
                        "row": i,
                        "supplier_name": offers[i].supplier_name,
                        "raw_product_name": offers[i].raw_product_name,
                        "effective_unit_cost": results[i].effective_unit_cost,
                        "matched_item_code": results[i].matched_item_code,
                        "confidence_tier": results[i].confidence_tier,
                        "price_match_status": results[i].price_match_status,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Command::Link {
            batch,
            row,
            item_code,
        } => {
            let (index, offers, config) = load_batch(batch)?;
            let offer = offers
                .get(*row)
                .with_context(|| format!("offers file has no row {row}"))?;
            let result = apply_manual_link(offer, item_code, &index, &config)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
