use clap::{Parser, Subcommand};
use gst_invoice_core::{
    classify_request, EngineConfig, GstResult, PlaceOfSupplyRequest, TaxDocument, TotalsEngine,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gst-engine", version, about = "GST totals and place-of-supply classification")]
struct Cli {
    /// Configuration file (defaults to ./gst-engine.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute totals for a document given as JSON
    Totals {
        /// Input file (stdin by default)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
    /// Resolve the place of supply for a seller/buyer pair
    PlaceOfSupply {
        /// Seller state code or name
        #[arg(long = "seller-state")]
        seller_state: String,

        #[arg(long = "buyer-gstin")]
        buyer_gstin: Option<String>,

        /// Shipping state code or name overriding the buyer GSTIN
        #[arg(long = "shipping-state")]
        shipping_state: Option<String>,
    },
}

fn main() -> GstResult<()> {
    let cli = Cli::parse();
    let config = EngineConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let output = match cli.command {
        Command::Totals { input } => {
            let reader: Box<dyn io::Read> = match input {
                Some(path) => Box::new(File::open(path)?),
                None => Box::new(io::stdin()),
            };
            let document: TaxDocument = serde_json::from_reader(BufReader::new(reader))?;
            info!(number = %document.number, items = document.items.len(), "computing totals");

            let totals = TotalsEngine::new(config).compute(&document)?;
            serde_json::to_string_pretty(&totals)?
        }
        Command::PlaceOfSupply {
            seller_state,
            buyer_gstin,
            shipping_state,
        } => {
            let request = PlaceOfSupplyRequest {
                seller_state_code: Some(seller_state.clone()),
                seller_state_name: Some(seller_state),
                buyer_gstin,
                shipping_state_code: shipping_state.clone(),
                shipping_state_name: shipping_state,
                ..Default::default()
            };
            serde_json::to_string_pretty(&classify_request(request)?)?
        }
    };

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
