use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pos_checkout::application::checkout::CheckoutService;
use pos_checkout::config::{CheckoutConfig, DEFAULT_PROCESSING_DELAY_MS, DEFAULT_SUCCESS_DELAY_MS};
use pos_checkout::domain::ports::CatalogBox;
use pos_checkout::infrastructure::in_memory::InMemoryCatalog;
use pos_checkout::infrastructure::simulated::SimulatedGateway;
use pos_checkout::interfaces::csv::catalog_reader::CatalogReader;
use pos_checkout::interfaces::terminal::session;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product catalog CSV file (id, name, price). Uses the built-in catalog if omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Simulated payment processing time in milliseconds.
    #[arg(long, default_value_t = DEFAULT_PROCESSING_DELAY_MS)]
    processing_delay_ms: u64,

    /// How long the payment confirmation is shown before the cart resets, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_SUCCESS_DELAY_MS)]
    success_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = CheckoutConfig::from_millis(cli.processing_delay_ms, cli.success_delay_ms);

    let catalog: CatalogBox = if let Some(path) = cli.catalog {
        log::info!("Loading catalog from {}", path.display());
        let file = File::open(path).into_diagnostic()?;
        Box::new(CatalogReader::new(file).into_catalog().into_diagnostic()?)
    } else {
        Box::new(InMemoryCatalog::builtin())
    };
    let gateway = Box::new(SimulatedGateway::new(config.processing_delay));
    let mut checkout = CheckoutService::new(catalog, gateway, config);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session::run(&mut checkout, stdin, &mut out)
        .await
        .into_diagnostic()?;

    Ok(())
}
