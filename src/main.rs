use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_factory::application::dispatcher::PaymentDispatcher;
use payment_factory::application::registry::ProviderRegistry;
use payment_factory::config::RegistryConfig;
use payment_factory::interfaces::csv::report_writer::{ReportWriter, write_provider_listing};
use payment_factory::interfaces::csv::request_reader::RequestReader;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file (provider, operation, order, amount)
    #[arg(required_unless_present = "list_providers")]
    input: Option<PathBuf>,

    /// Provider registry configuration (JSON). Defaults to the built-in providers.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject duplicate provider identifiers instead of overwriting them.
    #[arg(long)]
    strict: bool,

    /// Print the registered providers and their tax rates, then exit.
    #[arg(long)]
    list_providers: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("payment_factory=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

async fn load_registry(cli: &Cli) -> Result<ProviderRegistry> {
    let mut config = match &cli.config {
        Some(path) => RegistryConfig::from_path(path).into_diagnostic()?,
        None => RegistryConfig::default(),
    };
    config.strict_registration |= cli.strict;
    config.build_registry().await.into_diagnostic()
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dispatcher = PaymentDispatcher::new(Arc::new(load_registry(&cli).await?));

    if cli.list_providers {
        let registry = dispatcher.registry();
        let mut listing = Vec::new();
        for provider in registry.providers().await {
            let factory = registry.resolve(&provider).await.into_diagnostic()?;
            let tax = factory.create().tax().rate();
            listing.push((provider, tax));
        }
        write_provider_listing(io::stdout().lock(), listing).into_diagnostic()?;
        return Ok(());
    }

    let Some(input) = cli.input else {
        miette::bail!("an input CSV file is required");
    };

    let file = File::open(input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    for request in reader.requests() {
        match request {
            Ok(request) => match dispatcher.process_request(request).await {
                Ok(report) => writer.write_report(&report).into_diagnostic()?,
                Err(e) => tracing::error!("Error processing request: {}", e),
            },
            Err(e) => tracing::error!("Error reading request: {}", e),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
