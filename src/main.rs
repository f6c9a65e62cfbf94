use clap::Parser;
use miette::{IntoDiagnostic, Result};
use p24_donations::application::processor::NotificationProcessor;
use p24_donations::application::stats::DonationStats;
use p24_donations::domain::ports::PaymentStoreBox;
use p24_donations::infrastructure::in_memory::InMemoryPaymentStore;
use p24_donations::interfaces::csv::summary_writer::SummaryWriter;
use p24_donations::interfaces::json::event_reader::EventReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input donation event log (JSON documents, one per event)
    input: PathBuf,

    /// Write a CSV summary instead of history lines
    #[arg(long)]
    csv: bool,

    /// Append aggregate donation statistics
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let processor = NotificationProcessor::new(store);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for event_result in reader.events() {
        match event_result {
            Ok(event) => {
                if let Err(e) = processor.process_event(event).await {
                    eprintln!("Error processing event: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    let payments = processor.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    if cli.csv {
        let mut writer = SummaryWriter::new(stdout.lock());
        writer.write_payments(&payments).into_diagnostic()?;
    } else {
        for payment in &payments {
            println!("{}", payment.history_entry());
        }
    }

    if cli.stats {
        println!("{}", DonationStats::collect(&payments));
    }

    Ok(())
}
