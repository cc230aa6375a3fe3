use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use splitsettle::application::report::SettlementReport;
use splitsettle::domain::participant::Roster;
use splitsettle::interfaces::csv::participant_reader::ParticipantReader;
use splitsettle::interfaces::csv::payment_writer::PaymentWriter;
use splitsettle::interfaces::{json, summary};
use splitsettle::logger::init_cli_logger;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `from,to,amount` rows
    Csv,
    /// Human-readable summary
    Summary,
    /// Full report as JSON, amounts in minor units
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Settle shared expenses with as few payments as possible", long_about = None)]
struct Cli {
    /// Participants CSV file with a `name,paid` header. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Currency symbol appended to formatted amounts (e.g. "€")
    #[arg(long)]
    currency: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let source: Box<dyn Read> = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => Box::new(File::open(path).into_diagnostic()?),
        _ => Box::new(io::stdin().lock()),
    };

    let mut roster = Roster::new();
    for result in ParticipantReader::new(source).participants() {
        match result {
            Ok(participant) => {
                roster.push(participant);
            }
            Err(e) => {
                warn!(error = %e, "Error reading participant, skipping record");
            }
        }
    }
    debug!(participants = roster.len(), "Finished reading participants");

    let report = SettlementReport::build(&roster);
    debug!(payments = report.payments.len(), "Settlement computed");

    match cli.output.as_deref() {
        Some(path) => {
            let file = File::create(path).into_diagnostic()?;
            write_report(BufWriter::new(file), &report, &cli)?;
            info!(path = %path.display(), "Report written");
        }
        None => write_report(io::stdout().lock(), &report, &cli)?,
    }

    Ok(())
}

fn write_report<W: Write>(sink: W, report: &SettlementReport, cli: &Cli) -> Result<()> {
    let currency = cli.currency.as_deref();
    let written = match cli.format {
        OutputFormat::Csv => PaymentWriter::new(sink)
            .with_currency(currency)
            .write_payments(report),
        OutputFormat::Summary => summary::write_summary(sink, report, currency),
        OutputFormat::Json => json::write_json(sink, report),
    };
    written.into_diagnostic()
}
