use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paynow_qr::application::generator::QrGenerator;
use paynow_qr::domain::options::QrOptions;
use paynow_qr::interfaces::csv::payload_writer::PayloadWriter;
use paynow_qr::interfaces::csv::request_reader::RequestReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment requests CSV file. One payload is generated per row, using the
    /// flags below for any column the row leaves empty. A row with a uen or
    /// phone column set ignores both payee flags.
    #[arg(long)]
    batch: Option<PathBuf>,

    /// 11 for a static reusable code, 12 for a single transaction [default: 12]
    #[arg(long)]
    initiation_method: Option<String>,

    /// Bill number [default: random code and current epoch millis]. Ignored
    /// with --batch, where each row carries its own.
    #[arg(long)]
    reference_number: Option<String>,

    /// Merchant trade name [default: NA]
    #[arg(long, env = "PAYNOW_MERCHANT_NAME")]
    merchant_name: Option<String>,

    /// Transaction amount. Omit to let the payer enter it.
    #[arg(long)]
    amount: Option<Decimal>,

    /// 0 locks the amount, 1 lets the payer edit it [default: 0]
    #[arg(long)]
    amount_editable: Option<String>,

    /// Unique Entity Number of the payee. Takes precedence over --phone.
    #[arg(long, env = "PAYNOW_UEN")]
    uen: Option<String>,

    /// Mobile number of the payee, including +65
    #[arg(long, env = "PAYNOW_PHONE")]
    phone: Option<String>,

    /// Expiry as YYYYMMDD or YYYYMMDDHHMMSS
    #[arg(long)]
    expiry_date: Option<String>,

    /// ISO 4217 numeric currency code [default: 702]
    #[arg(long)]
    transaction_currency: Option<String>,

    /// ISO 3166-1 alpha 2 country code [default: SG]
    #[arg(long)]
    country_code: Option<String>,

    /// [default: Singapore]
    #[arg(long, env = "PAYNOW_MERCHANT_CITY")]
    merchant_city: Option<String>,

    /// [default: SG.PAYNOW]
    #[arg(long)]
    unique_identifier: Option<String>,

    /// Print the encoded data objects as JSON along with the payload
    #[arg(long)]
    explain: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn options(&self) -> QrOptions {
        let defaults = QrOptions::default();
        let or_default = |value: &Option<String>, default: String| value.clone().unwrap_or(default);

        QrOptions {
            initiation_method: or_default(&self.initiation_method, defaults.initiation_method),
            reference_number: self.reference_number.clone(),
            merchant_name: or_default(&self.merchant_name, defaults.merchant_name),
            amount: self.amount,
            amount_editable: or_default(&self.amount_editable, defaults.amount_editable),
            uen: self.uen.clone(),
            phone: self.phone.clone(),
            expiry_date: self.expiry_date.clone(),
            transaction_currency: or_default(
                &self.transaction_currency,
                defaults.transaction_currency,
            ),
            country_code: or_default(&self.country_code, defaults.country_code),
            merchant_city: or_default(&self.merchant_city, defaults.merchant_city),
            unique_identifier: or_default(&self.unique_identifier, defaults.unique_identifier),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let generator = QrGenerator::new();
    let base = cli.options();

    let Some(batch) = cli.batch else {
        let qr = generator.build(&base).into_diagnostic()?;
        if cli.explain {
            println!("{}", serde_json::to_string_pretty(&qr).into_diagnostic()?);
        } else {
            println!("{}", qr.payload);
        }
        return Ok(());
    };

    if base.reference_number.is_some() {
        warn!("--reference-number is ignored in batch mode");
    }

    let file = File::open(&batch).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = PayloadWriter::new(stdout.lock());
    let mut generated = 0usize;

    // Header is line 1
    for (line, request) in (2..).zip(reader.requests()) {
        match request {
            Ok(request) => match generator.build(&request.into_options(&base)) {
                Ok(qr) => {
                    writer.write(&qr).into_diagnostic()?;
                    generated += 1;
                }
                Err(e) => error!(line, "Error generating payload: {e}"),
            },
            Err(e) => error!(line, "Error reading payment request: {e}"),
        }
    }
    writer.flush().into_diagnostic()?;

    info!(generated, path = %batch.display(), "batch complete");
    Ok(())
}
