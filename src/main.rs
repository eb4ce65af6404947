use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payqr::interfaces::csv::request_reader::RequestReader;
use payqr::interfaces::csv::token_writer::TokenWriter;
use payqr::{PaymentQrCodec, PaymentRequest, ValidatorConfig};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reject payee addresses that are not in username@provider format
    #[arg(long, global = true, env = "PAYQR_ENFORCE_VPA")]
    enforce_vpa: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a payment request into a QR token
    Encode {
        /// Payee name
        #[arg(long)]
        name: String,
        /// Virtual payment address of the payee
        #[arg(long)]
        vpa: String,
        /// Payee account number
        #[arg(long)]
        account: String,
        /// Three-letter uppercase currency code
        #[arg(long)]
        currency: String,
        /// Requested amount; omitted to let the payer choose
        #[arg(long, default_value = "")]
        amount: String,
        /// Print the payment URI instead of the token
        #[arg(long)]
        uri: bool,
    },
    /// Decode a QR token and print the payment request as JSON
    Decode {
        /// Token to decode; read from stdin when omitted or `-`
        token: Option<String>,
        /// Treat the input as a raw `upi://pay?` URI
        #[arg(long)]
        uri: bool,
    },
    /// Encode every request in a CSV file, writing one token per row
    Batch {
        /// Input CSV with payee_name,payee_address,account_number,currency_code,amount
        input: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let codec = PaymentQrCodec::new(ValidatorConfig {
        enforce_address_format: cli.enforce_vpa,
    });

    match cli.command {
        Command::Encode {
            name,
            vpa,
            account,
            currency,
            amount,
            uri,
        } => {
            let request = PaymentRequest::new(name, vpa, account, currency).with_amount(amount);
            let output = if uri {
                codec.encode_uri(&request)
            } else {
                codec.encode(&request)
            }
            .into_diagnostic()?;
            println!("{output}");
        }
        Command::Decode { token, uri } => {
            let input = match token.as_deref() {
                None | Some("-") => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer).into_diagnostic()?;
                    buffer
                }
                Some(token) => token.to_string(),
            };
            let input = input.trim();

            let request = if uri {
                codec.decode_uri(input)
            } else {
                codec.decode(input)
            }
            .into_diagnostic()?;
            let json = serde_json::to_string_pretty(&request).into_diagnostic()?;
            println!("{json}");
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);
            let stdout = io::stdout();
            let mut writer = TokenWriter::new(stdout.lock());

            for request in reader.requests() {
                match request {
                    Ok(request) => match codec.encode(&request) {
                        Ok(token) => writer.write_token(&request, &token).into_diagnostic()?,
                        Err(e) => eprintln!("Error encoding request: {}", e),
                    },
                    Err(e) => eprintln!("Error reading request: {}", e),
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
