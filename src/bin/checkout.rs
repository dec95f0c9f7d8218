use anyhow::Context;
use cep_shipping::config::load_config;
use cep_shipping::utils::{logger, validation::Validate};
use cep_shipping::{CheckoutSession, ConfigProvider, ShippingEstimator};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Replays CEP field edits from stdin, one value per line, through a
/// debounced checkout session and prints the order summary.
#[derive(Parser, Debug)]
#[command(name = "checkout")]
#[command(about = "Simulate the checkout shipping field")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the subtotal from config (centavos)
    #[arg(long)]
    subtotal: Option<u64>,

    /// Override the debounce delay from config
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Pause between replayed edits, to exercise the debounce
    #[arg(long, default_value = "0")]
    typing_delay_ms: u64,

    /// Confirm the order once shipping has settled
    #[arg(long)]
    confirm: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let mut config = load_config(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;
    if let Some(subtotal) = args.subtotal {
        config.checkout.subtotal = Some(subtotal);
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.checkout.debounce_ms = Some(debounce_ms);
    }
    config.validate().context("invalid configuration")?;

    let estimator = Arc::new(ShippingEstimator::new(config.rate_table()?));
    let mut session = CheckoutSession::new(estimator, config.subtotal(), config.debounce_delay());

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        let masked = session.input_zip_bytes(&line);
        println!("CEP: {}", masked);
        if args.typing_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(args.typing_delay_ms)).await;
        }
    }

    session.settle().await;
    println!("{}", session.summary());

    if args.confirm {
        match session.confirm() {
            Ok(confirmation) => {
                println!("Pedido confirmado! Total: {}", confirmation.total);
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
