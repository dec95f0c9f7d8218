use cep_shipping::utils::error::ShippingError;
use cep_shipping::utils::{logger, validation::Validate};
use cep_shipping::{
    mask, Cep, CliConfig, ConfigProvider, Money, ShippingEstimator, ShippingQuoter,
};
use clap::Parser;
use serde_json::json;

fn fail(e: ShippingError) -> ! {
    tracing::error!(
        "❌ Shipping quote failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = args.validate() {
        fail(e);
    }
    let table = args.rate_table().unwrap_or_else(|e| fail(e));
    let estimator = ShippingEstimator::new(table);

    let masked = mask(&args.cep);
    let cep = Cep::parse(&masked).unwrap_or_else(|e| fail(e));
    let result = estimator.quote(&cep).unwrap_or_else(|e| fail(e));

    let subtotal = Money(args.subtotal());
    let total = subtotal + Money(result.price);

    if args.json {
        let output = json!({
            "cep": cep,
            "shipping": result,
            "subtotal": subtotal,
            "total": total,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("CEP: {}", cep);
        println!("Região: {}", result.region);
        println!("Frete: {}", Money(result.price));
        println!("Entrega em {}", result.delivery_estimate());
        println!("Subtotal: {}", subtotal);
        println!("Total: {}", total);
    }

    Ok(())
}
