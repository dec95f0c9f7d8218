use crate::config::toml_config::TomlConfig;
use crate::core::checkout::DEFAULT_SUBTOTAL;
use crate::core::debounce::DEFAULT_DEBOUNCE;
use crate::core::shipping::RateTable;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "cep-shipping")]
#[command(about = "Quote shipping for a Brazilian CEP")]
pub struct CliConfig {
    /// CEP as typed by the customer; punctuation is ignored
    #[arg(long)]
    pub cep: String,

    /// Order subtotal in centavos (overrides the config file)
    #[arg(long)]
    pub subtotal: Option<u64>,

    /// Path to a TOML file with checkout settings and rate table
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = super::load_config(self.config.as_deref())?;
        if let Some(subtotal) = self.subtotal {
            tracing::debug!("Subtotal overridden to {}", subtotal);
            config.checkout.subtotal = Some(subtotal);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Settings come from the config file when one is given, with `--subtotal`
/// taking precedence. Only `rate_table` reports a broken file; the other
/// accessors log it and fall back to the defaults.
impl ConfigProvider for CliConfig {
    fn subtotal(&self) -> u64 {
        match self.resolve() {
            Ok(config) => config.subtotal(),
            Err(e) => {
                tracing::warn!("Using default subtotal, config unusable: {}", e);
                self.subtotal.unwrap_or(DEFAULT_SUBTOTAL)
            }
        }
    }

    fn debounce_delay(&self) -> Duration {
        match self.resolve() {
            Ok(config) => config.debounce_delay(),
            Err(e) => {
                tracing::warn!("Using default debounce, config unusable: {}", e);
                DEFAULT_DEBOUNCE
            }
        }
    }

    fn rate_table(&self) -> Result<RateTable> {
        self.resolve()?.rate_table()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ShippingRegion;
    use crate::utils::error::ShippingError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FILE_CONFIG: &str = r#"
[checkout]
subtotal = 500000
debounce_ms = 250

[[rates]]
region = "interior"
prefix_start = 0
prefix_end = 99999
price = 4200
days_min = 3
days_max = 6
"#;

    fn config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_parse_args() {
        let config =
            CliConfig::try_parse_from(["cep-shipping", "--cep", "01310-000", "--subtotal", "100", "--json"])
                .unwrap();
        assert_eq!(config.cep, "01310-000");
        assert_eq!(config.subtotal, Some(100));
        assert!(config.json);
        assert!(config.validate().is_ok());

        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.subtotal(), 100);
    }

    #[test]
    fn test_provider_reads_file_and_applies_override() {
        let file = config_file(FILE_CONFIG);
        let path = file.path().to_str().unwrap();

        let from_file =
            CliConfig::try_parse_from(["cep-shipping", "--cep", "01310000", "--config", path]).unwrap();
        assert_eq!(from_file.subtotal(), 500000);
        assert_eq!(from_file.debounce_delay(), Duration::from_millis(250));

        let overridden = CliConfig::try_parse_from([
            "cep-shipping",
            "--cep",
            "01310000",
            "--config",
            path,
            "--subtotal",
            "777",
        ])
        .unwrap();
        assert_eq!(overridden.subtotal(), 777);
        assert_eq!(overridden.debounce_delay(), Duration::from_millis(250));

        let table = overridden.rate_table().unwrap();
        assert_eq!(table.rates().len(), 1);
        assert_eq!(table.lookup(1310).unwrap().region, ShippingRegion::Interior);
        assert_eq!(table.lookup(1310).unwrap().price, 4200);
    }

    #[test]
    fn test_provider_defaults_without_file() {
        let config = CliConfig::try_parse_from(["cep-shipping", "--cep", "01310000"]).unwrap();
        assert_eq!(config.subtotal(), DEFAULT_SUBTOTAL);
        assert_eq!(config.debounce_delay(), DEFAULT_DEBOUNCE);
        assert_eq!(config.rate_table().unwrap(), RateTable::default());
    }

    #[test]
    fn test_provider_propagates_file_errors() {
        let missing = CliConfig::try_parse_from([
            "cep-shipping",
            "--cep",
            "01310000",
            "--config",
            "/nonexistent/rates.toml",
            "--subtotal",
            "900",
        ])
        .unwrap();
        assert!(matches!(missing.rate_table(), Err(ShippingError::IoError(_))));
        assert_eq!(missing.subtotal(), 900);
        assert_eq!(missing.debounce_delay(), DEFAULT_DEBOUNCE);

        let gapped = config_file(&FILE_CONFIG.replace("prefix_start = 0", "prefix_start = 10"));
        let config = CliConfig::try_parse_from([
            "cep-shipping",
            "--cep",
            "01310000",
            "--config",
            gapped.path().to_str().unwrap(),
        ])
        .unwrap();
        let err = config.rate_table().unwrap_err();
        assert!(matches!(err, ShippingError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("00000-00009"));
    }

    #[test]
    fn test_cep_is_required() {
        assert!(CliConfig::try_parse_from(["cep-shipping"]).is_err());
    }

    #[test]
    fn test_empty_config_path_rejected() {
        let config = CliConfig::try_parse_from(["cep-shipping", "--cep", "1", "--config", ""]).unwrap();
        assert!(config.validate().is_err());
    }
}
