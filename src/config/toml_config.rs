use crate::core::checkout::DEFAULT_SUBTOTAL;
use crate::core::debounce::DEFAULT_DEBOUNCE;
use crate::core::shipping::RateTable;
use crate::core::ConfigProvider;
use crate::domain::model::RegionRate;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

pub const MAX_DEBOUNCE_MS: u64 = 10_000;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub checkout: CheckoutConfig,
    pub rates: Option<Vec<RegionRate>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Order subtotal in centavos.
    pub subtotal: Option<u64>,
    pub debounce_ms: Option<u64>,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ShippingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(debounce_ms) = self.checkout.debounce_ms {
            validate_range("checkout.debounce_ms", debounce_ms, 0, MAX_DEBOUNCE_MS)?;
        }

        self.rate_table()?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn subtotal(&self) -> u64 {
        self.checkout.subtotal.unwrap_or(DEFAULT_SUBTOTAL)
    }

    fn debounce_delay(&self) -> Duration {
        self.checkout
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    fn rate_table(&self) -> Result<RateTable> {
        match &self.rates {
            Some(rates) => RateTable::new(rates.clone()),
            None => Ok(RateTable::default()),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
