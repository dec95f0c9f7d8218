pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use crate::core::{
    cep::{is_valid, mask, Cep},
    checkout::{CheckoutSession, OrderConfirmation, OrderSummary, ShippingState},
    currency::{format_currency, Money},
    debounce::Debouncer,
    shipping::{calculate_shipping, RateTable, ShippingEstimator},
};
pub use domain::model::{RegionRate, ShippingRegion, ShippingResult};
pub use domain::ports::{ConfigProvider, ShippingQuoter};
pub use utils::error::{Result, ShippingError};
