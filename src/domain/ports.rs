use crate::core::cep::Cep;
use crate::core::shipping::RateTable;
use crate::domain::model::ShippingResult;
use crate::utils::error::Result;
use std::time::Duration;

pub trait ShippingQuoter: Send + Sync {
    fn quote(&self, cep: &Cep) -> Result<ShippingResult>;
}

pub trait ConfigProvider {
    fn subtotal(&self) -> u64;
    fn debounce_delay(&self) -> Duration;
    fn rate_table(&self) -> Result<RateTable>;
}
