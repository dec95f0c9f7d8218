pub mod cep;
pub mod checkout;
pub mod currency;
pub mod debounce;
pub mod shipping;

pub use crate::domain::model::{RegionRate, ShippingRegion, ShippingResult};
pub use crate::domain::ports::{ConfigProvider, ShippingQuoter};
pub use crate::utils::error::Result;
