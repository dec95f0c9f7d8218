use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingRegion {
    Capital,
    Metro,
    Interior,
    Remote,
}

impl ShippingRegion {
    pub const ALL: [ShippingRegion; 4] = [
        ShippingRegion::Capital,
        ShippingRegion::Metro,
        ShippingRegion::Interior,
        ShippingRegion::Remote,
    ];

    /// Label shown next to the delivery estimate.
    pub fn label(&self) -> &'static str {
        match self {
            ShippingRegion::Capital => "Capital",
            ShippingRegion::Metro => "Região Metropolitana",
            ShippingRegion::Interior => "Interior",
            ShippingRegion::Remote => "Regiões Remotas",
        }
    }
}

impl fmt::Display for ShippingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingResult {
    /// Price in centavos.
    pub price: u64,
    pub days_min: u32,
    pub days_max: u32,
    pub region: ShippingRegion,
}

impl ShippingResult {
    pub fn delivery_estimate(&self) -> String {
        format!("{}-{} dias úteis", self.days_min, self.days_max)
    }
}

/// One row of the rate table. Prefix bounds are inclusive and refer to the
/// first five digits of the CEP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRate {
    pub region: ShippingRegion,
    pub prefix_start: u32,
    pub prefix_end: u32,
    pub price: u64,
    pub days_min: u32,
    pub days_max: u32,
}

impl RegionRate {
    pub const fn new(
        region: ShippingRegion,
        prefixes: (u32, u32),
        price: u64,
        days: (u32, u32),
    ) -> Self {
        Self {
            region,
            prefix_start: prefixes.0,
            prefix_end: prefixes.1,
            price,
            days_min: days.0,
            days_max: days.1,
        }
    }

    pub fn contains(&self, prefix: u32) -> bool {
        (self.prefix_start..=self.prefix_end).contains(&prefix)
    }

    pub fn to_result(&self) -> ShippingResult {
        ShippingResult {
            price: self.price,
            days_min: self.days_min,
            days_max: self.days_max,
            region: self.region,
        }
    }
}
