use crate::core::cep::Cep;
use crate::domain::model::{RegionRate, ShippingRegion, ShippingResult};
use crate::domain::ports::ShippingQuoter;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{validate_ordered, validate_range};
use std::sync::LazyLock;

pub const MAX_PREFIX: u32 = 99_999;

const DEFAULT_RATES: [RegionRate; 6] = [
    RegionRate::new(ShippingRegion::Capital, (1_000, 5_999), 1_500, (1, 2)),
    RegionRate::new(ShippingRegion::Metro, (6_000, 9_999), 2_500, (2, 4)),
    RegionRate::new(ShippingRegion::Metro, (10_000, 19_999), 2_500, (2, 4)),
    RegionRate::new(ShippingRegion::Interior, (20_000, 79_999), 3_900, (4, 7)),
    RegionRate::new(ShippingRegion::Remote, (0, 999), 5_900, (7, 15)),
    RegionRate::new(ShippingRegion::Remote, (80_000, MAX_PREFIX), 5_900, (7, 15)),
];

static DEFAULT_ESTIMATOR: LazyLock<ShippingEstimator> =
    LazyLock::new(|| ShippingEstimator::new(RateTable::default()));

/// Ordered list of region rates. Rows never overlap and together cover every
/// prefix from 00000 to 99999; lookups take the first row that matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: Vec<RegionRate>,
}

impl RateTable {
    pub fn new(rates: Vec<RegionRate>) -> Result<Self> {
        if rates.is_empty() {
            return Err(ShippingError::MissingConfigError {
                field: "rates".to_string(),
            });
        }

        for (i, rate) in rates.iter().enumerate() {
            validate_range(&format!("rates[{}].prefix_end", i), rate.prefix_end, 0, MAX_PREFIX)?;
            validate_ordered(
                &format!("rates[{}].prefix", i),
                rate.prefix_start,
                rate.prefix_end,
            )?;
            validate_ordered(&format!("rates[{}].days", i), rate.days_min, rate.days_max)?;
        }

        Self::check_partition(&rates)?;
        Ok(Self { rates })
    }

    /// Sorted by start, each row must begin right after the previous one ends,
    /// starting at 0 and ending at `MAX_PREFIX`.
    fn check_partition(rates: &[RegionRate]) -> Result<()> {
        let mut sorted: Vec<&RegionRate> = rates.iter().collect();
        sorted.sort_by_key(|rate| rate.prefix_start);

        let mut next_start = 0u32;
        for rate in sorted {
            if rate.prefix_start < next_start {
                return Err(ShippingError::ConfigValidationError {
                    field: "rates".to_string(),
                    message: format!(
                        "{} range {:05}-{:05} overlaps a previous range",
                        rate.region.label(),
                        rate.prefix_start,
                        rate.prefix_end
                    ),
                });
            }
            if rate.prefix_start > next_start {
                return Err(ShippingError::ConfigValidationError {
                    field: "rates".to_string(),
                    message: format!(
                        "prefixes {:05}-{:05} are not covered",
                        next_start,
                        rate.prefix_start - 1
                    ),
                });
            }
            next_start = rate.prefix_end + 1;
        }

        if next_start <= MAX_PREFIX {
            return Err(ShippingError::ConfigValidationError {
                field: "rates".to_string(),
                message: format!("prefixes {:05}-{:05} are not covered", next_start, MAX_PREFIX),
            });
        }
        Ok(())
    }

    pub fn rates(&self) -> &[RegionRate] {
        &self.rates
    }

    pub fn lookup(&self, prefix: u32) -> Result<&RegionRate> {
        self.rates
            .iter()
            .find(|rate| rate.contains(prefix))
            .ok_or(ShippingError::NoMatchingRegion { prefix })
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShippingEstimator {
    table: RateTable,
}

impl ShippingEstimator {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

impl ShippingQuoter for ShippingEstimator {
    fn quote(&self, cep: &Cep) -> Result<ShippingResult> {
        let rate = self.table.lookup(cep.prefix())?;
        tracing::debug!(
            "Quoted {} as {} ({} cents, {}-{} days)",
            cep,
            rate.region.label(),
            rate.price,
            rate.days_min,
            rate.days_max
        );
        Ok(rate.to_result())
    }
}

/// Quotes a masked CEP against the default rate table.
///
/// Fails with [`ShippingError::InvalidCep`] unless `masked` is a complete
/// `00000-000` code.
pub fn calculate_shipping(masked: &str) -> Result<ShippingResult> {
    let cep = Cep::parse(masked)?;
    DEFAULT_ESTIMATOR.quote(&cep)
}
