use crate::utils::error::{Result, ShippingError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks that `low <= high` for a pair of bounds read from the same record.
pub fn validate_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    low: T,
    high: T,
) -> Result<()> {
    if low > high {
        return Err(ShippingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", low, high),
            reason: "Lower bound is greater than upper bound".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "./rates.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "   ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("checkout.debounce_ms", 500u64, 0, 10_000).is_ok());
        assert!(validate_range("checkout.debounce_ms", 10_001u64, 0, 10_000).is_err());
    }

    #[test]
    fn test_validate_ordered() {
        assert!(validate_ordered("rates[0].days", 1u32, 2).is_ok());
        assert!(validate_ordered("rates[0].days", 3u32, 3).is_ok());

        let err = validate_ordered("rates[0].days", 5u32, 2).unwrap_err();
        assert!(err.to_string().contains("5..2"));
    }
}
