//! CEP (Brazilian postal code) masking and validation.
//!
//! A raw field value is reduced to its ASCII digits and rendered in the
//! canonical `00000-000` form. Only a [`Cep`] can be handed to the shipping
//! estimator, so an unvalidated string never reaches the rate lookup.

use crate::utils::error::{Result, ShippingError};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const CEP_DIGITS: usize = 8;
const PREFIX_DIGITS: usize = 5;

static CEP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // `\d` would also accept non-ASCII digits.
    Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("CEP pattern is a valid regex")
});

/// Formats raw input as a (possibly partial) masked CEP.
pub fn mask(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(CEP_DIGITS)
        .collect();

    if digits.len() <= PREFIX_DIGITS {
        return digits;
    }

    let (prefix, suffix) = digits.split_at(PREFIX_DIGITS);
    format!("{}-{}", prefix, suffix)
}

pub fn is_valid(masked: &str) -> bool {
    CEP_PATTERN.is_match(masked)
}

/// A validated, masked CEP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    pub fn parse(masked: &str) -> Result<Self> {
        if !is_valid(masked) {
            return Err(ShippingError::InvalidCep {
                value: masked.to_string(),
            });
        }
        Ok(Self(masked.to_string()))
    }

    /// Masks `raw` first, so `"01310000"` and `"01.310-000"` both parse.
    pub fn from_raw(raw: &str) -> Result<Self> {
        Self::parse(&mask(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the first five digits.
    pub fn prefix(&self) -> u32 {
        self.0[..PREFIX_DIGITS]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl FromStr for Cep {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Cep {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
