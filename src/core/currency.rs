use serde::{Deserialize, Serialize};
use std::fmt;

const CURRENCY_SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Renders an amount in centavos as Brazilian real, e.g. `R$ 12.500,00`.
pub fn format_currency(cents: u64) -> String {
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    format!(
        "{} {}{}{:02}",
        CURRENCY_SYMBOL, grouped, DECIMAL_SEPARATOR, fraction
    )
}

/// Amount in centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    pub fn cents(self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}
