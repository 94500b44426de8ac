//! Base-asset token descriptor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Symbol;

/// A token with its on-chain decimal convention.
///
/// On-chain price caches store prices as raw unscaled integers; the token's
/// `decimals` says how many fractional digits that raw value carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token symbol, e.g. "BTC".
    pub symbol: Symbol,
    /// Number of fractional digits in raw on-chain values.
    pub decimals: u32,
}

impl Token {
    /// Create a new token descriptor.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Convert a raw unscaled integer into a decimal value.
    ///
    /// A raw value of `150000` with 3 decimals becomes `150.000`.
    #[must_use]
    pub fn shift_to_decimals(&self, raw: i64) -> Decimal {
        Decimal::new(raw, self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn shift_to_decimals_basic() {
        let token = Token::new("ABC", 3);
        assert_eq!(token.shift_to_decimals(150_000), dec!(150.000));
    }

    #[test]
    fn shift_to_decimals_zero_decimals() {
        let token = Token::new("SOL", 0);
        assert_eq!(token.shift_to_decimals(42), dec!(42));
    }

    #[test]
    fn shift_to_decimals_negative_raw() {
        let token = Token::new("FUND", 4);
        assert_eq!(token.shift_to_decimals(-12_500), dec!(-1.2500));
    }

    #[test]
    fn shift_to_decimals_zero() {
        let token = Token::new("BTC", 6);
        assert_eq!(token.shift_to_decimals(0), Decimal::ZERO);
    }
}
