use serde::{Deserialize, Serialize};

use crate::models::currency::Currency;

/// An exact quantity of a currency in base units.
///
/// The quotient is the raw integer count of base units (for one USDC that is
/// 1_000_000 at 6 decimals). No float representation exists anywhere on this
/// type; display formatting happens at the edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub quotient: u128,
}

impl CurrencyAmount {
    pub fn new(currency: Currency, quotient: u128) -> Self {
        Self { currency, quotient }
    }

    /// Base-unit amount as an exact decimal-integer string
    pub fn to_exact_string(&self) -> String {
        self.quotient.to_string()
    }
}
