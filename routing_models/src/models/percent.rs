use serde::{Deserialize, Serialize};

pub const BASIS_POINTS_DENOMINATOR: u128 = 10_000;

/// Exact rational percentage. 50/10_000 is 0.5%.
///
/// Kept as an integer fraction so slippage adjustments never go through
/// floating point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent {
    pub numerator: u128,
    pub denominator: u128,
}

impl Percent {
    pub fn new(numerator: u128, denominator: u128) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn from_basis_points(bps: u128) -> Self {
        Self {
            numerator: bps,
            denominator: BASIS_POINTS_DENOMINATOR,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}
