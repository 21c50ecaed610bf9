use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    ExactIn,
    ExactOut,
}

/// Which side of the swap form a value belongs to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyField {
    Input,
    Output,
}

/// Whether the selected pair is a wrap/unwrap of the chain's native asset
/// instead of an actual swap
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapType {
    NotApplicable,
    Wrap,
    Unwrap,
}
