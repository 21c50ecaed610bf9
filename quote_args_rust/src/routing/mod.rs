pub mod address;
pub mod builder;
pub mod fetch;
pub mod types;

use serde::{Deserialize, Serialize};

/// Which quoting backend/strategy a quote request should be routed through.
///
/// `Price` is internal only: it marks quotes fetched purely for pricing
/// display, which must never carry fee logic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouterPreference {
    #[serde(rename = "uniswapx")]
    X,
    #[serde(rename = "api")]
    Api,
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "price")]
    Price,
}
