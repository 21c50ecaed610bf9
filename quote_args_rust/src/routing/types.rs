use routing_models::models::types::TradeType;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::routing::RouterPreference;

// https://api-docs.uniswap.org/api-reference/swapping/quote
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuoteArgs {
    /// Wallet that will execute the swap, if connected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Fixed-side quantity in the token's base units, serialized as an exact
    /// decimal-integer string. Amount IN for exact IN trades, amount OUT for
    /// exact OUT trades.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub amount: u128,

    pub token_in_address: String,
    pub token_in_chain_id: u32,
    pub token_in_decimals: u8,
    pub token_in_symbol: String,

    pub token_out_address: String,
    pub token_out_chain_id: u32,
    pub token_out_decimals: u8,
    pub token_out_symbol: String,

    pub router_preference: RouterPreference,
    pub trade_type: TradeType,

    /// A native-asset input must be wrapped before a UniswapX order can fill
    pub needs_wrap_if_uniswap_x: bool,
    pub uniswap_x_force_synthetic_quotes: bool,
    /// Fee portion is suppressed on pricing-only quotes
    pub send_portion_enabled: bool,
}

/// Outcome of quote argument derivation. `Skip` instructs the consumer to
/// not issue a request at all, which is different from a request with empty
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteArguments {
    Skip,
    Args(GetQuoteArgs),
}

impl QuoteArguments {
    pub fn is_skip(&self) -> bool {
        matches!(self, QuoteArguments::Skip)
    }

    pub fn args(&self) -> Option<&GetQuoteArgs> {
        match self {
            QuoteArguments::Skip => None,
            QuoteArguments::Args(args) => Some(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args() -> GetQuoteArgs {
        GetQuoteArgs {
            account: Some("0x9ecDC9aF2a8254DdE8bbce8778eFAe695044cC9F".to_string()),
            amount: 340_282_366_920_938_463_463_374_607_431_768_211_455,
            token_in_address: "ETH".to_string(),
            token_in_chain_id: 8453,
            token_in_decimals: 18,
            token_in_symbol: "WETH".to_string(),
            token_out_address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".to_string(),
            token_out_chain_id: 8453,
            token_out_decimals: 6,
            token_out_symbol: "USDC".to_string(),
            router_preference: RouterPreference::Api,
            trade_type: TradeType::ExactIn,
            needs_wrap_if_uniswap_x: true,
            uniswap_x_force_synthetic_quotes: false,
            send_portion_enabled: true,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample_args()).expect("Can't fail");
        let object = value.as_object().expect("Must be an object");

        for field in [
            "account",
            "amount",
            "tokenInAddress",
            "tokenInChainId",
            "tokenInDecimals",
            "tokenInSymbol",
            "tokenOutAddress",
            "tokenOutChainId",
            "tokenOutDecimals",
            "tokenOutSymbol",
            "routerPreference",
            "tradeType",
            "needsWrapIfUniswapX",
            "uniswapXForceSyntheticQuotes",
            "sendPortionEnabled",
        ] {
            assert!(object.contains_key(field), "Missing wire field: {field}");
        }
        assert_eq!(object.len(), 15, "Unexpected extra wire fields");
    }

    #[test]
    fn test_amount_serializes_as_exact_string() {
        let value = serde_json::to_value(sample_args()).expect("Can't fail");
        assert_eq!(
            value["amount"],
            serde_json::Value::String(
                "340282366920938463463374607431768211455".to_string()
            )
        );
    }

    #[test]
    fn test_amount_round_trips_exactly() {
        let value = serde_json::to_value(sample_args()).expect("Can't fail");
        let parsed: GetQuoteArgs = serde_json::from_value(value).expect("round trip");
        assert_eq!(parsed, sample_args());
    }

    #[test]
    fn test_account_is_omitted_when_absent() {
        let mut args = sample_args();
        args.account = None;
        let value = serde_json::to_value(args).expect("Can't fail");
        assert!(value.as_object().unwrap().get("account").is_none());
    }

    #[test]
    fn test_skip_is_distinct_from_args() {
        let skip = QuoteArguments::Skip;
        assert!(skip.is_skip());
        assert!(skip.args().is_none());

        let args = QuoteArguments::Args(sample_args());
        assert!(!args.is_skip());
        assert_eq!(args.args().unwrap().token_out_symbol, "USDC");
    }
}
