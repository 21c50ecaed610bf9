use once_cell::sync::Lazy;
use routing_models::constants::chains::ChainId;
use routing_models::models::currency::Currency;
use std::collections::HashMap;

/// Native-asset designators understood by the routing API in place of a
/// token address.
pub const NATIVE_ASSET_ETH: &str = "ETH";
pub const NATIVE_ASSET_BNB: &str = "BNB";
pub const NATIVE_ASSET_MATIC: &str = "MATIC";
pub const NATIVE_ASSET_AVAX: &str = "AVAX";

/// Universal router deployments per chain
static UNIVERSAL_ROUTER_ADDRESSES: Lazy<HashMap<ChainId, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ChainId::Ethereum, "0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
        (ChainId::Optimism, "0xCb1355ff08Ab38bBCE60111F1bb2B784bE25D7e8"),
        (ChainId::Bsc, "0x4Dae2f939ACf50408e13d58534Ff8c2776d45265"),
        (ChainId::Polygon, "0x643770E279d5D0733F21d6DC03A8efbABf3255B4"),
        (ChainId::Base, "0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
        (ChainId::ArbitrumOne, "0x5E325eDA8064b456f4781070C0738d849c824258"),
        (ChainId::Avalanche, "0x4Dae2f939ACf50408e13d58534Ff8c2776d45265"),
    ])
});

/// Address to put on a quote request for the given currency.
///
/// The native asset has no address; the routing API expects its chain
/// designator instead. Tokens are addressed directly.
pub fn currency_address_for_swap_quote(currency: &Currency) -> String {
    match currency {
        Currency::Token(token) => token.address.clone(),
        Currency::Native { chain_id, .. } => match chain_id {
            ChainId::Bsc => NATIVE_ASSET_BNB,
            ChainId::Polygon => NATIVE_ASSET_MATIC,
            ChainId::Avalanche => NATIVE_ASSET_AVAX,
            ChainId::Ethereum
            | ChainId::Optimism
            | ChainId::Base
            | ChainId::ArbitrumOne => NATIVE_ASSET_ETH,
        }
        .to_string(),
    }
}

/// Universal router deployment for the chain. On Ethereum mainnet an
/// externally resolved address takes precedence over the static table when
/// provided.
pub fn universal_router_address(
    chain_id: ChainId,
    resolved_address: Option<&str>,
) -> Option<String> {
    if chain_id == ChainId::Ethereum {
        if let Some(address) = resolved_address {
            return Some(address.to_string());
        }
    }
    UNIVERSAL_ROUTER_ADDRESSES
        .get(&chain_id)
        .map(|address| address.to_string())
}
