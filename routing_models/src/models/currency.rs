use serde::{Deserialize, Serialize};

use crate::constants::chains::{ChainId, WRAPPED_NATIVE_TOKEN_DECIMALS};

pub const MAX_SYMBOL_DISPLAY_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub chain_id: ChainId,
    pub address: String,
    pub decimals: u8,
    pub symbol: String,
}

impl Token {
    pub fn new(chain_id: ChainId, address: &str, decimals: u8, symbol: &str) -> Self {
        Self {
            chain_id,
            address: address.to_string(),
            decimals,
            symbol: symbol.to_string(),
        }
    }

    /// Same token iff same chain and same address. Addresses are compared
    /// case insensitive since EVM addresses appear in mixed checksum casing.
    pub fn equals(&self, other: &Token) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

/// A tradable currency: either the chain's native asset or an ERC-20 token.
///
/// The native asset has no address of its own. For routing purposes it
/// resolves to the chain's wrapped native token via [`Currency::wrapped`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Native {
        chain_id: ChainId,
        decimals: u8,
        symbol: String,
    },
    Token(Token),
}

impl Currency {
    pub fn native(chain_id: ChainId) -> Self {
        Currency::Native {
            chain_id,
            decimals: WRAPPED_NATIVE_TOKEN_DECIMALS,
            symbol: chain_id.native_token_symbol().to_string(),
        }
    }

    pub fn token(chain_id: ChainId, address: &str, decimals: u8, symbol: &str) -> Self {
        Currency::Token(Token::new(chain_id, address, decimals, symbol))
    }

    pub fn chain_id(&self) -> ChainId {
        match self {
            Currency::Native { chain_id, .. } => *chain_id,
            Currency::Token(token) => token.chain_id,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native { decimals, .. } => *decimals,
            Currency::Token(token) => token.decimals,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Currency::Native { symbol, .. } => symbol,
            Currency::Token(token) => &token.symbol,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native { .. })
    }

    /// Canonical tradable form. A token is its own wrapped form, the native
    /// asset resolves to the chain's wrapped native token.
    pub fn wrapped(&self) -> Token {
        match self {
            Currency::Token(token) => token.clone(),
            Currency::Native { chain_id, .. } => Token {
                chain_id: *chain_id,
                address: chain_id.wrapped_native_token_address(),
                decimals: WRAPPED_NATIVE_TOKEN_DECIMALS,
                symbol: chain_id.wrapped_native_token_symbol().to_string(),
            },
        }
    }

    /// Identity equality: two natives match iff on the same chain, two
    /// tokens iff [`Token::equals`]. A native asset never equals a token,
    /// not even its own wrapped form.
    pub fn equals(&self, other: &Currency) -> bool {
        match (self, other) {
            (Currency::Native { chain_id: a, .. }, Currency::Native { chain_id: b, .. }) => a == b,
            (Currency::Token(a), Currency::Token(b)) => a.equals(b),
            _ => false,
        }
    }
}

/// Shortens long token symbols for display. Anything above 6 characters is
/// cut to the first 5 plus an ellipsis.
pub fn symbol_display_text(symbol: &str) -> String {
    if symbol.chars().count() > MAX_SYMBOL_DISPLAY_LENGTH {
        let truncated: String = symbol.chars().take(5).collect();
        format!("{truncated}...")
    } else {
        symbol.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdc() -> Currency {
        Currency::token(
            ChainId::Base,
            "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
            6,
            "USDC",
        )
    }

    #[test]
    fn test_token_equality_is_case_insensitive() {
        let a = Token::new(
            ChainId::Base,
            "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
            6,
            "USDC",
        );
        let b = Token::new(
            ChainId::Base,
            "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
            6,
            "USDC",
        );
        assert!(a.equals(&b));
    }

    #[test]
    fn test_token_equality_requires_same_chain() {
        let base = Token::new(ChainId::Base, "0x4200000000000000000000000000000000000006", 18, "WETH");
        let optimism = Token::new(ChainId::Optimism, "0x4200000000000000000000000000000000000006", 18, "WETH");
        assert!(!base.equals(&optimism));
    }

    #[test]
    fn test_native_currency_fields() {
        let eth = Currency::native(ChainId::Ethereum);
        assert!(eth.is_native());
        assert_eq!(eth.chain_id(), ChainId::Ethereum);
        assert_eq!(eth.decimals(), 18);
        assert_eq!(eth.symbol(), "ETH");

        let bnb = Currency::native(ChainId::Bsc);
        assert_eq!(bnb.symbol(), "BNB");
    }

    #[test]
    fn test_wrapped_resolution() {
        let eth = Currency::native(ChainId::Ethereum);
        let weth = eth.wrapped();
        assert_eq!(weth.symbol, "WETH");
        assert_eq!(weth.decimals, 18);
        assert_eq!(
            weth.address,
            ChainId::Ethereum.wrapped_native_token_address()
        );

        // A token wraps to itself
        let token = usdc();
        assert!(token.wrapped().equals(&usdc().wrapped()));
        assert!(!token.is_native());
    }

    #[test]
    fn test_currency_equality() {
        let eth = Currency::native(ChainId::Ethereum);
        assert!(eth.equals(&Currency::native(ChainId::Ethereum)));
        assert!(!eth.equals(&Currency::native(ChainId::Base)));

        // Native never equals a token by identity, even its wrapped form
        let weth = Currency::Token(eth.wrapped());
        assert!(!eth.equals(&weth));
        // But the wrapped forms collide
        assert!(eth.wrapped().equals(&weth.wrapped()));
    }

    #[test]
    fn test_symbol_display_text() {
        assert_eq!(symbol_display_text("USDC"), "USDC");
        assert_eq!(symbol_display_text("WMATIC"), "WMATIC");
        assert_eq!(symbol_display_text("LONGSYMBOL"), "LONGS...");
        assert_eq!(symbol_display_text(""), "");
    }
}
