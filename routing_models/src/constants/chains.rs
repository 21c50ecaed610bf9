use error_stack::{Report, report};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::Error;

pub const NATIVE_TOKEN_EVM_ADDRESS: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";
pub const EVM_NULL_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub const NATIVE_TOKEN_EVM_ADDRESSES: [&str; 2] = [NATIVE_TOKEN_EVM_ADDRESS, EVM_NULL_ADDRESS];

pub fn is_native_token_evm_address(address: &str) -> bool {
    NATIVE_TOKEN_EVM_ADDRESSES.contains(&address.to_lowercase().as_str())
}

/// All wrapped native tokens on supported chains use 18 decimals
pub const WRAPPED_NATIVE_TOKEN_DECIMALS: u8 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, EnumIter, Hash)]
#[repr(u32)]
pub enum ChainId {
    Ethereum = 1,
    Optimism = 10,
    Bsc = 56,
    Polygon = 137,
    Base = 8453,
    ArbitrumOne = 42161,
    Avalanche = 43114,
}

impl ChainId {
    pub fn supported_chains() -> Vec<ChainId> {
        ChainId::iter().collect()
    }

    pub fn is_native_token(self, address: &str) -> bool {
        is_native_token_evm_address(address)
    }

    /// Symbol of the chain's native asset as shown to users
    pub fn native_token_symbol(self) -> &'static str {
        match self {
            ChainId::Bsc => "BNB",
            ChainId::Polygon => "MATIC",
            ChainId::Avalanche => "AVAX",
            ChainId::Ethereum
            | ChainId::Optimism
            | ChainId::Base
            | ChainId::ArbitrumOne => "ETH",
        }
    }

    pub fn wrapped_native_token_address(self) -> String {
        match self {
            ChainId::Ethereum => "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
            ChainId::Optimism => "0x4200000000000000000000000000000000000006".to_string(),
            ChainId::Bsc => "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c".to_string(),
            ChainId::Polygon => "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270".to_string(),
            ChainId::Base => "0x4200000000000000000000000000000000000006".to_string(),
            ChainId::ArbitrumOne => "0x82af49447d8a07e3bd95bd0d56f35241523fbab1".to_string(),
            ChainId::Avalanche => "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7".to_string(),
        }
    }

    pub fn wrapped_native_token_symbol(self) -> &'static str {
        match self {
            ChainId::Bsc => "WBNB",
            ChainId::Polygon => "WMATIC",
            ChainId::Avalanche => "WAVAX",
            ChainId::Ethereum
            | ChainId::Optimism
            | ChainId::Base
            | ChainId::ArbitrumOne => "WETH",
        }
    }
}

impl TryFrom<u32> for ChainId {
    type Error = Report<Error>;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        serde_json::from_str(&value.to_string()).map_err(|e| {
            Report::new(Error::ParseError)
                .attach_printable(format!("Failed to parse chain ID: {e}"))
        })
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ethereum => write!(f, "Ethereum"),
            Self::Optimism => write!(f, "Optimism"),
            Self::Bsc => write!(f, "BSC"),
            Self::Polygon => write!(f, "Polygon"),
            Self::Base => write!(f, "Base"),
            Self::ArbitrumOne => write!(f, "Arbitrum One"),
            Self::Avalanche => write!(f, "Avalanche"),
        }
    }
}

impl TryFrom<&str> for ChainId {
    type Error = Report<Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Ethereum" | "1" => Ok(Self::Ethereum),
            "Optimism" | "10" => Ok(Self::Optimism),
            "Bsc" | "BSC" | "56" => Ok(Self::Bsc),
            "Polygon" | "137" => Ok(Self::Polygon),
            "Base" | "8453" => Ok(Self::Base),
            "ArbitrumOne" | "Arbitrum One" | "42161" => Ok(Self::ArbitrumOne),
            "Avalanche" | "43114" => Ok(Self::Avalanche),
            _ => {
                tracing::warn!("Unsupported chain name: {value}");
                Err(report!(Error::ChainError(format!(
                    "Invalid chain name: {value}"
                ))))
            }
        }
    }
}
