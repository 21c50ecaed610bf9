use routing_models::constants::chains::ChainId;
use routing_models::models::amount::CurrencyAmount;
use routing_models::models::currency::Currency;
use routing_models::models::types::{CurrencyField, TradeType, WrapType};
use serde::{Deserialize, Serialize};

use crate::models::trade::Trade;
use crate::routing::RouterPreference;
use crate::routing::builder::QuoteRequestInputs;

/// Everything the swap form derives from its mutable state on each change.
/// Reconstructed wholesale whenever an input changes; holds no identity of
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSwapInfo {
    pub chain_id: ChainId,
    pub input_currency: Option<Currency>,
    pub output_currency: Option<Currency>,
    pub input_amount: Option<CurrencyAmount>,
    pub output_amount: Option<CurrencyAmount>,
    pub trade: Option<Trade>,
    pub wrap_type: WrapType,
    pub focus_on_currency_field: Option<CurrencyField>,
    pub auto_slippage_tolerance: Option<f64>,
    pub custom_slippage_tolerance: Option<f64>,
}

impl DerivedSwapInfo {
    /// User-set tolerance wins over the automatically derived one
    pub fn slippage_tolerance(&self) -> Option<f64> {
        self.custom_slippage_tolerance.or(self.auto_slippage_tolerance)
    }

    /// Input tuple for the quote argument builder. The fixed amount is the
    /// input side for exact IN trades and the output side for exact OUT.
    pub fn quote_request_inputs(
        &self,
        account: Option<String>,
        trade_type: TradeType,
        router_preference: RouterPreference,
    ) -> QuoteRequestInputs {
        let amount = match trade_type {
            TradeType::ExactIn => self.input_amount.clone(),
            TradeType::ExactOut => self.output_amount.clone(),
        };
        QuoteRequestInputs {
            account,
            token_in: self.input_currency.clone(),
            token_out: self.output_currency.clone(),
            amount,
            trade_type,
            router_preference,
        }
    }
}

/// Classifies a currency pair as a wrap, an unwrap, or a regular swap.
pub fn wrap_type(input: Option<&Currency>, output: Option<&Currency>) -> WrapType {
    let (Some(input), Some(output)) = (input, output) else {
        return WrapType::NotApplicable;
    };
    if input.chain_id() != output.chain_id() {
        return WrapType::NotApplicable;
    }

    if input.is_native() && input.wrapped().equals(&output.wrapped()) && !output.is_native() {
        WrapType::Wrap
    } else if output.is_native() && output.wrapped().equals(&input.wrapped()) && !input.is_native()
    {
        WrapType::Unwrap
    } else {
        WrapType::NotApplicable
    }
}
