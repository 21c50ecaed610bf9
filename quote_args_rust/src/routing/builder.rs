use routing_models::models::amount::CurrencyAmount;
use routing_models::models::currency::Currency;
use routing_models::models::types::TradeType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::flags::{FeatureFlag, FeatureFlagReader};
use crate::routing::RouterPreference;
use crate::routing::address::currency_address_for_swap_quote;
use crate::routing::types::{GetQuoteArgs, QuoteArguments};

/// Mutable form state the quote arguments are derived from. Inputs do not
/// need any preprocessing, they are destructured as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequestInputs {
    pub account: Option<String>,
    pub token_in: Option<Currency>,
    pub token_out: Option<Currency>,
    /// Fixed-side amount: amount IN for exact IN trades, amount OUT for
    /// exact OUT trades
    pub amount: Option<CurrencyAmount>,
    pub trade_type: TradeType,
    pub router_preference: RouterPreference,
}

/// Derives quote request arguments from the current form state, or `Skip`
/// when no request should be issued.
///
/// Skips when either currency or the amount is unset, and when the two
/// currencies are the same asset - by identity or through their wrapped
/// forms, which also covers native/wrapped-native pairs.
pub fn routing_api_arguments(
    inputs: &QuoteRequestInputs,
    force_synthetic_quotes: bool,
) -> QuoteArguments {
    let (Some(token_in), Some(token_out), Some(amount)) =
        (&inputs.token_in, &inputs.token_out, &inputs.amount)
    else {
        return QuoteArguments::Skip;
    };

    if token_in.equals(token_out) || token_in.wrapped().equals(&token_out.wrapped()) {
        tracing::debug!(
            token_in = token_in.symbol(),
            token_out = token_out.symbol(),
            "Skipping quote arguments for a self-swap pair"
        );
        return QuoteArguments::Skip;
    }

    let wrapped_in = token_in.wrapped();
    let wrapped_out = token_out.wrapped();

    // Fee logic stays off for pricing-only quotes
    let send_portion_enabled = inputs.router_preference != RouterPreference::Price;

    // Field sourcing is intentionally uneven: the IN chain id comes from the
    // raw currency while decimals/symbols come from the wrapped forms on
    // both sides. Kept exactly as the consumer expects it.
    QuoteArguments::Args(GetQuoteArgs {
        account: inputs.account.clone(),
        amount: amount.quotient,
        token_in_address: currency_address_for_swap_quote(token_in),
        token_in_chain_id: token_in.chain_id() as u32,
        token_in_decimals: wrapped_in.decimals,
        token_in_symbol: wrapped_in.symbol,
        token_out_address: currency_address_for_swap_quote(token_out),
        token_out_chain_id: wrapped_out.chain_id as u32,
        token_out_decimals: wrapped_out.decimals,
        token_out_symbol: wrapped_out.symbol,
        router_preference: inputs.router_preference,
        trade_type: inputs.trade_type,
        needs_wrap_if_uniswap_x: token_in.is_native(),
        uniswap_x_force_synthetic_quotes: force_synthetic_quotes,
        send_portion_enabled,
    })
}

/// Recompute-on-change wrapper around [`routing_api_arguments`].
///
/// Keeps the last (inputs, flag) key and its result; building with unchanged
/// inputs hands back the same `Arc`, so downstream consumers can use
/// pointer identity to avoid refetching. Any change in the key recomputes.
pub struct QuoteArgumentBuilder {
    flags: Arc<dyn FeatureFlagReader>,
    last: Option<(QuoteRequestInputs, bool, Arc<QuoteArguments>)>,
}

impl QuoteArgumentBuilder {
    pub fn new(flags: Arc<dyn FeatureFlagReader>) -> Self {
        Self { flags, last: None }
    }

    pub fn build(&mut self, inputs: QuoteRequestInputs) -> Arc<QuoteArguments> {
        let force_synthetic_quotes = self.flags.is_enabled(FeatureFlag::UniswapXSyntheticQuote);

        if let Some((last_inputs, last_flag, cached)) = &self.last {
            if *last_inputs == inputs && *last_flag == force_synthetic_quotes {
                return Arc::clone(cached);
            }
        }

        let arguments = Arc::new(routing_api_arguments(&inputs, force_synthetic_quotes));
        self.last = Some((inputs, force_synthetic_quotes, Arc::clone(&arguments)));
        arguments
    }
}
