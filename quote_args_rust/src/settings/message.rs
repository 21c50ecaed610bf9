use routing_models::models::amount::CurrencyAmount;
use routing_models::models::currency::symbol_display_text;
use routing_models::models::types::TradeType;
use serde::{Deserialize, Serialize};

use crate::error::QuoteArgsResult;
use crate::models::trade::Trade;
use crate::utils::number_conversion::u128_to_decimal_string;
use crate::utils::slippage::slippage_tolerance_to_percent;

/// Worst-case summary of a trade under the current slippage tolerance:
/// the least the user can receive (exact IN) or the most they can spend
/// (exact OUT), paired with that side's display symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub amount: CurrencyAmount,
    pub token_symbol: String,
    /// Secondary warning shown when the tolerance itself is suspicious
    pub show_slippage_warning: bool,
}

impl TradeSummary {
    /// Exact decimal rendering of the bound for the text layer
    pub fn amount_display(&self) -> String {
        u128_to_decimal_string(self.amount.quotient, self.amount.currency.decimals())
    }
}

/// What the swap settings panel should render. `None` (from the deriver)
/// means render nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SwapSettingsMessage {
    /// Input validation failed; carries the warning text verbatim
    InputWarning { text: String },
    TradeSummary(TradeSummary),
    /// Blank line keeping the panel height stable while no trade exists
    EmptyPlaceholder,
}

/// Derives the swap settings message from the current trade state.
///
/// Three mutually exclusive states, checked in order: an input warning wins
/// over everything (the trade is ignored entirely), then a present trade
/// produces its worst-case summary, then `show_empty` decides between a
/// placeholder and nothing.
///
/// `slippage_tolerance` is a percentage number (0.5 means 0.5%).
pub fn swap_settings_message(
    input_warning: Option<&str>,
    trade: Option<&Trade>,
    slippage_tolerance: f64,
    show_slippage_warning: bool,
    show_empty: bool,
) -> QuoteArgsResult<Option<SwapSettingsMessage>> {
    if let Some(warning) = input_warning {
        return Ok(Some(SwapSettingsMessage::InputWarning {
            text: warning.to_string(),
        }));
    }

    let Some(trade) = trade else {
        return Ok(show_empty.then_some(SwapSettingsMessage::EmptyPlaceholder));
    };

    let tolerance = slippage_tolerance_to_percent(slippage_tolerance)?;
    let (amount, symbol) = match trade.trade_type {
        TradeType::ExactIn => (
            trade.minimum_amount_out(tolerance)?,
            trade.output_amount.currency.symbol(),
        ),
        TradeType::ExactOut => (
            trade.maximum_amount_in(tolerance)?,
            trade.input_amount.currency.symbol(),
        ),
    };

    Ok(Some(SwapSettingsMessage::TradeSummary(TradeSummary {
        token_symbol: symbol_display_text(symbol),
        amount,
        show_slippage_warning,
    })))
}
