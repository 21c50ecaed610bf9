use routing_models::models::amount::CurrencyAmount;
use routing_models::models::percent::Percent;
use routing_models::models::types::TradeType;
use serde::{Deserialize, Serialize};

use crate::error::QuoteArgsResult;
use crate::utils::mul_div;

/// A computed trade between two currencies.
///
/// For an exact IN trade the input amount is fixed and the output amount is
/// the quote; for an exact OUT trade it is the other way around. The
/// worst-case bounds below adjust the quoted side only, the fixed side is
/// returned untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_type: TradeType,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
}

impl Trade {
    pub fn new(
        trade_type: TradeType,
        input_amount: CurrencyAmount,
        output_amount: CurrencyAmount,
    ) -> Self {
        Self {
            trade_type,
            input_amount,
            output_amount,
        }
    }

    /// Least amount of the output currency that can be received under the
    /// given slippage tolerance: `amount_out * den / (den + num)`, floored.
    pub fn minimum_amount_out(&self, slippage_tolerance: Percent) -> QuoteArgsResult<CurrencyAmount> {
        match self.trade_type {
            // Exact OUT fixes the output side, nothing to adjust
            TradeType::ExactOut => Ok(self.output_amount.clone()),
            TradeType::ExactIn => {
                let adjusted = mul_div(
                    self.output_amount.quotient,
                    slippage_tolerance.denominator,
                    slippage_tolerance.denominator + slippage_tolerance.numerator,
                    false,
                )?;
                Ok(CurrencyAmount::new(
                    self.output_amount.currency.clone(),
                    adjusted,
                ))
            }
        }
    }

    /// Most of the input currency that can be spent under the given slippage
    /// tolerance: `amount_in * (den + num) / den`, floored.
    pub fn maximum_amount_in(&self, slippage_tolerance: Percent) -> QuoteArgsResult<CurrencyAmount> {
        match self.trade_type {
            // Exact IN fixes the input side, nothing to adjust
            TradeType::ExactIn => Ok(self.input_amount.clone()),
            TradeType::ExactOut => {
                let adjusted = mul_div(
                    self.input_amount.quotient,
                    slippage_tolerance.denominator + slippage_tolerance.numerator,
                    slippage_tolerance.denominator,
                    false,
                )?;
                Ok(CurrencyAmount::new(
                    self.input_amount.currency.clone(),
                    adjusted,
                ))
            }
        }
    }
}
