use crate::error::{Error, QuoteArgsResult};
use error_stack::report;
use routing_models::models::percent::Percent;
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a slippage tolerance given as a percentage number (0.5 means
/// 0.5%) into an exact [`Percent`] fraction over basis points.
///
/// The numeric input is scaled to basis points through `Decimal` and rounded
/// half away from zero, so 0.5 becomes exactly 50/10_000. Amount math never
/// touches the float itself.
pub fn slippage_tolerance_to_percent(slippage_tolerance: f64) -> QuoteArgsResult<Percent> {
    if !slippage_tolerance.is_finite() {
        return Err(report!(Error::ParseError).attach_printable("Slippage tolerance is not finite"));
    }
    if slippage_tolerance < 0.0 {
        return Err(report!(Error::ParseError).attach_printable("Slippage tolerance is negative"));
    }

    let bps = Decimal::from_f64(slippage_tolerance)
        .ok_or(report!(Error::ParseError).attach_printable("Slippage tolerance is not a number"))?
        * Decimal::from(100u32);
    let bps = bps
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
        .ok_or(report!(Error::ParseError).attach_printable("Slippage tolerance is too large"))?;

    Ok(Percent::from_basis_points(bps))
}
