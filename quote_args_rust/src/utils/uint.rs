use crate::error::{Error, QuoteArgsResult};
use error_stack::report;
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

/// Computes `(value * multiplier) / divisor` with a 256-bit intermediate so
/// the product cannot overflow. `round_up` bumps the result by one when the
/// division truncates.
pub fn mul_div(
    value: u128,
    multiplier: u128,
    divisor: u128,
    round_up: bool,
) -> QuoteArgsResult<u128> {
    if divisor == 0 {
        return Err(report!(Error::Unknown).attach_printable("Dividing by zero"));
    }
    let value = U256::from(value);
    let multiplier = U256::from(multiplier);
    let divisor = U256::from(divisor);

    let product = value * multiplier;
    let mut result = product / divisor;
    if round_up && product % divisor != U256::zero() {
        result += U256::from(1);
    }

    if result.bits() > 128 {
        return Err(report!(Error::Unknown).attach_printable("Result too large to fit in u128"));
    }

    Ok(result.as_u128())
}
