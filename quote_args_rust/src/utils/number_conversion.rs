use crate::error::{Error, QuoteArgsResult};
use error_stack::{ResultExt, report};

/// Parses a human decimal string ("123.456789") into base units at the given
/// decimal precision. Extra fractional digits beyond the precision are cut.
pub fn decimal_string_to_u128(s: &str, decimals: u8) -> QuoteArgsResult<u128> {
    let decimals: usize = decimals.into();
    let mut parts = s.split('.');

    let integer_part = parts
        .next()
        .unwrap_or("0")
        .parse::<u128>()
        .change_context(Error::ParseError)?;

    let decimal_part = match parts.next() {
        Some(decimal_str) if !decimal_str.is_empty() => {
            let trimmed = if decimal_str.len() > decimals {
                &decimal_str[..decimals]
            } else {
                decimal_str
            };
            let decimal_value = trimmed.parse::<u128>().change_context(Error::ParseError)?;
            let scaling_factor = 10u128.pow((decimals - trimmed.len()) as u32);
            decimal_value * scaling_factor
        }
        _ => 0,
    };

    if parts.next().is_some() {
        return Err(report!(Error::ParseError)
            .attach_printable(format!("Malformed decimal string: {s}")));
    }

    integer_part
        .checked_mul(10u128.pow(decimals as u32))
        .and_then(|scaled| scaled.checked_add(decimal_part))
        .ok_or(report!(Error::ParseError).attach_printable("Amount overflows u128"))
}

/// Renders a base-unit amount as an exact decimal string at the given
/// precision. Trailing fractional zeros are trimmed.
pub fn u128_to_decimal_string(value: u128, decimals: u8) -> String {
    let divisor = 10u128.pow(decimals as u32);
    let whole = value / divisor;
    let fraction = value % divisor;

    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{fraction:0width$}", width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    format!("{whole}.{fraction}")
}
