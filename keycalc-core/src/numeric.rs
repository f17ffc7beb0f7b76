//! Numeric text conversion at the input and output boundary
//!
//! Literal parsing is a plain digit accumulator: the lexer has already
//! checked the literal, so nothing is validated again here. Results are
//! rounded to five decimals and trimmed to at least one fractional digit.
//! The integer part is printed through `u128`, which holds every finite
//! `f32` exactly.

use core::fmt::Write;

use heapless::String;

use crate::error::CalcError;
use crate::{MAX_RESULT_LEN, RESULT_DECIMALS};

/// Formatted result text
pub type ResultText = String<MAX_RESULT_LEN>;

/// Added before truncating to five decimals
const ROUNDING_EPSILON: f32 = 0.000_005;

/// 10^RESULT_DECIMALS
const FRACTION_SCALE: f32 = 100_000.0;

/// Convert a lexer-validated literal to a float
///
/// Accepts an optional leading `-`, digits and at most one `.`. No exponent
/// syntax. A bare `-` or `.` yields zero.
pub fn parse_number(text: &str) -> f32 {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut integer = 0.0f32;
    let mut fraction = 0.0f32;
    let mut divisor = 10.0f32;
    let mut after_dot = false;

    for byte in digits.bytes() {
        match byte {
            b'.' => after_dot = true,
            b'0'..=b'9' => {
                let digit = f32::from(byte - b'0');
                if after_dot {
                    fraction += digit / divisor;
                    divisor *= 10.0;
                } else {
                    integer = integer * 10.0 + digit;
                }
            }
            _ => {}
        }
    }

    let value = integer + fraction;
    if negative {
        -value
    } else {
        value
    }
}

/// Format a result with five-decimal rounding and trailing-zero trim
///
/// `7.0` formats as `"7.0"`, `2.5` as `"2.5"`, `1/3` as `"0.33333"`.
/// Only values that are not finite fail, with [`CalcError::Overflow`].
pub fn format_number(value: f32) -> Result<ResultText, CalcError> {
    if !value.is_finite() {
        warn!("result is not finite");
        return Err(CalcError::Overflow);
    }

    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value } + ROUNDING_EPSILON;

    let integer = magnitude as u128;
    let fraction = ((magnitude - integer as f32) * FRACTION_SCALE) as u32;
    let fraction = fraction.min(FRACTION_SCALE as u32 - 1);

    let mut text = ResultText::new();
    let sign = if negative { "-" } else { "" };
    write!(
        text,
        "{sign}{integer}.{fraction:0width$}",
        width = RESULT_DECIMALS
    )
    .map_err(|_| CalcError::Overflow)?;

    trim_trailing_zeros(&mut text);
    Ok(text)
}

/// Strip trailing `0`s, keeping one digit after the point
fn trim_trailing_zeros(text: &mut ResultText) {
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
}
