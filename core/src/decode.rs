//! Decoding of raw share entries into field points.
//!
//! Test vectors publish a share's ordinate either as a digit string in an
//! explicit base or as a named integer function over decimal operands.
//! Malformed entries are skip signals, not errors: every decoder returns
//! `Option` and the caller decides whether the gap matters.

use num_bigint::BigUint;
use num_integer::Integer;
use serde::Deserialize;

use crate::shamir::Share;

/// Inclusive bounds on the digit bases accepted by [`decode_value`].
pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Raw ordinate encoding as it appears in a test vector.
///
/// The two layouts carry disjoint keys, so an untagged enum tells them
/// apart during deserialization.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Radix { base: String, value: String },
    Function {
        function: String,
        operands: Vec<String>,
    },
}

/// Decode a raw ordinate into an integer.
///
/// `None` covers every malformed input: a base outside 2..=36, digits
/// invalid for the base, an unknown function name, or an operand list
/// shorter than the function requires.
pub fn decode_value(raw: &RawValue) -> Option<BigUint> {
    match raw {
        RawValue::Radix { base, value } => {
            let base: u32 = base.trim().parse().ok()?;
            if !(MIN_BASE..=MAX_BASE).contains(&base) {
                return None;
            }
            parse_digits(value, base)
        }
        RawValue::Function { function, operands } => {
            evaluate_function(function, operands)
        }
    }
}

/// Decode one raw share entry: a decimal abscissa plus its encoded
/// ordinate. `None` when either half is malformed.
pub fn decode_share(x: &str, raw: &RawValue) -> Option<Share> {
    let x = parse_digits(x, 10)?;
    let y = decode_value(raw)?;
    Some(Share::new(x, y))
}

/// Digits in the given base, upper- and lower-case alike. Surrounding
/// whitespace is tolerated; anything else malformed is `None`.
fn parse_digits(text: &str, base: u32) -> Option<BigUint> {
    BigUint::parse_bytes(text.trim().as_bytes(), base)
}

fn evaluate_function(name: &str, operands: &[String]) -> Option<BigUint> {
    let values = operands
        .iter()
        .map(|operand| parse_digits(operand, 10))
        .collect::<Option<Vec<BigUint>>>()?;

    match name.trim().to_ascii_lowercase().as_str() {
        "sum" if !values.is_empty() => Some(values.into_iter().sum()),
        "product" if !values.is_empty() => Some(values.into_iter().product()),
        "gcd" if values.len() >= 2 => {
            values.into_iter().reduce(|acc, value| acc.gcd(&value))
        }
        "lcm" if values.len() >= 2 => {
            values.into_iter().reduce(|acc, value| acc.lcm(&value))
        }
        _ => None,
    }
}
