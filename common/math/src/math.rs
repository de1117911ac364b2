//! Exact rational arithmetic shared by every crate of the workspace.
//!
//! Balances, prices and risk parameters are all `BigRational`s. Nothing in
//! the model goes through floating point except [`format_rational`] when a
//! human asks for an approximate rendering.

use core::{fmt, str::FromStr};

use common_constants::DISPLAY_SIGNIFICANT_DIGITS;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

pub type Rational = BigRational;

pub fn to_rational(value: u64) -> Rational {
    Rational::from_integer(BigInt::from(value))
}

/// Builds `numerator / denominator`.
///
/// # Panics
/// - If `denominator` is zero. Only meant for constants and tests.
pub fn ratio(numerator: u64, denominator: u64) -> Rational {
    Rational::new(BigInt::from(numerator), BigInt::from(denominator))
}

/// Turns one of the `(numerator, denominator)` constants into a rational.
pub fn from_pair(pair: (u64, u64)) -> Rational {
    ratio(pair.0, pair.1)
}

pub fn is_strictly_positive(value: &Rational) -> bool {
    value.is_positive()
}

/// Returns the looked-up value, or zero when the lookup missed.
pub fn or_zero(value: Option<&Rational>) -> Rational {
    value.cloned().unwrap_or_else(Rational::zero)
}

/// A rational extended with `+∞`.
///
/// Collateral ratio and health factor are infinite for an address without
/// debt. The derived ordering places every finite value below `Infinite`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtendedRational {
    Finite(Rational),
    Infinite,
}

impl ExtendedRational {
    pub fn one() -> Self {
        ExtendedRational::Finite(Rational::one())
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ExtendedRational::Infinite)
    }

    /// Scales a finite value; `+∞` times a non-negative factor stays `+∞`.
    pub fn scale(&self, factor: &Rational) -> Self {
        match self {
            ExtendedRational::Finite(value) => ExtendedRational::Finite(value * factor),
            ExtendedRational::Infinite => ExtendedRational::Infinite,
        }
    }
}

impl From<Rational> for ExtendedRational {
    fn from(value: Rational) -> Self {
        ExtendedRational::Finite(value)
    }
}

impl fmt::Display for ExtendedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedRational::Finite(value) => write!(f, "{}", value),
            ExtendedRational::Infinite => f.write_str("inf"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRationalError {
    input: String,
}

impl ParseRationalError {
    fn new(input: &str) -> Self {
        ParseRationalError {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rational number `{}`", self.input)
    }
}

impl std::error::Error for ParseRationalError {}

/// Parses an exact rational from an integer (`10`), a fraction (`2/3`) or a
/// decimal (`3.25`). Surrounding whitespace is ignored.
pub fn parse_rational(input: &str) -> Result<Rational, ParseRationalError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseRationalError::new(input));
    }

    if let Some((numerator, denominator)) = trimmed.split_once('/') {
        let numerator = parse_integer(numerator.trim(), input)?;
        let denominator = parse_integer(denominator.trim(), input)?;
        if denominator.is_zero() {
            return Err(ParseRationalError::new(input));
        }
        return Ok(Rational::new(numerator, denominator));
    }

    if let Some((whole, fraction)) = trimmed.split_once('.') {
        let negative = whole.starts_with('-');
        let whole_digits = whole.strip_prefix(['-', '+']).unwrap_or(whole);
        if whole_digits.is_empty() && fraction.is_empty() {
            return Err(ParseRationalError::new(input));
        }
        if !whole_digits.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseRationalError::new(input));
        }

        let whole_value = if whole_digits.is_empty() {
            BigInt::zero()
        } else {
            parse_integer(whole_digits, input)?
        };
        let fraction_value = if fraction.is_empty() {
            BigInt::zero()
        } else {
            parse_integer(fraction, input)?
        };
        let scale = num_traits::pow(BigInt::from(10u32), fraction.len());
        let magnitude = Rational::new(whole_value * &scale + fraction_value, scale);
        return Ok(if negative { -magnitude } else { magnitude });
    }

    Ok(Rational::from_integer(parse_integer(trimmed, input)?))
}

fn parse_integer(digits: &str, input: &str) -> Result<BigInt, ParseRationalError> {
    BigInt::from_str(digits).map_err(|_| ParseRationalError::new(input))
}

/// Renders a rational for humans.
///
/// `precise` prints `n/d` (or `n` for integers). Otherwise integers are
/// printed exactly and everything else with up to six significant digits,
/// trailing zeros trimmed.
pub fn format_rational(value: &Rational, precise: bool) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }
    if precise {
        return format!("{}/{}", value.numer(), value.denom());
    }

    // numerator and denominator may each overflow f64 while their ratio does not
    let Some(approx) = value.to_f64().filter(|approx| approx.is_finite()) else {
        return format!("{}/{}", value.numer(), value.denom());
    };
    format_significant(approx, DISPLAY_SIGNIFICANT_DIGITS)
}

fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= digits as i32 {
        let rendered = format!("{:.*e}", digits.saturating_sub(1), value);
        return match rendered.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
            None => rendered,
        };
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}

/// Serde adapter storing a rational as its textual form (`"2/3"`, `"0.12"`).
pub mod rational_str {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::{parse_rational, Rational};

    pub fn serialize<S: Serializer>(value: &Rational, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rational, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_rational(&raw).map_err(D::Error::custom)
    }
}

/// Serde adapter for maps whose values are rationals in textual form.
pub mod rational_map {
    use std::collections::BTreeMap;

    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::{parse_rational, Rational};

    pub fn serialize<K, S>(map: &BTreeMap<K, Rational>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize + Ord,
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(key, value)| (key, value.to_string())))
    }

    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<BTreeMap<K, Rational>, D::Error>
    where
        K: Deserialize<'de> + Ord,
        D: Deserializer<'de>,
    {
        BTreeMap::<K, String>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, raw)| {
                parse_rational(&raw)
                    .map(|value| (key, value))
                    .map_err(D::Error::custom)
            })
            .collect()
    }
}
