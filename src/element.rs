use std::{cmp::Ordering, convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A dynamically typed sort element.
///
/// Integers and floats compare exactly by numeric value, without rounding the
/// integer to `f64`. Strings compare lexicographically, but only with other
/// strings. A string next to a number, or a `NaN`, cannot be ordered, so
/// sorting such a list fails with [`crate::InvalidInputError`].
///
/// Deserializes from a JSON number or string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Float(f64),
    Str(String),
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Exact `a <=> b`. `None` only for a `NaN`.
fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    // 2^63, the first float above every i64
    const I64_END: f64 = 9_223_372_036_854_775_808.0;
    if b.is_nan() {
        return None;
    }
    if b >= I64_END {
        return Some(Ordering::Less);
    }
    if b < -I64_END {
        return Some(Ordering::Greater);
    }
    let whole = b.trunc();
    match a.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(b - whole)),
        ord => Some(ord),
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Parses an integer if possible, then a float, and falls back to a string.
impl FromStr for Element {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        if let Ok(v) = s.parse::<f64>() {
            return Ok(Self::Float(v));
        }
        Ok(Self::Str(s.to_owned()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // Keep the decimal point so the output parses back as a float
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Element {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for Element {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Element {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
