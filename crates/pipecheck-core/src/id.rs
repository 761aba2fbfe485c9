use std::fmt;

use serde_json::{Number, Value};

use crate::error::ParseError;

/// Opaque node identifier.
///
/// Built from any scalar JSON value. Numbers compare by exact value, so `1`,
/// `1.0` and `true` name the same vertex, while `"1"` stays distinct from `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(Key);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    Null,
    Int(i128),
    // Canonical decimal digits of an integer outside the i128 range.
    BigInt(String),
    // Bit pattern of a non-integral f64.
    Float(u64),
    Text(String),
}

impl NodeId {
    /// Converts the JSON value found under `field` into an identifier.
    pub fn from_value(field: &'static str, value: &Value) -> Result<Self, ParseError> {
        let key = match value {
            Value::Null => Key::Null,
            Value::Bool(b) => Key::Int(i128::from(*b)),
            Value::Number(n) => number_key(n),
            Value::String(s) => Key::Text(s.clone()),
            Value::Array(_) => return Err(ParseError::UnhashableId { field, kind: "array" }),
            Value::Object(_) => return Err(ParseError::UnhashableId { field, kind: "object" }),
        };
        Ok(Self(key))
    }
}

/// Integer literals keep their exact digits; only literals with a fraction
/// or exponent go through f64.
fn number_key(n: &Number) -> Key {
    let text = n.to_string();
    if let Ok(i) = text.parse::<i128>() {
        return Key::Int(i);
    }
    if !text.contains(&['.', 'e', 'E'][..]) {
        return Key::BigInt(text);
    }

    float_key(n.as_f64().unwrap_or(f64::NAN))
}

fn float_key(f: f64) -> Key {
    if f.fract() != 0.0 {
        return Key::Float(f.to_bits());
    }
    if f >= i128::MIN as f64 && f < i128::MAX as f64 {
        Key::Int(f as i128)
    } else {
        Key::BigInt(format!("{:.0}", f))
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(Key::Text(s.to_string()))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Key::Null => f.write_str("null"),
            Key::Int(i) => write!(f, "{i}"),
            Key::BigInt(digits) => f.write_str(digits),
            Key::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Key::Text(s) => f.write_str(s),
        }
    }
}
