//! Tag metadata value objects
//!
//! A tag is a named bag of scalar attributes attached to a component. The
//! attribute values form a closed variant type with explicit typed accessors,
//! so callers never guess at how a value should be interpreted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Value Object: Tag Attribute Value
///
/// Scalar value carried by a tag attribute.
///
/// ## Example
///
/// ```rust
/// use tagwire_domain::value_objects::TagValue;
///
/// use tagwire_domain::value_objects::Order;
///
/// assert_eq!(TagValue::from("10").as_order(), Some(Order::Integer(10)));
/// assert_eq!(TagValue::from("yes").as_bool(), Some(true));
/// assert_eq!(TagValue::from(false).to_string(), "false");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Boolean flag
    Boolean(bool),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Free-form string
    String(String),
}

impl TagValue {
    /// Interpret the value as a boolean flag
    ///
    /// Integers are true when non-zero. Strings accept `true`, `1`, `yes`,
    /// `on` and `false`, `0`, `no`, `off` or the empty string, ignoring case.
    /// Returns `None` for anything else.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Integer(i) => Some(*i != 0),
            Self::Float(_) => None,
            Self::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" | "" => Some(false),
                _ => None,
            },
        }
    }

    /// Interpret the value as a numeric order
    ///
    /// Numbers and numeric strings yield their value; non-finite values and
    /// everything else yield `None`.
    pub fn as_order(&self) -> Option<Order> {
        match self {
            Self::Integer(i) => Some(Order::Integer(*i)),
            Self::Float(f) => Order::from_float(*f),
            Self::String(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(i) => Some(Order::Integer(i)),
                    Err(_) => Order::from_float(s.parse::<f64>().ok()?),
                }
            }
            Self::Boolean(_) => None,
        }
    }

    /// Borrow the value when it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Lower bound of the `i64` range as a float (-2^63)
const I64_MIN_AS_FLOAT: f64 = -9_223_372_036_854_775_808.0;

/// Value Object: Order
///
/// Exact numeric `order` attribute value. Integers compare as integers, so
/// distinct orders never collapse into one group however large they are.
/// Integral floats inside the `i64` range are stored as integers, which also
/// folds `-0.0` into `0`.
///
/// ## Example
///
/// ```rust
/// use tagwire_domain::value_objects::Order;
///
/// assert_eq!(Order::from_float(3.0), Some(Order::Integer(3)));
/// assert!(Order::Integer(1) < Order::Float(1.5));
/// assert!(Order::Integer(9_007_199_254_740_992) < Order::Integer(9_007_199_254_740_993));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Order {
    /// Integral order
    Integer(i64),
    /// Fractional order, or integral order outside the `i64` range
    Float(f64),
}

impl Order {
    /// Build an order from a float, `None` when it is not finite
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn from_float(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value.fract() == 0.0 && (I64_MIN_AS_FLOAT..-I64_MIN_AS_FLOAT).contains(&value) {
            return Some(Self::Integer(value as i64));
        }
        Some(Self::Float(value))
    }
}

/// Exact comparison of an integer with a float that is either fractional or
/// outside the `i64` range
#[allow(clippy::cast_precision_loss)]
fn compare_integer_float(i: i64, f: f64) -> Ordering {
    if f >= -I64_MIN_AS_FLOAT {
        Ordering::Less
    } else if f < I64_MIN_AS_FLOAT {
        Ordering::Greater
    } else {
        // A fractional f64 is below 2^53 in magnitude and never equals a
        // rounded integer, so the rounded comparison is exact.
        (i as f64).total_cmp(&f)
    }
}

impl Ord for Order {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Float(b)) => compare_integer_float(*a, *b),
            (Self::Float(a), Self::Integer(b)) => compare_integer_float(*b, *a).reverse(),
        }
    }
}

impl PartialOrd for Order {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Order {}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Value Object: Tag
///
/// A named, insertion-ordered set of attributes attached to a component.
/// A component may carry several tags with the same name.
///
/// ## Example
///
/// ```rust
/// use tagwire_domain::value_objects::{Tag, TagValue};
///
/// let tag = Tag::new("app.handler").with("alias", "mail").with("order", 10);
/// assert_eq!(tag.name(), "app.handler");
/// assert_eq!(tag.get("alias"), Some(&TagValue::from("mail")));
/// assert!(tag.get("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    name: String,
    #[serde(default)]
    attributes: IndexMap<String, TagValue>,
}

impl Tag {
    /// Create a tag without attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Create a tag from an attribute list
    pub fn with_attributes<I, K, V>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TagValue>,
    {
        Self {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Add an attribute, replacing any previous value under the same name
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute
    pub fn get(&self, attribute: &str) -> Option<&TagValue> {
        self.attributes.get(attribute)
    }

    /// Whether the attribute is present
    pub fn contains(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}
