use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{LunchError, Result};

/// Quantities a lunch can be bounded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    Calories,
    Protein,
    Fat,
    Carbs,
    Price,
}

/// Whether a bound is given as a whole number or a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Integral,
    Decimal,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integral => f.write_str("int"),
            NumericKind::Decimal => f.write_str("float"),
        }
    }
}

impl Limit {
    /// All limits, in the order they are validated.
    pub const ALL: [Limit; 5] = [
        Limit::Calories,
        Limit::Protein,
        Limit::Fat,
        Limit::Carbs,
        Limit::Price,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Limit::Calories => "calories",
            Limit::Protein => "protein",
            Limit::Fat => "fat",
            Limit::Carbs => "carbs",
            Limit::Price => "price",
        }
    }

    /// Kind of number this limit's bounds must be written as.
    pub fn kind(self) -> NumericKind {
        match self {
            Limit::Price => NumericKind::Decimal,
            _ => NumericKind::Integral,
        }
    }

    pub fn from_name(name: &str) -> Option<Limit> {
        Limit::ALL.into_iter().find(|l| l.name() == name)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed range `[low, high]`.
///
/// Only constructible through [`Interval::integral`] and [`Interval::decimal`],
/// both of which reject inverted or non-finite bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    low: f64,
    high: f64,
    kind: NumericKind,
}

impl Interval {
    pub fn integral(limit: Limit, low: i64, high: i64) -> Result<Self> {
        // Ordered on the integers; large values may collapse once cast
        if high < low {
            return Err(LunchError::RangeInverted(limit.to_string()));
        }
        Self::build(limit, low as f64, high as f64, NumericKind::Integral)
    }

    pub fn decimal(limit: Limit, low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(LunchError::TypeMismatch(format!(
                "{} limits should be finite numbers",
                limit
            )));
        }
        Self::build(limit, low, high, NumericKind::Decimal)
    }

    fn build(limit: Limit, low: f64, high: f64, kind: NumericKind) -> Result<Self> {
        if high < low {
            return Err(LunchError::RangeInverted(limit.to_string()));
        }
        Ok(Self { low, high, kind })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Inclusive containment check.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Copy with the bounds pushed outward by the given amounts.
    pub fn widened(&self, below: f64, above: f64) -> Self {
        Self {
            low: self.low - below.max(0.0),
            high: self.high + above.max(0.0),
            kind: self.kind,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NumericKind::Integral => write!(f, "[{}, {}]", self.low, self.high),
            NumericKind::Decimal => write!(f, "[{:.2}, {:.2}]", self.low, self.high),
        }
    }
}

/// Bounds a lunch's totals must satisfy.
///
/// A set may be partial: limits without an interval are not checked.
/// [`IntervalSet::from_json`] is the strict entry point for untrusted input
/// and requires every limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntervalSet {
    bounds: BTreeMap<Limit, Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with `interval` bound to `limit`, replacing any previous one.
    pub fn with(mut self, limit: Limit, interval: Interval) -> Self {
        self.bounds.insert(limit, interval);
        self
    }

    pub fn get(&self, limit: Limit) -> Option<&Interval> {
        self.bounds.get(&limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Limit, &Interval)> {
        self.bounds.iter().map(|(limit, interval)| (*limit, interval))
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// True when every limit has a bound.
    pub fn is_complete(&self) -> bool {
        Limit::ALL.iter().all(|l| self.bounds.contains_key(l))
    }

    /// Validate a raw JSON mapping of `name -> [low, high]`.
    ///
    /// Checks run in a fixed order, each over every limit before the next:
    /// mapping, presence, pair shape, pair length, numeric kind, ordering.
    pub fn from_json(raw: &Value) -> Result<Self> {
        let map = raw
            .as_object()
            .ok_or_else(|| LunchError::TypeMismatch("intervals must be a mapping".to_string()))?;

        for limit in Limit::ALL {
            if !map.contains_key(limit.name()) {
                return Err(LunchError::MissingKey(limit.name().to_string()));
            }
        }

        let mut pairs = Vec::with_capacity(Limit::ALL.len());
        for limit in Limit::ALL {
            match &map[limit.name()] {
                Value::Array(values) => pairs.push((limit, values)),
                _ => {
                    return Err(LunchError::TypeMismatch(format!(
                        "{} limits should be given as a [low, high] pair",
                        limit
                    )));
                }
            }
        }

        for (limit, values) in &pairs {
            if values.len() != 2 {
                return Err(LunchError::ArityMismatch(format!(
                    "{} limits should have two values, got {}",
                    limit,
                    values.len()
                )));
            }
        }

        for (limit, values) in &pairs {
            if !values.iter().all(|v| is_kind(v, limit.kind())) {
                return Err(LunchError::TypeMismatch(format!(
                    "{} limits should be set as {}",
                    limit,
                    limit.kind()
                )));
            }
        }

        let mut set = IntervalSet::new();
        for (limit, values) in pairs {
            let interval = match limit.kind() {
                NumericKind::Integral => {
                    Interval::integral(limit, as_integral(&values[0]), as_integral(&values[1]))?
                }
                NumericKind::Decimal => Interval::decimal(
                    limit,
                    values[0].as_f64().unwrap_or(f64::NAN),
                    values[1].as_f64().unwrap_or(f64::NAN),
                )?,
            };
            set = set.with(limit, interval);
        }

        Ok(set)
    }

    /// Serialize as the JSON mapping accepted by [`IntervalSet::from_json`].
    pub fn to_json(&self) -> Value {
        let map = self
            .iter()
            .map(|(limit, interval)| {
                let pair = match interval.kind() {
                    NumericKind::Integral => serde_json::json!([
                        interval.low() as i64,
                        interval.high() as i64
                    ]),
                    NumericKind::Decimal => serde_json::json!([interval.low(), interval.high()]),
                };
                (limit.name().to_string(), pair)
            })
            .collect();
        Value::Object(map)
    }
}

fn is_kind(value: &Value, kind: NumericKind) -> bool {
    match kind {
        NumericKind::Integral => value.is_i64() || value.is_u64(),
        NumericKind::Decimal => value.is_f64(),
    }
}

fn as_integral(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|v| v.min(i64::MAX as u64) as i64))
        .unwrap_or_default()
}
