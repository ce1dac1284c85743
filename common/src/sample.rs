use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value reported for metrics whose payload lives in the metadata array
pub const ARRAY_SENTINEL: f64 = -1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<f64>),
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Float(value as f64),
        }
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<f64>> for MetadataValue {
    fn from(value: Vec<f64>) -> Self {
        Self::Array(value)
    }
}

pub type Metadata = BTreeMap<String, MetadataValue>;

/// Anything that can describe the configuration a sample was produced under
pub trait MetadataSource {
    fn metadata(&self) -> Metadata;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Tps,
    Ms,
    Qps,
    Seconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self {
            Unit::Tps => "tps",
            Unit::Ms => "ms",
            Unit::Qps => "qps",
            Unit::Seconds => "seconds",
        };
        write!(f, "{unit}")
    }
}

/// A single published metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub metric: String,
    pub value: f64,
    pub unit: Unit,
    pub metadata: Metadata,
}

impl Sample {
    pub fn new(metric: impl Into<String>, value: f64, unit: Unit, metadata: Metadata) -> Self {
        Self {
            metric: metric.into(),
            value,
            unit,
            metadata,
        }
    }
}
