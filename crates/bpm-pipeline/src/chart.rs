//! Chart-ready data points

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One `{name, value}` pair of an aggregation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Bucket label
    pub name: String,
    /// Bucket count
    pub value: usize,
}

impl ChartPoint {
    /// Create point
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Count occurrences per key, keeping first-seen key order
///
/// Only keys that occur are emitted, so no bucket is ever zero.
pub(crate) fn count_by<I, K>(keys: I) -> Vec<ChartPoint>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for key in keys {
        *counts.entry(key.into()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(name, value)| ChartPoint { name, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_by_keeps_first_seen_order() {
        let points = count_by(["b", "a", "b", "c", "b"]);
        assert_eq!(
            points,
            vec![
                ChartPoint::new("b", 3),
                ChartPoint::new("a", 1),
                ChartPoint::new("c", 1),
            ]
        );
    }

    #[test]
    fn count_by_empty() {
        assert!(count_by(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn serializes_as_name_value() {
        let json = serde_json::to_value(ChartPoint::new("High", 4)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "High", "value": 4 }));
    }
}
