//! Validated aggregate identifiers for stats axes.
//!
//! The wire format names axes with bare strings ("count", "p75", ...). Parse
//! them once at the boundary; everything past this module works with the
//! enum, not string comparisons.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Count,
    P75,
    P99,
    /// Any axis the chart doesn't know about. Dropped before shaping.
    Other,
}

impl Aggregate {
    pub fn parse(axis: &str) -> Self {
        match axis {
            "count" => Aggregate::Count,
            "p75" => Aggregate::P75,
            "p99" => Aggregate::P99,
            _ => Aggregate::Other,
        }
    }

    /// Series label shown in the legend and tooltip, e.g. `count()`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Aggregate::Count => Some("count()"),
            Aggregate::P75 => Some("p75()"),
            Aggregate::P99 => Some("p99()"),
            Aggregate::Other => None,
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Aggregate::Count => Unit::Integer,
            _ => Unit::Duration,
        }
    }
}

/// Display unit for a value: plain integers for counts, milliseconds for
/// percentile latencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Integer,
    Duration,
}

impl Unit {
    /// Recover the unit from a series label. Mirrors the tooltip formatter
    /// dispatch, which only sees the label string.
    pub fn from_label(label: &str) -> Unit {
        match label {
            "count()" => Unit::Integer,
            _ => Unit::Duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_axes() {
        assert_eq!(Aggregate::parse("count"), Aggregate::Count);
        assert_eq!(Aggregate::parse("p75"), Aggregate::P75);
        assert_eq!(Aggregate::parse("p99"), Aggregate::P99);
    }

    #[test]
    fn unknown_axes_fold_to_other() {
        assert_eq!(Aggregate::parse("p50"), Aggregate::Other);
        assert_eq!(Aggregate::parse("avg"), Aggregate::Other);
        assert_eq!(Aggregate::parse(""), Aggregate::Other);
        // Exact match only; no trimming or case folding.
        assert_eq!(Aggregate::parse("Count"), Aggregate::Other);
    }

    #[test]
    fn labels_and_units() {
        assert_eq!(Aggregate::Count.label(), Some("count()"));
        assert_eq!(Aggregate::P99.label(), Some("p99()"));
        assert_eq!(Aggregate::Other.label(), None);

        assert_eq!(Aggregate::Count.unit(), Unit::Integer);
        assert_eq!(Aggregate::P75.unit(), Unit::Duration);

        assert_eq!(Unit::from_label("count()"), Unit::Integer);
        assert_eq!(Unit::from_label("p75()"), Unit::Duration);
    }
}
