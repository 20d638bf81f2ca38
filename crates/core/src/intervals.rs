//! Interval calculation between consecutive award wins.
//!
//! For each producer the distinct winning years are sorted and every adjacent
//! pair becomes a [`ProducerInterval`]. The summary keeps every interval equal
//! to the global minimum and every interval equal to the global maximum, so
//! ties are reported rather than broken.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Gap between two consecutive distinct winning years of one producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: u32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// Intervals at the global minimum and global maximum of one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizedAwards {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl SummarizedAwards {
    /// Summary with no intervals in either set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether neither set holds an interval.
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

// ── Calculation ──────────────────────────────────────────────────────

/// Intervals for a single producer, in ascending year order.
///
/// Repeated years collapse to one entry. Fewer than two distinct years
/// yields nothing. The gap is computed without overflow for any pair of
/// `i32` years.
pub fn producer_intervals(producer: &str, years: &[i32]) -> Vec<ProducerInterval> {
    let mut years = years.to_vec();
    years.sort_unstable();
    years.dedup();

    years
        .windows(2)
        .map(|pair| ProducerInterval {
            producer: producer.to_string(),
            interval: pair[1].abs_diff(pair[0]),
            previous_win: pair[0],
            following_win: pair[1],
        })
        .collect()
}

/// Flatten per-producer intervals across the whole win mapping.
pub fn compute_intervals(wins: &BTreeMap<String, Vec<i32>>) -> Vec<ProducerInterval> {
    wins.iter()
        .flat_map(|(producer, years)| producer_intervals(producer, years))
        .collect()
}

/// Keep the intervals at the global minimum and maximum.
///
/// Order within each set follows the order of `intervals`.
pub fn summarize(intervals: &[ProducerInterval]) -> SummarizedAwards {
    let (Some(min), Some(max)) = (
        intervals.iter().map(|i| i.interval).min(),
        intervals.iter().map(|i| i.interval).max(),
    ) else {
        return SummarizedAwards::empty();
    };

    let with_gap = |gap: u32| -> Vec<ProducerInterval> {
        intervals
            .iter()
            .filter(|i| i.interval == gap)
            .cloned()
            .collect()
    };

    SummarizedAwards {
        min: with_gap(min),
        max: with_gap(max),
    }
}
