//! Scan batch value object.
//!
//! A `ScanBatch` holds every record produced by one scan, in scan order. It
//! is the unit over which channel interference is counted, so records are
//! never evaluated in isolation.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::record::NetworkRecord;

/// Ordered records from a single scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScanBatch {
    records: Vec<NetworkRecord>,
}

impl ScanBatch {
    pub fn new(records: Vec<NetworkRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NetworkRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [NetworkRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetworkRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<NetworkRecord> {
        self.records
    }

    /// First record with the given SSID, in scan order.
    pub fn find_by_ssid(&self, ssid: &str) -> Option<&NetworkRecord> {
        self.records.iter().find(|r| r.ssid == ssid)
    }

    /// Count of records per channel value. Records without a channel are
    /// counted together under `None`.
    pub fn channel_counts(&self) -> HashMap<Option<&str>, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            *counts.entry(record.channel.as_deref()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of records on `channel`.
    pub fn channel_usage(&self, channel: Option<&str>) -> usize {
        self.records
            .iter()
            .filter(|r| r.channel.as_deref() == channel)
            .count()
    }

    /// Number of records the evaluator recommended.
    pub fn recommended_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_recommended()).count()
    }
}

impl From<Vec<NetworkRecord>> for ScanBatch {
    fn from(records: Vec<NetworkRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<NetworkRecord> for ScanBatch {
    fn from_iter<I: IntoIterator<Item = NetworkRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ScanBatch {
    type Item = NetworkRecord;
    type IntoIter = std::vec::IntoIter<NetworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScanBatch {
    type Item = &'a NetworkRecord;
    type IntoIter = std::slice::Iter<'a, NetworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
