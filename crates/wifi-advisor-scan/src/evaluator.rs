//! Security evaluation and connect recommendation.
//!
//! Turns raw scan records into a security level, a justification and a
//! binary recommendation. Channel interference depends on the whole batch,
//! so evaluation runs in two passes: the first counts records per channel,
//! the second classifies each record against those counts.
//!
//! The evaluator is total. Missing signal or channel values are treated as
//! unknown, an empty batch is left as is, and re-evaluating a batch
//! overwrites the previous assessment with an identical one.

use std::collections::HashMap;

use crate::domain::{
    Assessment, AuthScheme, InterferenceRisk, NetworkRecord, Recommendation, ScanBatch,
    SecurityClass, SecurityLevel,
};

/// Signal percentage below which a secure network is flagged as weak.
pub const WEAK_SIGNAL_THRESHOLD_PCT: u8 = 30;

/// Minimum signal percentage for a recommendation.
pub const RECOMMEND_SIGNAL_THRESHOLD_PCT: u8 = 50;

/// Channel usage above this count is high interference.
pub const INTERFERENCE_THRESHOLD: usize = 3;

/// Evaluate a batch and hand it back.
pub fn evaluate(mut batch: ScanBatch) -> ScanBatch {
    evaluate_in_place(&mut batch);
    batch
}

/// Attach an [`Assessment`] to every record of `batch`.
///
/// Only `assessment` is written; raw fields are left untouched.
pub fn evaluate_in_place(batch: &mut ScanBatch) {
    let usage: HashMap<Option<String>, usize> = batch
        .channel_counts()
        .into_iter()
        .map(|(channel, count)| (channel.map(str::to_owned), count))
        .collect();

    for record in batch.records_mut() {
        let channel_usage = usage.get(&record.channel).copied().unwrap_or(1);
        record.assessment = Some(assess(record, channel_usage));
    }
}

/// Interference risk for a given channel usage count.
pub fn interference_risk(channel_usage: usize) -> InterferenceRisk {
    if channel_usage > INTERFERENCE_THRESHOLD {
        InterferenceRisk::High
    } else {
        InterferenceRisk::Low
    }
}

/// Classify a single record, given how many batch records share its channel.
pub fn assess(record: &NetworkRecord, channel_usage: usize) -> Assessment {
    let (mut class, mut reason) = base_classification(&record.auth);

    if class == SecurityClass::Secure
        && record
            .signal_pct
            .is_some_and(|pct| pct < WEAK_SIGNAL_THRESHOLD_PCT)
    {
        class = SecurityClass::SecureWeakSignal;
        reason = format!("secure encryption, but weak signal (< {WEAK_SIGNAL_THRESHOLD_PCT}%)");
    }

    let risk = interference_risk(channel_usage);
    let mut level = SecurityLevel {
        class,
        high_interference: false,
    };
    if risk == InterferenceRisk::High && level.is_secure_family() {
        level.high_interference = true;
        reason = format!(
            "{reason}, but high interference (channel {} is used by {channel_usage} networks)",
            record.channel_label()
        );
    }

    let recommended = class == SecurityClass::Secure
        && record
            .signal_pct
            .is_some_and(|pct| pct >= RECOMMEND_SIGNAL_THRESHOLD_PCT)
        && risk == InterferenceRisk::Low;

    let (recommendation, recommendation_reason) = if recommended {
        (
            Recommendation::Recommended,
            format!(
                "strong encryption ({}), strong signal ({}), low interference",
                record.auth,
                record.signal_label()
            ),
        )
    } else {
        (Recommendation::NotRecommended, reason.clone())
    };

    Assessment {
        security_level: level,
        security_reason: reason,
        channel_usage,
        interference_risk: risk,
        recommendation,
        recommendation_reason,
    }
}

fn base_classification(auth: &AuthScheme) -> (SecurityClass, String) {
    let (class, reason) = match auth.canonical() {
        AuthScheme::Wpa2Personal | AuthScheme::Wpa3Personal => {
            (SecurityClass::Secure, "strong encryption")
        }
        AuthScheme::Open => (SecurityClass::Insecure, "no encryption (open)"),
        AuthScheme::Wep => (SecurityClass::Insecure, "outdated encryption (WEP)"),
        AuthScheme::Other(_) => (SecurityClass::Unknown, "unknown encryption"),
    };
    (class, reason.to_owned())
}
