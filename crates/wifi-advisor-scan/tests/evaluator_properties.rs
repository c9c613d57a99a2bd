//! Property tests for the security evaluator

use proptest::prelude::*;

use wifi_advisor_scan::evaluator::{
    evaluate, INTERFERENCE_THRESHOLD, RECOMMEND_SIGNAL_THRESHOLD_PCT, WEAK_SIGNAL_THRESHOLD_PCT,
};
use wifi_advisor_scan::{AuthScheme, NetworkRecord, ScanBatch, SecurityClass};

fn auth_strategy() -> impl Strategy<Value = AuthScheme> {
    prop_oneof![
        Just(AuthScheme::Wpa2Personal),
        Just(AuthScheme::Wpa3Personal),
        Just(AuthScheme::Open),
        Just(AuthScheme::Wep),
        Just(AuthScheme::unknown()),
        "[A-Z]{3}-Enterprise".prop_map(AuthScheme::Other),
    ]
}

fn record_strategy() -> impl Strategy<Value = NetworkRecord> {
    (
        "[a-z]{1,8}",
        auth_strategy(),
        proptest::option::of(0u8..=100),
        proptest::option::of(prop_oneof![Just("1"), Just("6"), Just("11"), Just("36")]),
    )
        .prop_map(|(ssid, auth, signal, channel)| {
            let mut record = NetworkRecord::new(ssid).with_auth(auth);
            record.signal_pct = signal;
            record.channel = channel.map(str::to_owned);
            record
        })
}

fn batch_strategy() -> impl Strategy<Value = ScanBatch> {
    proptest::collection::vec(record_strategy(), 0..12).prop_map(ScanBatch::new)
}

proptest! {
    #[test]
    fn prop_evaluation_is_idempotent(batch in batch_strategy()) {
        let once = evaluate(batch);
        let twice = evaluate(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_raw_fields_are_untouched(batch in batch_strategy()) {
        let evaluated = evaluate(batch.clone());
        prop_assert_eq!(evaluated.len(), batch.len());
        for (before, after) in batch.iter().zip(evaluated.iter()) {
            let mut stripped = after.clone();
            stripped.assessment = None;
            prop_assert_eq!(before, &stripped);
        }
    }

    #[test]
    fn prop_insecure_and_unknown_are_never_recommended(batch in batch_strategy()) {
        for record in evaluate(batch).iter() {
            let assessment = record.assessment.as_ref().unwrap();
            if !matches!(record.auth, AuthScheme::Wpa2Personal | AuthScheme::Wpa3Personal) {
                prop_assert!(!record.is_recommended());
                prop_assert!(!assessment.security_level.high_interference);
            }
        }
    }

    #[test]
    fn prop_recommendation_implies_thresholds(batch in batch_strategy()) {
        for record in evaluate(batch).iter() {
            let assessment = record.assessment.as_ref().unwrap();
            if record.is_recommended() {
                prop_assert_eq!(assessment.security_level.class, SecurityClass::Secure);
                prop_assert!(record.signal_pct.unwrap() >= RECOMMEND_SIGNAL_THRESHOLD_PCT);
                prop_assert!(assessment.channel_usage <= INTERFERENCE_THRESHOLD);
            }
        }
    }

    #[test]
    fn prop_strong_auth_with_fair_signal_on_quiet_channel_is_secure(
        signal in WEAK_SIGNAL_THRESHOLD_PCT..=100u8,
        wpa3 in any::<bool>(),
    ) {
        let auth = if wpa3 { AuthScheme::Wpa3Personal } else { AuthScheme::Wpa2Personal };
        let batch = ScanBatch::new(vec![
            NetworkRecord::new("solo").with_auth(auth).with_signal(signal).with_channel("6"),
        ]);
        let evaluated = evaluate(batch);
        let assessment = evaluated.records()[0].assessment.as_ref().unwrap();
        prop_assert_eq!(assessment.security_level.class, SecurityClass::Secure);
        prop_assert!(!assessment.security_level.high_interference);
        prop_assert_eq!(
            evaluated.records()[0].is_recommended(),
            signal >= RECOMMEND_SIGNAL_THRESHOLD_PCT
        );
    }

    #[test]
    fn prop_channel_usage_matches_batch_counts(batch in batch_strategy()) {
        let evaluated = evaluate(batch);
        for record in evaluated.iter() {
            let assessment = record.assessment.as_ref().unwrap();
            prop_assert_eq!(
                assessment.channel_usage,
                evaluated.channel_usage(record.channel.as_deref())
            );
        }
    }
}
