//! Tests for the orchestration layer
//!
//! Tests cover:
//! - The recommendation gate in front of connect
//! - Refresh failure semantics (batch cleared, no retry)
//! - Link report assembly against the current batch

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wifi_advisor_scan::{
    AdvisorSession, AuthScheme, ConnectOutcome, ConnectedNetworkInfo, ConnectionIssuer,
    Credential, InterferenceRisk, LinkStability, NetworkRecord, NetworkSource, ScanBatch,
    WlanError,
};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Calls {
    scans: AtomicUsize,
    queries: AtomicUsize,
    pings: AtomicUsize,
    connects: Mutex<Vec<String>>,
}

struct FakeSource {
    scans: Mutex<Vec<Result<ScanBatch, WlanError>>>,
    connected: Option<ConnectedNetworkInfo>,
    loss: u8,
    calls: Arc<Calls>,
}

impl FakeSource {
    fn new(calls: Arc<Calls>) -> Self {
        Self {
            scans: Mutex::new(Vec::new()),
            connected: None,
            loss: 0,
            calls,
        }
    }

    /// Queue scan results; they are returned in order.
    fn with_scans(self, scans: Vec<Result<ScanBatch, WlanError>>) -> Self {
        let mut queued = scans;
        queued.reverse();
        *self.scans.lock().unwrap() = queued;
        self
    }

    fn with_connected(mut self, info: ConnectedNetworkInfo, loss: u8) -> Self {
        self.connected = Some(info);
        self.loss = loss;
        self
    }
}

impl NetworkSource for FakeSource {
    fn scan(&self) -> wifi_advisor_scan::Result<ScanBatch> {
        self.calls.scans.fetch_add(1, Ordering::SeqCst);
        self.scans
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(ScanBatch::default()))
    }

    fn connected_info(&self) -> wifi_advisor_scan::Result<Option<ConnectedNetworkInfo>> {
        self.calls.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.connected.clone())
    }

    fn measure_loss(&self) -> wifi_advisor_scan::Result<u8> {
        self.calls.pings.fetch_add(1, Ordering::SeqCst);
        Ok(self.loss)
    }
}

struct FakeIssuer {
    calls: Arc<Calls>,
}

impl ConnectionIssuer for FakeIssuer {
    fn connect(
        &self,
        record: &NetworkRecord,
        credential: &Credential,
    ) -> wifi_advisor_scan::Result<ConnectOutcome> {
        assert_eq!(credential.expose(), "hunter22");
        self.calls.connects.lock().unwrap().push(record.ssid.clone());
        Ok(ConnectOutcome {
            ssid: record.ssid.clone(),
            message: "Connection request was completed successfully.".to_owned(),
        })
    }
}

fn wpa2(ssid: &str, signal: u8, channel: &str) -> NetworkRecord {
    NetworkRecord::new(ssid)
        .with_auth(AuthScheme::Wpa2Personal)
        .with_encryption("CCMP")
        .with_signal(signal)
        .with_channel(channel)
}

fn open(ssid: &str, signal: u8, channel: &str) -> NetworkRecord {
    NetworkRecord::new(ssid)
        .with_auth(AuthScheme::Open)
        .with_encryption("None")
        .with_signal(signal)
        .with_channel(channel)
}

fn session_with(
    batch: ScanBatch,
) -> (AdvisorSession<FakeSource, FakeIssuer>, Arc<Calls>) {
    let calls = Arc::new(Calls::default());
    let source = FakeSource::new(calls.clone()).with_scans(vec![Ok(batch)]);
    let issuer = FakeIssuer {
        calls: calls.clone(),
    };
    (AdvisorSession::new(source, issuer), calls)
}

fn credential() -> Credential {
    Credential::new("hunter22")
}

// ---------------------------------------------------------------------------
// Connect gate
// ---------------------------------------------------------------------------

#[cfg(test)]
mod connect_gate {
    use super::*;

    #[test]
    fn recommended_network_reaches_issuer_once() {
        let (mut session, calls) = session_with(ScanBatch::new(vec![wpa2("Home", 80, "6")]));
        session.refresh().unwrap();

        let outcome = session.connect("Home", &credential()).unwrap();
        assert_eq!(outcome.ssid, "Home");
        assert_eq!(*calls.connects.lock().unwrap(), vec!["Home".to_owned()]);
    }

    #[test]
    fn open_network_is_refused() {
        let (mut session, calls) = session_with(ScanBatch::new(vec![open("CafeWiFi", 90, "1")]));
        session.refresh().unwrap();

        let err = session.connect("CafeWiFi", &credential()).unwrap_err();
        match err {
            WlanError::NotRecommended { ssid, reason } => {
                assert_eq!(ssid, "CafeWiFi");
                assert_eq!(reason, "no encryption (open)");
            }
            other => panic!("expected NotRecommended, got {other:?}"),
        }
        assert!(calls.connects.lock().unwrap().is_empty());
    }

    #[test]
    fn weak_signal_is_refused() {
        let (mut session, calls) = session_with(ScanBatch::new(vec![wpa2("Attic", 40, "11")]));
        session.refresh().unwrap();

        let err = session.connect("Attic", &credential()).unwrap_err();
        assert!(matches!(err, WlanError::NotRecommended { .. }));
        assert!(err.is_policy_refusal());
        assert!(calls.connects.lock().unwrap().is_empty());
    }

    #[test]
    fn congested_channel_is_refused() {
        let batch = ScanBatch::new(vec![
            wpa2("A", 90, "6"),
            wpa2("B", 90, "6"),
            wpa2("C", 90, "6"),
            wpa2("D", 90, "6"),
        ]);
        let (mut session, calls) = session_with(batch);
        session.refresh().unwrap();

        for ssid in ["A", "B", "C", "D"] {
            assert!(session.connect(ssid, &credential()).is_err());
        }
        assert!(calls.connects.lock().unwrap().is_empty());
    }

    #[test]
    fn unknown_network_is_refused() {
        let (mut session, calls) = session_with(ScanBatch::new(vec![wpa2("Home", 80, "6")]));
        session.refresh().unwrap();

        let err = session.connect("Elsewhere", &credential()).unwrap_err();
        assert!(matches!(err, WlanError::UnknownNetwork { ref ssid } if ssid == "Elsewhere"));
        assert!(calls.connects.lock().unwrap().is_empty());
    }

    #[test]
    fn connect_before_refresh_is_refused() {
        let (session, calls) = session_with(ScanBatch::new(vec![wpa2("Home", 80, "6")]));

        let err = session.connect("Home", &credential()).unwrap_err();
        assert!(matches!(err, WlanError::UnknownNetwork { .. }));
        assert_eq!(calls.scans.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn duplicate_ssid_uses_first_record() {
        let batch = ScanBatch::new(vec![open("Twin", 90, "1"), wpa2("Twin", 90, "6")]);
        let (mut session, calls) = session_with(batch);
        session.refresh().unwrap();

        assert!(session.connect("Twin", &credential()).is_err());
        assert!(calls.connects.lock().unwrap().is_empty());
        assert_eq!(session.details("Twin").unwrap().auth, AuthScheme::Open);
    }
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

#[cfg(test)]
mod refresh {
    use super::*;

    #[test]
    fn refresh_evaluates_every_record() {
        let batch = ScanBatch::new(vec![wpa2("Home", 80, "6"), open("Cafe", 50, "1")]);
        let (mut session, calls) = session_with(batch);

        let evaluated = session.refresh().unwrap();
        assert_eq!(evaluated.len(), 2);
        assert!(evaluated.iter().all(|r| r.assessment.is_some()));
        assert_eq!(evaluated.recommended_count(), 1);
        assert_eq!(calls.scans.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_refresh_clears_batch_without_retry() {
        let calls = Arc::new(Calls::default());
        let source = FakeSource::new(calls.clone()).with_scans(vec![
            Ok(ScanBatch::new(vec![wpa2("Home", 80, "6")])),
            Err(WlanError::Scan {
                reason: "netsh exited with 1".to_owned(),
            }),
        ]);
        let mut session = AdvisorSession::new(
            source,
            FakeIssuer {
                calls: calls.clone(),
            },
        );

        session.refresh().unwrap();
        assert_eq!(session.batch().len(), 1);

        let err = session.refresh().unwrap_err();
        assert!(matches!(err, WlanError::Scan { .. }));
        assert!(session.batch().is_empty());
        assert_eq!(calls.scans.load(Ordering::SeqCst), 2);

        // The previously recommended network is gone with the batch.
        assert!(session.connect("Home", &credential()).is_err());
        assert!(calls.connects.lock().unwrap().is_empty());
    }

    #[test]
    fn empty_scan_gives_empty_batch() {
        let (mut session, _) = session_with(ScanBatch::default());
        assert!(session.refresh().unwrap().is_empty());
        assert!(session.details("anything").is_none());
    }
}

// ---------------------------------------------------------------------------
// Link report
// ---------------------------------------------------------------------------

#[cfg(test)]
mod link_report {
    use super::*;

    fn connected(ssid: &str, channel: &str) -> ConnectedNetworkInfo {
        let mut info = ConnectedNetworkInfo::new(ssid);
        info.channel = Some(channel.to_owned());
        info.signal_pct = Some(70);
        info
    }

    #[test]
    fn not_associated_skips_ping() {
        let (session, calls) = session_with(ScanBatch::default());
        assert!(session.link_report().unwrap().is_none());
        assert_eq!(calls.queries.load(Ordering::SeqCst), 1);
        assert_eq!(calls.pings.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn report_counts_channel_against_batch() {
        let calls = Arc::new(Calls::default());
        let batch = ScanBatch::new(vec![
            wpa2("A", 80, "6"),
            wpa2("B", 80, "6"),
            wpa2("C", 80, "6"),
            wpa2("D", 80, "6"),
            wpa2("E", 80, "11"),
        ]);
        let source = FakeSource::new(calls.clone())
            .with_scans(vec![Ok(batch)])
            .with_connected(connected("A", "6"), 0);
        let mut session = AdvisorSession::new(
            source,
            FakeIssuer {
                calls: calls.clone(),
            },
        );
        session.refresh().unwrap();

        let report = session.link_report().unwrap().unwrap();
        assert_eq!(report.info.ssid, "A");
        assert_eq!(report.channel_usage, 4);
        assert_eq!(report.interference_risk, InterferenceRisk::High);
        assert_eq!(report.stability, LinkStability::Stable);
        assert_eq!(calls.pings.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn report_with_empty_batch_has_low_risk() {
        let calls = Arc::new(Calls::default());
        let source = FakeSource::new(calls.clone()).with_connected(connected("Gone", "36"), 25);
        let session = AdvisorSession::new(
            source,
            FakeIssuer {
                calls: calls.clone(),
            },
        );

        let report = session.link_report().unwrap().unwrap();
        assert_eq!(report.channel_usage, 0);
        assert_eq!(report.interference_risk, InterferenceRisk::Low);
        assert_eq!(report.packet_loss_pct, 25);
        assert_eq!(report.stability, LinkStability::Unstable);
    }
}
