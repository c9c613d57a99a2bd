//! Orchestration around the evaluator.
//!
//! [`AdvisorSession`] wires a [`NetworkSource`] and a [`ConnectionIssuer`]
//! to the evaluator and holds the most recent evaluated batch. Every
//! collaborator call is made at most once per operation and never retried;
//! failures are returned to the caller unchanged.

use crate::domain::{Credential, LinkReport, LinkStability, NetworkRecord, ScanBatch};
use crate::error::{Result, WlanError};
use crate::evaluator;
use crate::port::{ConnectOutcome, ConnectionIssuer, NetworkSource};

/// Scan, evaluate and connect, with the recommendation gate in front of
/// every connect.
pub struct AdvisorSession<S, C> {
    source: S,
    issuer: C,
    batch: ScanBatch,
}

impl<S: NetworkSource, C: ConnectionIssuer> AdvisorSession<S, C> {
    /// Session with an empty batch.
    pub fn new(source: S, issuer: C) -> Self {
        Self {
            source,
            issuer,
            batch: ScanBatch::default(),
        }
    }

    /// Scan once and evaluate the result.
    ///
    /// On failure the stored batch is cleared, so callers never see a stale
    /// or partially evaluated batch next to an error.
    pub fn refresh(&mut self) -> Result<&ScanBatch> {
        match self.source.scan() {
            Ok(raw) => {
                self.batch = evaluator::evaluate(raw);
                tracing::debug!(
                    networks = self.batch.len(),
                    recommended = self.batch.recommended_count(),
                    "batch evaluated"
                );
                Ok(&self.batch)
            }
            Err(err) => {
                self.batch = ScanBatch::default();
                Err(err)
            }
        }
    }

    /// The most recent evaluated batch (empty before the first refresh).
    pub fn batch(&self) -> &ScanBatch {
        &self.batch
    }

    /// Record shown in the details view for `ssid`.
    pub fn details(&self, ssid: &str) -> Option<&NetworkRecord> {
        self.batch.find_by_ssid(ssid)
    }

    /// Telemetry for the connected network, or `None` when not associated.
    ///
    /// Channel usage is counted against the current batch.
    pub fn link_report(&self) -> Result<Option<LinkReport>> {
        let Some(info) = self.source.connected_info()? else {
            return Ok(None);
        };
        let packet_loss_pct = self.source.measure_loss()?;
        let channel_usage = self.batch.channel_usage(info.channel.as_deref());

        Ok(Some(LinkReport {
            interference_risk: evaluator::interference_risk(channel_usage),
            channel_usage,
            packet_loss_pct,
            stability: LinkStability::from_loss(packet_loss_pct),
            info,
        }))
    }

    /// Join `ssid` if, and only if, the evaluator recommended it.
    pub fn connect(&self, ssid: &str, credential: &Credential) -> Result<ConnectOutcome> {
        let record = self
            .batch
            .find_by_ssid(ssid)
            .ok_or_else(|| WlanError::UnknownNetwork {
                ssid: ssid.to_owned(),
            })?;

        if !record.is_recommended() {
            let reason = record
                .assessment
                .as_ref()
                .map_or_else(|| "not evaluated".to_owned(), |a| a.recommendation_reason.clone());
            tracing::warn!(ssid, %reason, "connect refused");
            return Err(WlanError::NotRecommended {
                ssid: ssid.to_owned(),
                reason,
            });
        }

        self.issuer.connect(record, credential)
    }
}

impl<S, C> std::fmt::Debug for AdvisorSession<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorSession")
            .field("networks", &self.batch.len())
            .finish_non_exhaustive()
    }
}
