//! Domain types: records, batches, verdicts and link telemetry.

pub mod batch;
pub mod bssid;
pub mod connected;
pub mod credential;
pub mod record;

pub use batch::ScanBatch;
pub use bssid::{BssidId, RadioType};
pub use connected::{ConnectedNetworkInfo, LinkReport, LinkStability};
pub use credential::Credential;
pub use record::{
    Assessment, AuthScheme, InterferenceRisk, NetworkRecord, ParseSecurityLevelError,
    Recommendation, SecurityClass, SecurityLevel,
};
