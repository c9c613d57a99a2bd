//! Network records and the assessment the evaluator attaches to them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bssid::{BssidId, RadioType};

/// Cipher assumed when a scan does not report one.
pub const DEFAULT_ENCRYPTION: &str = "AES";

/// Text shown in place of a missing field.
pub const UNKNOWN: &str = "unknown";

// ---------------------------------------------------------------------------
// AuthScheme
// ---------------------------------------------------------------------------

/// Authentication / key-management method advertised by a network.
///
/// Only the four named schemes take part in scoring. Everything else is
/// carried verbatim in [`AuthScheme::Other`] and scores as unknown. An
/// `Other` holding one of the four names scores as that scheme; see
/// [`AuthScheme::canonical`].
///
/// Serialized as the scheme name (`"WPA2-Personal"`); deserializing goes
/// through [`AuthScheme::from_netsh_str`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", from = "String"))]
pub enum AuthScheme {
    /// WPA2-Personal (PSK).
    Wpa2Personal,
    /// WPA3-Personal (SAE).
    Wpa3Personal,
    /// No authentication.
    Open,
    /// Wired Equivalent Privacy.
    Wep,
    /// Any other scheme, as reported.
    Other(String),
}

impl AuthScheme {
    /// Map a scheme name as printed by `netsh` (English or German).
    pub fn from_netsh_str(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "wpa2-personal" => Self::Wpa2Personal,
            "wpa3-personal" => Self::Wpa3Personal,
            "open" | "offen" => Self::Open,
            "wep" => Self::Wep,
            "" => Self::unknown(),
            _ => Self::Other(trimmed.to_owned()),
        }
    }

    /// `Other` values naming a known scheme mapped to the named variant.
    pub fn canonical(&self) -> Self {
        match self {
            Self::Other(name) => Self::from_netsh_str(name),
            known => known.clone(),
        }
    }

    /// The scheme used when a record carries no authentication line.
    pub fn unknown() -> Self {
        Self::Other(UNKNOWN.to_owned())
    }

    /// The scheme name as shown to users.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Wpa2Personal => "WPA2-Personal",
            Self::Wpa3Personal => "WPA3-Personal",
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::Other(name) => name,
        }
    }
}

impl Default for AuthScheme {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AuthScheme {
    fn from(name: String) -> Self {
        Self::from_netsh_str(&name)
    }
}

impl From<AuthScheme> for String {
    fn from(auth: AuthScheme) -> Self {
        match auth {
            AuthScheme::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Verdict types
// ---------------------------------------------------------------------------

/// Base security class, after the weak-signal downgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SecurityClass {
    /// Modern personal-mode encryption.
    Secure,
    /// Modern encryption, but the signal is below the weak-signal threshold.
    SecureWeakSignal,
    /// Open or WEP.
    Insecure,
    /// Scheme not recognised.
    Unknown,
}

/// Security level shown for a network: a class plus the interference flag.
///
/// The interference flag is only ever set on the secure classes, so the
/// rendered text is one of `Secure`, `Secure, but weak signal`,
/// `Secure, high interference`, `Secure, but weak signal, high interference`,
/// `Insecure` or `Unknown`. Serialized as that text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct SecurityLevel {
    /// Class before the interference suffix.
    pub class: SecurityClass,
    /// Whether the channel is congested.
    pub high_interference: bool,
}

impl SecurityLevel {
    /// Whether the rendered level starts with "Secure".
    pub fn is_secure_family(&self) -> bool {
        matches!(
            self.class,
            SecurityClass::Secure | SecurityClass::SecureWeakSignal
        )
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match self.class {
            SecurityClass::Secure => "Secure",
            SecurityClass::SecureWeakSignal => "Secure, but weak signal",
            SecurityClass::Insecure => "Insecure",
            SecurityClass::Unknown => "Unknown",
        };
        f.write_str(base)?;
        if self.high_interference {
            f.write_str(HIGH_INTERFERENCE_SUFFIX)?;
        }
        Ok(())
    }
}

const HIGH_INTERFERENCE_SUFFIX: &str = ", high interference";

/// A security level string that is not one of the rendered forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised security level '{0}'")]
pub struct ParseSecurityLevelError(String);

impl FromStr for SecurityLevel {
    type Err = ParseSecurityLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, high_interference) = match s.strip_suffix(HIGH_INTERFERENCE_SUFFIX) {
            Some(base) => (base, true),
            None => (s, false),
        };
        let class = match base {
            "Secure" => SecurityClass::Secure,
            "Secure, but weak signal" => SecurityClass::SecureWeakSignal,
            "Insecure" => SecurityClass::Insecure,
            "Unknown" => SecurityClass::Unknown,
            _ => return Err(ParseSecurityLevelError(s.to_owned())),
        };
        let level = Self {
            class,
            high_interference,
        };
        if high_interference && !level.is_secure_family() {
            return Err(ParseSecurityLevelError(s.to_owned()));
        }
        Ok(level)
    }
}

impl TryFrom<String> for SecurityLevel {
    type Error = ParseSecurityLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SecurityLevel> for String {
    fn from(level: SecurityLevel) -> Self {
        level.to_string()
    }
}

/// Qualitative channel congestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InterferenceRisk {
    Low,
    High,
}

impl fmt::Display for InterferenceRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::High => f.write_str("high"),
        }
    }
}

/// Binary connect advice.
///
/// Serialized as `"recommended"` / `"not recommended"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Recommendation {
    #[cfg_attr(feature = "serde", serde(rename = "recommended"))]
    Recommended,
    #[cfg_attr(feature = "serde", serde(rename = "not recommended"))]
    NotRecommended,
}

impl Recommendation {
    pub fn is_recommended(self) -> bool {
        self == Self::Recommended
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recommended => f.write_str("recommended"),
            Self::NotRecommended => f.write_str("not recommended"),
        }
    }
}

/// Everything the evaluator derives for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assessment {
    pub security_level: SecurityLevel,
    pub security_reason: String,
    /// Records in the batch sharing this record's channel, self included.
    pub channel_usage: usize,
    pub interference_risk: InterferenceRisk,
    pub recommendation: Recommendation,
    pub recommendation_reason: String,
}

// ---------------------------------------------------------------------------
// NetworkRecord
// ---------------------------------------------------------------------------

/// One observed wireless network in a single scan snapshot.
///
/// The raw fields are filled by a [`NetworkSource`](crate::port::NetworkSource);
/// `assessment` is written by the evaluator and is `None` until then.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkRecord {
    /// Network name. May be empty for hidden networks.
    pub ssid: String,
    pub bssid: Option<BssidId>,
    /// Signal quality percentage (0-100), `None` when not reported.
    pub signal_pct: Option<u8>,
    /// Channel identifier as reported, `None` when not reported.
    pub channel: Option<String>,
    pub auth: AuthScheme,
    pub encryption: String,
    pub radio_type: Option<RadioType>,
    pub assessment: Option<Assessment>,
}

impl NetworkRecord {
    /// A record with only a name; every other field unknown.
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            bssid: None,
            signal_pct: None,
            channel: None,
            auth: AuthScheme::unknown(),
            encryption: DEFAULT_ENCRYPTION.to_owned(),
            radio_type: None,
            assessment: None,
        }
    }

    pub fn with_auth(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    /// Set the signal percentage. Values above 100 are clamped.
    pub fn with_signal(mut self, pct: u8) -> Self {
        self.signal_pct = Some(pct.min(100));
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_encryption(mut self, encryption: impl Into<String>) -> Self {
        self.encryption = encryption.into();
        self
    }

    pub fn with_bssid(mut self, bssid: BssidId) -> Self {
        self.bssid = Some(bssid);
        self
    }

    /// Channel text for display, `"unknown"` when missing.
    pub fn channel_label(&self) -> &str {
        self.channel.as_deref().unwrap_or(UNKNOWN)
    }

    /// Signal text for display (`"84%"`), `"unknown"` when missing.
    pub fn signal_label(&self) -> String {
        self.signal_pct
            .map_or_else(|| UNKNOWN.to_owned(), |pct| format!("{pct}%"))
    }

    /// Whether the evaluator recommended this network.
    pub fn is_recommended(&self) -> bool {
        self.assessment
            .as_ref()
            .is_some_and(|a| a.recommendation.is_recommended())
    }
}
