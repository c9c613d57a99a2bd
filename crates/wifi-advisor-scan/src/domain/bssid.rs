//! Access point identity and radio descriptors.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::WlanError;

// ---------------------------------------------------------------------------
// BssidId
// ---------------------------------------------------------------------------

/// Hardware identifier of one access point radio (a 6-byte MAC address).
///
/// Serialized as the lower-case colon-separated form.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct BssidId(pub [u8; 6]);

impl BssidId {
    /// Parse a `BssidId` from a colon-separated hex string such as
    /// `"aa:bb:cc:dd:ee:ff"`. Dashes are accepted as separators as well.
    pub fn parse(s: &str) -> Result<Self, WlanError> {
        let fail = || WlanError::MacParseFailed {
            input: s.to_owned(),
        };

        let mut bytes = [0u8; 6];
        let mut count = 0;
        for part in s.trim().split(|c| c == ':' || c == '-') {
            if count == 6 || part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(fail());
            }
            bytes[count] = u8::from_str_radix(part, 16).map_err(|_| fail())?;
            count += 1;
        }
        if count != 6 {
            return Err(fail());
        }
        Ok(Self(bytes))
    }

    /// Return the raw 6-byte MAC address.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl FromStr for BssidId {
    type Err = WlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BssidId {
    type Error = WlanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BssidId> for String {
    fn from(id: BssidId) -> Self {
        id.to_string()
    }
}

impl fmt::Debug for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BssidId({self})")
    }
}

impl fmt::Display for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

// ---------------------------------------------------------------------------
// RadioType
// ---------------------------------------------------------------------------

/// The 802.11 radio standard reported for a network. Descriptive only.
///
/// Serialized as its display text (`"802.11ax"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub enum RadioType {
    /// 802.11a
    A,
    /// 802.11b
    B,
    /// 802.11g
    G,
    /// 802.11n (Wi-Fi 4)
    N,
    /// 802.11ac (Wi-Fi 5)
    Ac,
    /// 802.11ax (Wi-Fi 6 / 6E)
    Ax,
    /// 802.11be (Wi-Fi 7)
    Be,
    /// Any other standard, as reported.
    Other(String),
}

impl RadioType {
    /// Parse a radio type from `netsh` output such as `"802.11ax"`.
    ///
    /// Unrecognised text is kept in [`RadioType::Other`]; only an empty
    /// value yields `None`.
    pub fn from_netsh_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lower = trimmed.to_ascii_lowercase();
        let suffix = lower.strip_prefix("802.11").unwrap_or(&lower);
        match suffix {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "g" => Some(Self::G),
            "n" => Some(Self::N),
            "ac" => Some(Self::Ac),
            "ax" => Some(Self::Ax),
            "be" => Some(Self::Be),
            _ if lower.contains("wi-fi 7") => Some(Self::Be),
            _ if lower.contains("wi-fi 6") => Some(Self::Ax),
            _ if lower.contains("wi-fi 5") => Some(Self::Ac),
            _ if lower.contains("wi-fi 4") => Some(Self::N),
            _ => Some(Self::Other(trimmed.to_owned())),
        }
    }
}

impl fmt::Display for RadioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::A => "802.11a",
            Self::B => "802.11b",
            Self::G => "802.11g",
            Self::N => "802.11n",
            Self::Ac => "802.11ac",
            Self::Ax => "802.11ax",
            Self::Be => "802.11be",
            Self::Other(name) => name.as_str(),
        };
        f.write_str(s)
    }
}

impl TryFrom<String> for RadioType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_netsh_str(&value).ok_or_else(|| "empty radio type".to_owned())
    }
}

impl From<RadioType> for String {
    fn from(radio: RadioType) -> Self {
        radio.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bssid_id_display_and_parse_agree() {
        let id = BssidId([0xd8, 0x32, 0x14, 0xb0, 0xa0, 0x3e]);
        assert_eq!(id.to_string(), "d8:32:14:b0:a0:3e");
        assert_eq!(BssidId::parse("D8:32:14:B0:A0:3E").unwrap(), id);
        assert_eq!("d8-32-14-b0-a0-3e".parse::<BssidId>().unwrap(), id);
    }

    #[test]
    fn bssid_id_parse_errors() {
        assert!(BssidId::parse("aa:bb:cc").is_err());
        assert!(BssidId::parse("zz:bb:cc:dd:ee:ff").is_err());
        assert!(BssidId::parse("aa:bb:cc:dd:ee:ff:00").is_err());
        assert!(BssidId::parse("aaa:bb:cc:dd:ee:f").is_err());
        assert!(BssidId::parse("").is_err());
        assert!(BssidId::parse("+a:bb:cc:dd:ee:ff").is_err());
        assert!(BssidId::parse("aa:bb:cc:dd:ee:-f").is_err());
    }

    #[test]
    fn radio_type_from_netsh() {
        assert_eq!(RadioType::from_netsh_str("802.11ax"), Some(RadioType::Ax));
        assert_eq!(RadioType::from_netsh_str(" 802.11ac "), Some(RadioType::Ac));
        assert_eq!(RadioType::from_netsh_str("802.11n"), Some(RadioType::N));
        assert_eq!(RadioType::from_netsh_str("802.11g"), Some(RadioType::G));
        assert_eq!(RadioType::from_netsh_str("802.11be"), Some(RadioType::Be));
        assert_eq!(RadioType::from_netsh_str("Wi-Fi 6E"), Some(RadioType::Ax));
        assert_eq!(RadioType::from_netsh_str("   "), None);
    }

    #[test]
    fn unrecognised_radio_type_keeps_its_text() {
        let radio = RadioType::from_netsh_str(" 802.11ad ").unwrap();
        assert_eq!(radio, RadioType::Other("802.11ad".to_owned()));
        assert_eq!(String::from(radio.clone()), "802.11ad");
        assert_eq!(RadioType::try_from("802.11ac".to_owned()), Ok(RadioType::Ac));
        assert!(RadioType::try_from(String::new()).is_err());
        assert_eq!(radio.to_string(), "802.11ad");
    }
}
