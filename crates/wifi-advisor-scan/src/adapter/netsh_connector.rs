//! [`ConnectionIssuer`] adapter that joins a network through `netsh wlan`.
//!
//! Joining takes three subprocess calls: drop any stale profile of the same
//! name, register a freshly generated XML profile, then request the
//! connection. The profile lives in a temporary file that is removed when
//! the call returns, on success and on failure.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::adapter::netsh_lines::{decode, run_tool};
use crate::domain::{AuthScheme, Credential, NetworkRecord};
use crate::error::{Result, WlanError};
use crate::port::{ConnectOutcome, ConnectionIssuer};

/// Output fragments `netsh wlan add profile` prints on success.
const PROFILE_ADDED_MARKERS: &[&str] = &["is added on interface", "wird der schnittstelle", "erfolgreich"];

/// Output fragments `netsh wlan connect` prints on success.
const CONNECTED_MARKERS: &[&str] = &["successfully", "erfolgreich"];

/// Joins networks by registering a WLAN profile with `netsh`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetshConnector;

impl NetshConnector {
    pub fn new() -> Self {
        Self
    }
}

impl ConnectionIssuer for NetshConnector {
    fn connect(&self, record: &NetworkRecord, credential: &Credential) -> Result<ConnectOutcome> {
        let ssid = record.ssid.as_str();

        // A missing profile makes this fail; that is expected and ignored.
        let deleted = run_tool("netsh", &["wlan", "delete", "profile", &format!("name={ssid}")])?;
        tracing::debug!(ssid, status = %deleted.status, "stale profile removed");

        let xml = build_profile_xml(
            ssid,
            map_auth(&record.auth),
            map_encryption(&record.encryption),
            credential,
        );
        let profile = write_profile(&xml)?;
        let filename = format!("filename={}", profile.path().display());

        let added = run_tool("netsh", &["wlan", "add", "profile", &filename])?;
        let added_text = decode(&added.stdout);
        if !added.status.success() || !contains_any(&added_text, PROFILE_ADDED_MARKERS) {
            tracing::warn!(ssid, status = %added.status, "profile rejected");
            return Err(WlanError::ProfileRejected {
                ssid: ssid.to_owned(),
                output: added_text.trim().to_owned(),
            });
        }

        let connected = run_tool(
            "netsh",
            &["wlan", "connect", &format!("ssid={ssid}"), &format!("name={ssid}")],
        )?;
        let connected_text = decode(&connected.stdout);
        if !connected.status.success() || !contains_any(&connected_text, CONNECTED_MARKERS) {
            tracing::warn!(ssid, status = %connected.status, "connect request failed");
            let reason = if connected_text.trim().is_empty() {
                decode(&connected.stderr).trim().to_owned()
            } else {
                connected_text.trim().to_owned()
            };
            return Err(WlanError::Connect {
                ssid: ssid.to_owned(),
                reason,
            });
        }

        tracing::info!(ssid, "connected");
        Ok(ConnectOutcome {
            ssid: ssid.to_owned(),
            message: connected_text.trim().to_owned(),
        })
    }
}

fn write_profile(xml: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("wifi-advisor-")
        .suffix(".xml")
        .tempfile()
        .map_err(WlanError::ProfileFile)?;
    file.write_all(xml.as_bytes())
        .and_then(|()| file.flush())
        .map_err(WlanError::ProfileFile)?;
    Ok(file)
}

fn contains_any(output: &str, markers: &[&str]) -> bool {
    let lower = output.to_lowercase();
    markers.iter().any(|marker| lower.contains(marker))
}

/// Profile authentication keyword for an advertised scheme.
pub fn map_auth(auth: &AuthScheme) -> &str {
    match auth {
        AuthScheme::Wpa3Personal => "WPA3PSK",
        AuthScheme::Wpa2Personal => "WPA2PSK",
        AuthScheme::Other(name) => match AuthScheme::from_netsh_str(name) {
            AuthScheme::Wpa3Personal => "WPA3PSK",
            AuthScheme::Wpa2Personal => "WPA2PSK",
            _ if name.eq_ignore_ascii_case("WPA-Personal") => "WPAPSK",
            _ => name.as_str(),
        },
        other => other.as_str(),
    }
}

/// Profile encryption keyword for an advertised cipher.
pub fn map_encryption(encryption: &str) -> &str {
    if encryption.eq_ignore_ascii_case("CCMP") {
        "AES"
    } else {
        encryption
    }
}

/// Escape the five XML special characters.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a WLAN profile for a pre-shared-key network.
pub fn build_profile_xml(
    ssid: &str,
    authentication: &str,
    encryption: &str,
    credential: &Credential,
) -> String {
    let name = xml_escape(ssid);
    let key = xml_escape(credential.expose());
    format!(
        r#"<?xml version="1.0"?>
<WLANProfile xmlns="http://www.microsoft.com/networking/WLAN/profile/v1">
    <name>{name}</name>
    <SSIDConfig>
        <SSID>
            <name>{name}</name>
        </SSID>
    </SSIDConfig>
    <connectionType>ESS</connectionType>
    <connectionMode>auto</connectionMode>
    <MSM>
        <security>
            <authEncryption>
                <authentication>{authentication}</authentication>
                <encryption>{encryption}</encryption>
                <useOneX>false</useOneX>
            </authEncryption>
            <sharedKey>
                <keyType>passPhrase</keyType>
                <protected>false</protected>
                <keyMaterial>{key}</keyMaterial>
            </sharedKey>
        </security>
    </MSM>
</WLANProfile>
"#
    )
}
