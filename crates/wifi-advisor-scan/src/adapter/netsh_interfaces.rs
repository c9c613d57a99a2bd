//! Parser for `netsh wlan show interfaces`.

use crate::adapter::netsh_lines::{key_is, key_matches, non_empty, parse_percent, split_kv};
use crate::domain::ConnectedNetworkInfo;

/// Parse the connected network out of `netsh wlan show interfaces`.
///
/// Returns `None` when no interface reports an SSID (disconnected, or no
/// wireless adapter). With several adapters the first associated one wins.
pub fn parse_netsh_interfaces(output: &str) -> Option<ConnectedNetworkInfo> {
    let mut current: Option<ConnectedNetworkInfo> = None;
    let mut signal = None;
    let mut receive_rate = None;
    let mut transmit_rate = None;
    let mut channel = None;

    for line in output.lines() {
        let Some((key, value)) = split_kv(line.trim()) else {
            continue;
        };

        // "Name : Wi-Fi" opens the next interface block.
        if key_is(key, &["name"]) {
            if current.is_some() {
                break;
            }
            signal = None;
            receive_rate = None;
            transmit_rate = None;
            channel = None;
        } else if key_matches(key, &["ssid"]) {
            current = non_empty(value).map(ConnectedNetworkInfo::new);
        } else if key_is(key, &["signal"]) {
            signal = parse_percent(value);
        } else if key_matches(key, &["receive rate", "empfangsrate"]) {
            receive_rate = non_empty(value);
        } else if is_transmit_key(key) {
            transmit_rate = non_empty(value);
        } else if key_is(key, &["channel", "kanal"]) {
            channel = non_empty(value);
        }
    }

    current.map(|mut info| {
        info.signal_pct = signal;
        info.receive_rate = receive_rate;
        info.transmit_rate = transmit_rate;
        info.channel = channel;
        info
    })
}

/// `"Transmit rate (Mbps)"` or `"Übertragungsrate (MBit/s)"`.
fn is_transmit_key(key: &str) -> bool {
    key_matches(key, &["transmit rate"]) || key.to_lowercase().contains("bertragungsrate")
}
