//! Line-level helpers shared by the `netsh` output parsers.

use std::process::{Command, Output};
use std::time::Instant;

use oem_cp::code_table::DECODING_TABLE_CP850;

use crate::error::WlanError;

/// Split a netsh key-value line on the first `" : "` separator.
///
/// The `" : "` (space-colon-space) convention avoids mis-splitting on
/// the colons inside MAC addresses or SSID names that happen to contain
/// colons. A line ending in `" :"` yields an empty value (hidden SSIDs).
///
/// Returns `(key, value)` with whitespace trimmed from both parts, or
/// `None` when no separator is found.
pub(crate) fn split_kv(line: &str) -> Option<(&str, &str)> {
    if let Some(idx) = line.find(" : ") {
        return Some((line[..idx].trim(), line[idx + 3..].trim()));
    }
    line.strip_suffix(" :").map(|key| (key.trim(), ""))
}

/// Case-insensitive prefix match of `key` against any of `names`.
///
/// German keys are matched on their ASCII stem (`"verschl"`, `"bertragungsrate"`),
/// so umlaut spelling variants do not matter.
pub(crate) fn key_matches(key: &str, names: &[&str]) -> bool {
    let lower = key.to_lowercase();
    names.iter().any(|name| lower.starts_with(name))
}

/// Case-insensitive exact match of `key` against any of `names`.
///
/// Used where a prefix match would also hit longer keys such as
/// `"Channel Utilization"`.
pub(crate) fn key_is(key: &str, names: &[&str]) -> bool {
    let lower = key.to_lowercase();
    names.iter().any(|name| lower == *name)
}

/// `Some(value)` for a non-empty value, `None` otherwise.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Parse `"84%"` or `"84"` into a percentage in `0..=100`.
pub(crate) fn parse_percent(value: &str) -> Option<u8> {
    let digits = value.trim().trim_end_matches('%').trim();
    digits.parse::<u8>().ok().filter(|pct| *pct <= 100)
}

/// Run a helper program to completion and capture its output.
pub(crate) fn run_tool(program: &'static str, args: &[&str]) -> Result<Output, WlanError> {
    let start = Instant::now();
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| WlanError::Process { program, source })?;

    tracing::debug!(
        program,
        ?args,
        status = %output.status,
        stdout_bytes = output.stdout.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "helper finished"
    );
    Ok(output)
}

/// Decode captured console output.
///
/// Console tools write in the OEM code page, CP850 on German and Western
/// European systems. Output that is already valid UTF-8 is taken as is.
pub(crate) fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => oem_cp::decode_string_complete_table(bytes, &DECODING_TABLE_CP850),
    }
}
