//! Packet loss measurement: parsing of `ping` summaries.

/// Host pinged to measure packet loss.
pub const PING_TARGET: &str = "8.8.8.8";

/// Echo requests sent per measurement.
pub const PING_COUNT: u8 = 4;

/// Extract the loss percentage from a `ping` summary.
///
/// Recognises `"(25% loss)"` and the German `"(25% Verlust)"`. Returns
/// `None` when no summary line is present.
pub fn parse_ping_loss(output: &str) -> Option<u8> {
    let lower = output.to_lowercase();
    ["% loss", "% verlust"]
        .iter()
        .filter_map(|marker| lower.find(marker))
        .min()
        .and_then(|idx| {
            let head = &lower[..idx];
            let start = head
                .rfind(|c: char| !c.is_ascii_digit())
                .map_or(0, |pos| pos + 1);
            head[start..].parse::<u8>().ok()
        })
        .filter(|pct| *pct <= 100)
}
