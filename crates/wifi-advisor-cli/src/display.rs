//! Rendering of scan results and link reports.

use colored::{Color, Colorize};
use serde::Serialize;
use tabled::settings::{object::Columns, Modify, Style, Width};
use tabled::{Table, Tabled};

use wifi_advisor_scan::{LinkReport, LinkStability, NetworkRecord, ScanBatch};

use crate::config::DisplayConfig;

/// Base width of the SSID column at 100 % zoom.
const SSID_WIDTH: usize = 32;

/// Base width of the security column at 100 % zoom.
const SECURITY_WIDTH: usize = 40;

// ============================================================================
// Palette
// ============================================================================

/// Background colours of the recommendation cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub recommended: Color,
    pub not_recommended: Color,
}

impl Palette {
    pub fn for_config(config: &DisplayConfig) -> Self {
        if config.colorblind {
            Self {
                recommended: Color::Cyan,
                not_recommended: Color::Yellow,
            }
        } else {
            Self {
                recommended: Color::Green,
                not_recommended: Color::Red,
            }
        }
    }

    fn paint(&self, text: &str, recommended: bool) -> String {
        let background = if recommended {
            self.recommended
        } else {
            self.not_recommended
        };
        format!(" {text} ").black().on_color(background).to_string()
    }
}

// ============================================================================
// Display Structs for Tables
// ============================================================================

/// Network display row for tables
#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Recommendation")]
    recommendation: String,
}

impl NetworkRow {
    fn from_record(record: &NetworkRecord, palette: &Palette) -> Self {
        let (security, recommendation) = match &record.assessment {
            Some(assessment) => (
                assessment.security_level.to_string(),
                assessment.recommendation.to_string(),
            ),
            None => ("unknown".to_owned(), "unknown".to_owned()),
        };
        Self {
            ssid: ssid_label(&record.ssid),
            signal: record.signal_label(),
            security,
            recommendation: palette.paint(&recommendation, record.is_recommended()),
        }
    }
}

/// Combined output of the `scan` command in JSON form.
#[derive(Serialize)]
pub struct ScanReport<'a> {
    pub networks: &'a ScanBatch,
    pub connected: Option<&'a LinkReport>,
}

fn ssid_label(ssid: &str) -> String {
    if ssid.is_empty() {
        "(hidden)".to_owned()
    } else {
        ssid.to_owned()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the evaluated batch as a table.
pub fn render_table(batch: &ScanBatch, config: &DisplayConfig) -> String {
    let palette = Palette::for_config(config);
    let rows: Vec<NetworkRow> = batch
        .iter()
        .map(|record| NetworkRow::from_record(record, &palette))
        .collect();

    let ssid_width = Width::truncate(config.scale(SSID_WIDTH)).suffix("...");
    let security_width = Width::wrap(config.scale(SECURITY_WIDTH));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(ssid_width))
        .with(Modify::new(Columns::single(2)).with(security_width));
    table.to_string()
}

/// One line per network, for scripts.
pub fn render_compact(batch: &ScanBatch) -> String {
    batch
        .iter()
        .map(|record| {
            let (security, recommendation) = record
                .assessment
                .as_ref()
                .map(|a| (a.security_level.to_string(), a.recommendation.to_string()))
                .unwrap_or_else(|| ("unknown".to_owned(), "unknown".to_owned()));
            format!(
                "ssid={:?} signal={} channel={} security={:?} recommendation={:?}",
                record.ssid,
                record.signal_label(),
                record.channel_label(),
                security,
                recommendation
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line summary of the connected network.
pub fn render_link_report(report: Option<&LinkReport>) -> String {
    let Some(report) = report else {
        return "Not connected to a wireless network.".dimmed().to_string();
    };
    let info = &report.info;
    let unknown = || "unknown".to_owned();
    let stability = match report.stability {
        LinkStability::Stable => report.stability.to_string().green(),
        LinkStability::Unstable => report.stability.to_string().red(),
    };

    [
        format!("{} {}", "Connected network:".bold(), info.ssid.cyan()),
        format!(
            "  {} {}",
            "Signal:".dimmed(),
            info.signal_pct.map_or_else(unknown, |pct| format!("{pct}%"))
        ),
        format!(
            "  {} {} Mbit/s",
            "Receive rate:".dimmed(),
            info.receive_rate.clone().unwrap_or_else(unknown)
        ),
        format!(
            "  {} {} Mbit/s",
            "Transmit rate:".dimmed(),
            info.transmit_rate.clone().unwrap_or_else(unknown)
        ),
        format!(
            "  {} {} (interference risk: {})",
            "Channel:".dimmed(),
            info.channel_label(),
            report.interference_risk
        ),
        format!(
            "  {} {}% (link: {})",
            "Packet loss:".dimmed(),
            report.packet_loss_pct,
            stability
        ),
    ]
    .join("\n")
}

/// Detail view of a single record.
pub fn render_details(record: &NetworkRecord, config: &DisplayConfig) -> String {
    let palette = Palette::for_config(config);
    let unknown = || "unknown".to_owned();
    let mut lines = vec![
        format!("{} {}", "Details for".bold(), ssid_label(&record.ssid).cyan()),
        format!("  {} {}", "Authentication:".dimmed(), record.auth),
        format!("  {} {}", "Encryption:".dimmed(), record.encryption),
        format!("  {} {}", "Signal:".dimmed(), record.signal_label()),
        format!("  {} {}", "Channel:".dimmed(), record.channel_label()),
        format!(
            "  {} {}",
            "Radio type:".dimmed(),
            record.radio_type.as_ref().map_or_else(unknown, |r| r.to_string())
        ),
        format!(
            "  {} {}",
            "BSSID:".dimmed(),
            record.bssid.map_or_else(unknown, |b| b.to_string())
        ),
    ];
    if let Some(assessment) = &record.assessment {
        lines.push(format!(
            "  {} {}",
            "Security:".dimmed(),
            assessment.security_level
        ));
        lines.push(format!(
            "  {} {}",
            "Recommendation:".dimmed(),
            palette.paint(&assessment.recommendation.to_string(), record.is_recommended())
        ));
        lines.push(format!(
            "  {} {}",
            "Reason:".dimmed(),
            assessment.recommendation_reason
        ));
    }
    lines.join("\n")
}
