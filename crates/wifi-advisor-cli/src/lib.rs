//! wifi-advisor CLI
//!
//! Command-line front end that scans nearby wireless networks, rates each
//! one for security risk and only joins networks it recommends.
//!
//! # Usage
//!
//! ```bash
//! # Scan, rate and show the connected network
//! wifi-advisor scan
//!
//! # Same, as JSON, with the colour-blind palette
//! wifi-advisor scan --format json --colorblind
//!
//! # Show why a network was (not) recommended
//! wifi-advisor details "HomeNet"
//!
//! # Join a recommended network (passphrase read from stdin if omitted)
//! wifi-advisor connect "HomeNet"
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod commands;
pub mod config;
pub mod display;

/// wifi-advisor Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "wifi-advisor")]
#[command(author, version, about = "Rate nearby Wi-Fi networks and join only the safe ones")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags accepted by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Use the colour-blind palette (cyan/yellow)
    #[arg(long, global = true)]
    pub colorblind: bool,

    /// Zoom level for column widths, in percent (50-200, steps of 10)
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(50..=200))]
    pub zoom: Option<u16>,

    /// Path to a TOML display configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan, rate every visible network and show the connected network
    Scan,

    /// Show the connected network, its channel congestion and packet loss
    Status,

    /// Join a network, if it is recommended
    Connect {
        /// SSID of the network to join
        ssid: String,

        /// Passphrase (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show everything known about one network
    Details {
        /// SSID of the network
        ssid: String,
    },

    /// Display version information
    Version,
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}
