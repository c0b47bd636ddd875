/// ITCH feed command-line tool: receive, replay, decode, and analyse
/// length-prefixed market-data messages.
///
/// # Command overview
///
/// ```text
/// itch <COMMAND> [OPTIONS]
///
/// Commands:
///   listen     Join a multicast group and print decoded messages
///   replay     Multicast every message of a capture file
///   decode     Print decoded messages from a capture file
///   stats      Print per-type counts and byte totals for a capture file
///   inspect    Decode a single datagram given as hex
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Debug logging (overridden by RUST_LOG)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                     |
/// |------|---------------------------------------------|
/// | 0    | Success                                     |
/// | 1    | Error (socket failure, unreadable file ...) |
///
/// Records and stats go to stdout; logs and errors go to stderr.
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use itch_driver::{DriverConfig, DriverOutput, OutputMode};

use crate::multicast::{DEFAULT_GROUP, DEFAULT_PORT, DEFAULT_TTL, MulticastConfig};

mod cmd_decode;
mod cmd_inspect;
mod cmd_listen;
mod cmd_replay;
mod cmd_stats;
mod logging;
mod multicast;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// ITCH-style market data feed tool.
#[derive(Parser)]
#[command(name = "itch", version, about = "ITCH feed receiver and capture tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (per-datagram details, unknown tags).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Join a multicast group and print decoded messages.
    Listen(ListenArgs),
    /// Multicast every message of a capture file, one per datagram.
    Replay(ReplayArgs),
    /// Print decoded messages from a capture file.
    Decode(DecodeArgs),
    /// Print per-type counts and byte totals for a capture file.
    Stats(StatsArgs),
    /// Decode a single datagram given as hex.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Options that control how records are presented.
#[derive(clap::Args, Clone, Debug)]
pub struct OutputArgs {
    /// Only show records for these symbols (comma-separated).
    ///
    /// Records without a symbol (system events, deletes, cancels) are
    /// hidden while a filter is active. They are still counted.
    #[arg(long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Print each message as hex before its decoded line.
    #[arg(long)]
    pub show_raw: bool,

    /// Emit one JSON object per record instead of text lines.
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn driver_config(&self, stats_interval: u64) -> DriverConfig {
        DriverConfig {
            mode: if self.json {
                OutputMode::Json
            } else {
                OutputMode::Text
            },
            symbols: (!self.symbols.is_empty()).then(|| self.symbols.clone()),
            show_raw: self.show_raw,
            stats_interval,
        }
    }
}

/// Arguments for `itch listen`.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────────┐
/// │ Flag             │ Values / default                                 │
/// ├──────────────────┼──────────────────────────────────────────────────┤
/// │ --group          │ 239.192.0.1                                      │
/// │ --port           │ 12345                                            │
/// │ --interface      │ 0.0.0.0 (let the kernel choose)                  │
/// │ --max-messages   │ stop after N messages (none = run until killed)  │
/// │ --stats-interval │ 1000 (0 disables periodic reports)               │
/// └──────────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct ListenArgs {
    /// Multicast group to join.
    #[arg(long, default_value_t = DEFAULT_GROUP)]
    pub group: Ipv4Addr,

    /// UDP port to bind.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Local interface address used to join the group.
    #[arg(long, default_value_t = Ipv4Addr::UNSPECIFIED)]
    pub interface: Ipv4Addr,

    /// Stop after this many messages and print final stats.
    #[arg(long)]
    pub max_messages: Option<u64>,

    /// Print a throughput line every N messages.
    #[arg(long, default_value_t = itch_driver::config::DEFAULT_STATS_INTERVAL)]
    pub stats_interval: u64,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ListenArgs {
    pub fn multicast(&self) -> MulticastConfig {
        MulticastConfig {
            group: self.group,
            port: self.port,
            interface: self.interface,
            ..MulticastConfig::default()
        }
    }
}

/// Arguments for `itch replay`.
///
/// Reads a capture file (`[u16 len][message]` records back to back) and
/// sends each record, prefix included, as its own datagram.
#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Capture file to replay.
    pub file: PathBuf,

    /// Destination multicast group.
    #[arg(long, default_value_t = DEFAULT_GROUP)]
    pub group: Ipv4Addr,

    /// Destination UDP port.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Outgoing interface address (0.0.0.0 = system default).
    #[arg(long, default_value_t = Ipv4Addr::UNSPECIFIED)]
    pub interface: Ipv4Addr,

    /// Multicast TTL. 1 keeps traffic on the local subnet.
    #[arg(long, default_value_t = DEFAULT_TTL)]
    pub ttl: u32,

    /// Pause between datagrams, in microseconds.
    #[arg(long, default_value_t = 100)]
    pub pace_us: u64,

    /// Stop after sending this many messages.
    #[arg(long)]
    pub limit: Option<u64>,
}

impl ReplayArgs {
    pub fn multicast(&self) -> MulticastConfig {
        MulticastConfig {
            group: self.group,
            port: self.port,
            interface: self.interface,
            ttl: self.ttl,
        }
    }
}

/// Arguments for `itch decode`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Capture file to decode.
    pub file: PathBuf,

    /// Stop after this many messages.
    #[arg(long)]
    pub limit: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for `itch stats`.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Capture file to analyse.
    pub file: PathBuf,
}

/// Arguments for `itch inspect`.
///
/// The hex string may contain whitespace, so output from `xxd -p` or a
/// packet dump can be pasted directly.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Datagram bytes as hex, e.g. `000c530000000000000000 03e841`.
    #[arg(num_args = 1.., required = true)]
    pub hex: Vec<String>,

    /// Treat the input as a bare message with no length prefix.
    #[arg(long)]
    pub message: bool,

    /// Render the record as JSON.
    #[arg(long)]
    pub json: bool,
}

// ── Shared output ─────────────────────────────────────────────────────────────

/// Print one driver result: rendered lines, then the throughput report if
/// this message crossed an interval boundary.
pub fn emit(out: &DriverOutput) {
    for line in &out.lines {
        println!("{line}");
    }
    if let Some(report) = out.report {
        println!("{report}");
    }
}

/// Single-threaded runtime for the async capture reader.
pub fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    use anyhow::Context;
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Listen(args) => cmd_listen::run(&args),
        Commands::Replay(args) => cmd_replay::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Stats(args) => cmd_stats::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn listen_defaults() {
        let cli = Cli::try_parse_from(["itch", "listen"]).unwrap();
        let Commands::Listen(args) = cli.command else {
            panic!("expected listen");
        };
        assert_eq!(args.multicast(), MulticastConfig::default());
        assert_eq!(args.max_messages, None);
        assert_eq!(args.output.driver_config(args.stats_interval), DriverConfig::default());
    }

    #[test]
    fn symbols_split_on_commas() {
        let cli =
            Cli::try_parse_from(["itch", "decode", "feed.itch", "--symbols", "AAPL,MSFT", "--json"])
                .unwrap();
        let Commands::Decode(args) = cli.command else {
            panic!("expected decode");
        };
        let config = args.output.driver_config(0);
        assert_eq!(config.symbols, Some(vec!["AAPL".to_string(), "MSFT".to_string()]));
        assert_eq!(config.mode, OutputMode::Json);
    }

    #[test]
    fn replay_defaults() {
        let cli = Cli::try_parse_from(["itch", "replay", "feed.itch"]).unwrap();
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.pace_us, 100);
        assert_eq!(args.multicast().ttl, 1);
        assert_eq!(args.multicast().destination().port(), 12345);
    }
}
