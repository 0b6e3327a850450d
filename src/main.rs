use std::io::{stdin, Write};

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use zcl::{ClusterId, ClusterLibrary};
use zcl_inspect::config::{self, InspectConfig};
use zcl_inspect::describe::Inspector;
use zcl_inspect::error::{InspectError, InspectResult};
use zcl_inspect::record::Record;

/*
 * Formatter function to output in syslog format. This makes sense when running
 * as a service (where output might go to a log file, or the system journal)
 */
#[allow(clippy::match_same_arms)]
fn syslog_format(
    buf: &mut pretty_env_logger::env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    writeln!(
        buf,
        "<{}>{}: {}",
        match record.level() {
            log::Level::Error => 3,
            log::Level::Warn => 4,
            log::Level::Info => 6,
            log::Level::Debug => 7,
            log::Level::Trace => 7,
        },
        record.target(),
        record.args()
    )
}

fn init_logging(filters: Option<&str>) -> InspectResult<()> {
    /* Try to provide reasonable default filters, when RUST_LOG is not specified */
    const DEFAULT_LOG_FILTERS: &[&str] = &["info", "zcl=debug"];

    let log_filters = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        filters.map_or_else(|| DEFAULT_LOG_FILTERS.join(","), ToString::to_string)
    });

    /* Detect if we need syslog or human-readable formatting */
    if std::env::var("SYSTEMD_EXEC_PID").is_ok_and(|pid| pid == std::process::id().to_string()) {
        Ok(pretty_env_logger::env_logger::builder()
            .format(syslog_format)
            .parse_filters(&log_filters)
            .try_init()?)
    } else {
        Ok(pretty_env_logger::formatted_builder()
            .parse_filters(&log_filters)
            .try_init()?)
    }
}

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// config file
    #[arg(short, long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe captured frames (json lines on stdin)
    Parse,

    /// Print the cluster library as json
    Dump {
        /// only this cluster (hex id)
        #[arg(long)]
        cluster: Option<String>,
    },
}

fn parse_cluster_id(s: &str) -> InspectResult<ClusterId> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16)
        .map(ClusterId)
        .map_err(|_| InspectError::InvalidClusterId(s.to_string()))
}

fn parse(lib: &ClusterLibrary, conf: &InspectConfig) -> InspectResult<()> {
    let inspector = Inspector::new(lib, conf);

    for line in stdin().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let rec = match serde_json::from_str::<Record>(line.trim()) {
            Ok(rec) => rec,
            Err(err) => {
                log::error!("Failed to parse json: {err}");
                eprintln!("    {line:<40}");
                continue;
            }
        };

        let index = rec.index;
        let route = rec.route();
        let cls = rec.cluster;

        match inspector.inspect(&rec) {
            Ok(Some(ins)) => {
                let flags = ins.frame.flags;
                let cmd = ins.frame.cmd;
                let desc = &ins.description;
                let payload = if conf.show_payload {
                    format!(" {}", hex::encode(&ins.payload))
                } else {
                    String::new()
                };

                if desc.is_known() {
                    log::info!("[{index:6}] {route}{flags:?} [{cls:04x}] {cmd:02x} :: {desc}{payload}");
                } else {
                    log::warn!("[{index:6}] {route}{flags:?} [{cls:04x}] {cmd:02x} :: {desc}{payload}");
                }
            }
            Ok(None) => {}
            Err(err) => {
                log::error!(
                    "[{index:6}] {route}[{cls:04x}] :: FAILED {}: {err}",
                    hex::encode(&rec.data)
                );
            }
        }
    }

    Ok(())
}

fn dump(lib: &ClusterLibrary, cluster: Option<&str>) -> InspectResult<()> {
    let json = if let Some(id) = cluster {
        serde_json::to_string_pretty(lib.cluster(parse_cluster_id(id)?)?)?
    } else {
        serde_json::to_string_pretty(lib)?
    };

    println!("{json}");

    Ok(())
}

fn run() -> InspectResult<()> {
    let args = Args::parse();

    let conf = match &args.config {
        Some(path) => config::parse(path, true)?,
        None => config::parse(&config::default_path(), false)?,
    };

    init_logging(conf.log_filters.as_deref())?;

    let lib = ClusterLibrary::new();

    match &args.command {
        Command::Parse => parse(&lib, &conf),
        Command::Dump { cluster } => dump(&lib, cluster.as_deref()),
    }
}

fn main() {
    if let Err(err) = run() {
        log::error!("zcl-inspect error: {err}");
        eprintln!("zcl-inspect error: {err}");
        std::process::exit(1);
    }
}
