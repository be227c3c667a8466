use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{warn, Level};

use ethforge::{
    compose_and_send, compose_frame, list_adapters, FrameRequest, OpenConfig, PayloadFormat,
    PcapBackend, DEFAULT_OPEN_CONFIG,
};

/// Hand-craft Ethernet II frames and send them on a local adapter.
#[derive(Parser)]
#[command(name = "ethforge", version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List adapters frames can be injected on.
    Adapters {
        /// Print a JSON array instead of one label per line
        #[arg(long)]
        json: bool,
    },
    /// Build one Ethernet II frame and send it.
    Send(SendArgs),
}

#[derive(Args)]
struct SendArgs {
    /// Adapter name, as listed by `ethforge adapters`
    #[arg(short, long, env = "ETHFORGE_ADAPTER")]
    adapter: Option<String>,

    /// Destination MAC (AA:BB:CC:DD:EE:FF)
    #[arg(long)]
    dst: String,

    /// Source MAC; defaults to the adapter's own address
    #[arg(long)]
    src: Option<String>,

    /// EtherType in hex, with or without 0x
    #[arg(short, long)]
    ethertype: String,

    #[command(flatten)]
    payload: PayloadArgs,

    /// Read --payload-file as hex text instead of plain text
    #[arg(long, requires = "payload_file")]
    hex_file: bool,

    /// Build and dump the frame without sending it
    #[arg(long)]
    dry_run: bool,

    /// Adapter open timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_OPEN_CONFIG.timeout_ms)]
    timeout_ms: i32,

    /// Do not request promiscuous mode when opening the adapter
    #[arg(long)]
    no_promisc: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PayloadArgs {
    /// Payload as hex pairs; spaces and line breaks are ignored
    #[arg(long)]
    hex: Option<String>,

    /// Payload as text, sent UTF-8 encoded
    #[arg(long)]
    text: Option<String>,

    /// Payload read from a file
    #[arg(long)]
    payload_file: Option<PathBuf>,
}

#[derive(Serialize)]
struct AdapterRow<'a> {
    name: &'a str,
    description: &'a str,
    label: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Cmd::Adapters { json } => adapters(json),
        Cmd::Send(args) => send(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn adapters(json: bool) -> Result<()> {
    let listing = list_adapters(&PcapBackend);
    if let Some(diag) = &listing.diagnostic {
        warn!("{}", diag);
    }

    if json {
        let rows: Vec<AdapterRow<'_>> = listing
            .adapters
            .iter()
            .map(|adapter| AdapterRow {
                name: &adapter.name,
                description: &adapter.description,
                label: adapter.label(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for (label, _) in listing.labels() {
            println!("{}", label);
        }
    }
    Ok(())
}

fn send(args: SendArgs) -> Result<()> {
    let sources = (
        &args.payload.hex,
        &args.payload.text,
        &args.payload.payload_file,
    );
    let (payload, format) = match sources {
        (Some(hex), _, _) => (hex.clone(), PayloadFormat::Hex),
        (_, Some(text), _) => (text.clone(), PayloadFormat::Text),
        (_, _, Some(path)) => {
            let format = if args.hex_file {
                PayloadFormat::Hex
            } else {
                PayloadFormat::Text
            };
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read payload file {}", path.display()))?;
            (contents, format)
        }
        (None, None, None) => bail!("No payload given."),
    };

    let request = FrameRequest {
        adapter: args.adapter.as_deref().unwrap_or(""),
        dst_mac: &args.dst,
        src_mac: args.src.as_deref(),
        ethertype: &args.ethertype,
        payload: &payload,
        format,
    };

    if args.dry_run {
        let frame = compose_frame(&PcapBackend, &request)?;
        println!("{}", frame);
        println!("{} bytes, EtherType=0x{}", frame.len(), frame.ethertype());
        return Ok(());
    }

    let config = OpenConfig {
        promiscuous: !args.no_promisc,
        timeout_ms: args.timeout_ms,
        ..DEFAULT_OPEN_CONFIG
    };
    let report = compose_and_send(&PcapBackend, &request, &config)?;
    println!("{}", report);
    Ok(())
}
