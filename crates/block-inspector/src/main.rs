//! Block Inspector
//!
//! Reads a hex-encoded block from the command line or stdin, decodes it,
//! checks its transactions root and prints it.

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::Parser;
use fc_01_block_codec::BlockCodec;
use fc_telemetry::{init_logging, TelemetryConfig};
use shared_types::to_hex;
use tracing::info;

/// Inspect an encoded block
#[derive(Parser, Debug)]
#[command(name = "block-inspector")]
#[command(about = "Decode, verify and print an encoded block")]
struct Args {
    /// Hex-encoded block (with or without 0x). Read from stdin when omitted.
    block: Option<String>,

    /// Print the one-line summary only
    #[arg(short, long)]
    short: bool,

    /// Also print the canonical re-encoding
    #[arg(long)]
    reencode: bool,
}

fn read_input(arg: Option<String>) -> Result<Vec<u8>> {
    let text = match arg {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading block from stdin")?;
            buf
        }
    };

    let trimmed = text.trim();
    let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if hex_str.is_empty() {
        bail!("no block given");
    }
    hex::decode(hex_str).context("block is not valid hex")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&TelemetryConfig::for_component("01", "block-inspector"))?;

    let raw = read_input(args.block)?;
    info!(bytes = raw.len(), "[fc-01] Inspecting block");

    let codec = BlockCodec::default();
    let lazy = codec.lazy(raw);
    let block = lazy.block().context("decoding block")?;
    codec.verify(block).context("verifying block")?;

    if args.short {
        println!("{}", block.short_description());
    } else {
        print!("{block}");
    }
    if args.reencode {
        println!("{}", to_hex(block.encode()));
    }
    Ok(())
}
