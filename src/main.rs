use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use raft_trim::adapters::{parse_adapter, parse_window, DEFAULT_DSB_FLANK, DEFAULT_RE_FLANK, DEFAULT_WINDOW};
use raft_trim::io::{create_writer, open_reader};
use raft_trim::{run, Adapters};

#[derive(Parser)]
#[command(name = "raft-trim")]
#[command(version, about = "Trim RAFT adapters from single-end FASTQ reads, placing the DSB end at the 5' terminus")]
struct Args {
    #[arg(long, help = "Input FASTQ file (.gz supported, '-' for stdin)")]
    fastq: PathBuf,

    #[arg(long = "dsb_flank", alias = "dsb-flank", default_value = DEFAULT_DSB_FLANK, value_parser = parse_adapter,
          help = "RAFT adapter sequence 5-prime proximal to the break site")]
    dsb_flank: String,

    #[arg(long = "re_flank", alias = "re-flank", default_value = DEFAULT_RE_FLANK, value_parser = parse_adapter,
          help = "RAFT adapter sequence 3-prime proximal to the restriction site (e.g. Sau3AI)")]
    re_flank: String,

    #[arg(short = 'o', long, help = "Output FASTQ file (default: stdout, .gz to compress)")]
    output: Option<PathBuf>,

    #[arg(short = 'w', long, default_value_t = DEFAULT_WINDOW, value_parser = parse_window, help = "Length of the 5-prime adapter search window")]
    window: usize,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 日志写到 stderr，stdout 留给 FASTQ
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let adapters = Adapters::with_window(args.dsb_flank.as_bytes(), args.re_flank.as_bytes(), args.window);
    debug!(
        "dsb_flank={} (rc {}), re_flank={} (rc {}), window={}",
        args.dsb_flank,
        String::from_utf8_lossy(&adapters.dsb_flank_rc),
        args.re_flank,
        String::from_utf8_lossy(&adapters.re_flank_rc),
        adapters.window
    );

    let reader = open_reader(&args.fastq)?;
    let mut writer = create_writer(args.output.as_deref())?;
    let stats = run(reader, &mut writer, &adapters)?;

    info!("Processing complete!");
    info!("Reads processed: {}", stats.total);
    info!("  forward, contained insert: {}", stats.forward_contained);
    info!("  forward, truncated insert: {}", stats.forward_truncated);
    info!("  reverse, contained insert: {}", stats.reverse_contained);
    info!("  discarded: {}", stats.discarded);
    info!("Records written: {}", stats.written());

    Ok(())
}
