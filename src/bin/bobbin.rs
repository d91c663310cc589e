use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bobbin", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the waypoint path for a viewport as JSON.
    Path(PathArgs),
    /// Replay a scripted scroll session and emit per-frame records as JSON.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Viewport width in pixels.
    #[arg(long)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input trace script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output report path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let viewport = bobbin::Viewport::new(args.width, args.height)?;
    let tuning = bobbin::Tuning::default();
    let profile = bobbin::DeviceProfile::for_width(args.width, &tuning);
    let path = bobbin::WaypointPath::build(viewport, &profile);

    let json = if args.pretty {
        serde_json::to_string_pretty(&path)
    } else {
        serde_json::to_string(&path)
    }
    .context("serialize waypoint path")?;
    println!("{json}");
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open trace script '{}'", args.in_path.display()))?;
    let script: bobbin::TraceScript =
        serde_json::from_reader(BufReader::new(f)).context("parse trace script JSON")?;

    let report = bobbin::run_trace(&script)?;

    match args.out {
        Some(out_path) => {
            let f = File::create(&out_path)
                .with_context(|| format!("create report '{}'", out_path.display()))?;
            let mut w = BufWriter::new(f);
            if args.pretty {
                serde_json::to_writer_pretty(&mut w, &report)
            } else {
                serde_json::to_writer(&mut w, &report)
            }
            .context("write report JSON")?;
            w.flush().context("flush report")?;
        }
        None => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
            .context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}
