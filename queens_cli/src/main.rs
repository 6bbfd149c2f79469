use anyhow::ensure;
use clap::Parser;
use queens::{solve, visualize_placements};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Board size
    #[arg(default_value_t = 8)]
    n: usize,

    /// Print the solution as a JSON array of {row, col} pairs
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    ensure!(args.n >= 1, "board size must be at least 1");

    info!(n = args.n, "Solving");
    let placements = solve(args.n);
    debug!(queens_placed = placements.len());

    if placements.is_empty() {
        eprintln!("No solution exists for a {0}x{0} board", args.n);
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string(&placements)?);
    } else {
        println!("{}", visualize_placements(args.n, &placements));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
