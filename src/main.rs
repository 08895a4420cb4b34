use clap::Parser;
use colored::Colorize;
use once_cell::sync::Lazy;

use timebench::FractionFormat;

/// Measure the per-call latency of common date/time retrieval operations.
#[derive(Parser)]
struct Cli {
    #[arg(short = 'n', long, default_value_t = 10000)]
    /// Number of iterations per benchmark target
    iterations: usize,
    #[arg(long, value_enum, default_value = "plain")]
    /// Fractional-seconds rendering
    format: FractionFormat,
}

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    Cli::parse()
});

fn main() {
    let args = &*CMD_ARGS;
    env_logger::init();
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = timebench::run(args.iterations, args.format, &mut stdout) {
        eprintln!("❌ {}: {}", "ERROR".red().bold(), err.to_string().red());
        std::process::exit(1);
    }
}
