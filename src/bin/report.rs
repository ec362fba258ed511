//! redis-memory-report binary
//!
//! Writes the memory usage of every Redis key to a CSV file.

use clap::Parser;
use redis_memory_report::config::{DEFAULT_HOST, DEFAULT_OUTPUT, DEFAULT_PORT};
use redis_memory_report::{app, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// Redis per-key memory report
#[derive(Parser, Debug)]
#[command(name = "redis-memory-report")]
#[command(about = "Write the memory usage of every Redis key to a CSV file")]
#[command(version)]
struct Args {
    /// Redis host
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Redis port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Output CSV file (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,
}

fn main() {
    // Logs go to stderr; stdout carries only the summary line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,redis_memory_report=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("redis-memory-report v{}", redis_memory_report::VERSION);

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .output_path(&args.output)
        .build();

    match app::run(&config) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
