use std::path::PathBuf;

use clap::Parser;
use rlc_envelope::config::{RunConfig, DEFAULT_OUTPUT};
use rlc_envelope::plot::PlotStyle;

/// Plot the free response of an underdamped series RLC circuit with its envelopes
#[derive(Parser)]
#[command(name = "rlc-envelope", version)]
struct Cli {
    /// Chart output path (SVG)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also write the sampled curves as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig {
        output: cli.output,
        csv: cli.csv,
        style: PlotStyle::with_size(cli.width, cli.height),
        ..RunConfig::default()
    };

    if let Err(e) = config.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
