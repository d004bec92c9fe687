use clap::Parser;

/// Command definition. The tool is fully interactive over
/// stdin/stdout; clap only contributes `--help` and `--version`.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "unzipr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive ZIP extractor reporting compression ratio and oldest file age",
    long_about = None
)]
pub struct App {}
