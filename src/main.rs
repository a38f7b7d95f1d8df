use clap::Parser;
use std::path::PathBuf;

/// A line-oriented task manager driven by free-text commands.
#[derive(Parser)]
#[command(name = "bob")]
#[command(about = "A line-oriented task manager driven by free-text commands")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Path to the data file (defaults to the user data directory)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let data_file = cli.file.unwrap_or_else(default_data_file);

    if let Err(e) = bob::cli::run(data_file) {
        // Anything that escapes the session loop is an environment problem
        // (unreadable data directory, broken stdin), not a bad command.
        eprintln!("Internal error: {:#}", e);
        std::process::exit(2);
    }
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bob")
        .join("bob.txt")
}
