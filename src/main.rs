#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folder_index::generate_cmd;

#[derive(Parser, Debug)]
#[command(name = "folder-index")]
#[command(about = "Generate a static HTML index page for every directory below a root", long_about = None)]
struct Cli {
    /// Root directory of the tree to index
    #[arg(long)]
    path: PathBuf,

    /// Enable verbose logging (or set FOLDER_INDEX_LOG)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("FOLDER_INDEX_LOG").unwrap_or_else(|_| {
        if verbose { "folder_index=debug".to_string() } else { "folder_index=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = generate_cmd::run(cli.path) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
