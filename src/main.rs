// Greeter - Tiny stdin greeting function in Rust
// License: Apache-2.0

use clap::Parser;
use greeter::config::Config;
use greeter::input::StdinSource;
use greeter::{resolve_name, Greeting};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "greeter",
    about = "Reads an optional {\"name\": ...} JSON object from stdin and says hello",
    version
)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<String>,
    /// Append the runtime name and version to the greeting
    #[arg(long)]
    show_runtime: bool,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    greeter::logger::init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref());

    let name = resolve_name(StdinSource::new(cfg.read_timeout())).await;

    let mut greeting = Greeting::new(name);
    if cli.show_runtime || cfg.show_runtime {
        greeting = greeting.with_runtime();
    }
    println!("{}", greeting);
}

fn load_config(path: Option<&str>) -> Config {
    let Some(p) = path else {
        return Config::default();
    };

    Config::load(&PathBuf::from(p)).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        Config::default()
    })
}
