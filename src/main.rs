use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use a2a_chat::driver::{self, StdConsole};

/// Bearer credential the demo presents for the extended-card fetch.
const DEMO_BEARER_TOKEN: &str = "dummy-token-for-extended-card";

#[derive(Parser, Debug)]
#[command(name = "a2a-chat")]
#[command(about = "Chat with a remote A2A agent over JSON-RPC and SSE")]
#[command(version)]
struct Cli {
    /// Base URL of the remote agent
    #[arg(long, default_value = "http://localhost:9999")]
    agent: String,

    /// Start an interactive chat loop instead of the one-shot demo
    #[arg(long)]
    chat: bool,

    /// Bearer token for the authenticated extended agent card
    #[arg(long, default_value = DEMO_BEARER_TOKEN, value_name = "TOKEN")]
    token: String,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    // Allow RUST_LOG overrides, fall back to flag-controlled level
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Log to stderr so rendered responses on stdout stay clean
    let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // One connection pool for the whole run: discovery and exchanges share it.
    let http = match reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let mut console = StdConsole;
    let result = if cli.chat {
        driver::run_chat(http, &cli.agent, &mut console).await
    } else {
        driver::run_demo(http, &cli.agent, &cli.token, &mut console).await
    };

    if let Err(err) = result {
        error!(error = %err, "client run failed");
        std::process::exit(1);
    }
}
