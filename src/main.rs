use anyhow::Result;
use ttrack::commands::Cli;

fn main() -> Result<()> {
    // Route messages through tracing when debug output was asked for;
    // otherwise the msg_* macros print directly.
    if std::env::var("TTRACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
