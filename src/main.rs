//! Scacchiera console entry point.

use tracing_subscriber::EnvFilter;

fn main() {
    // Log su stderr: stdout resta riservato al protocollo della console
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "scacchiera=info".into()),
        )
        .init();

    scacchiera::init();

    if let Err(e) = scacchiera::console::run_console_loop() {
        eprintln!("Console loop failed: {:?}", e);
        std::process::exit(1);
    }
}
