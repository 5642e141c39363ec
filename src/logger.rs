// Greeter - Structured logging via tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Install the tracing subscriber for the binary.
///
/// Everything goes to stderr: stdout carries nothing but the greeting line,
/// so piping `greeter` into another program never mixes in diagnostics.
/// Quiet (`warn`) unless `GREETER_LOG` asks for more; `GREETER_LOG=debug`
/// shows why a request fell back to the default name.
pub fn init() {
    let filter =
        EnvFilter::try_from_env("GREETER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .compact()
        .init();
}

#[cfg(test)]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("greeter=debug"))
        .with_test_writer()
        .try_init();
}
