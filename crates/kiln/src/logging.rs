use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber and route `log` records from kiln-core
/// through it. `RUST_LOG` overrides the verbosity flag.
pub fn init(verbose: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    LogTracer::init()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Directive used when `RUST_LOG` is unset
fn default_level(verbose: u8) -> &'static str {
    if verbose == 0 {
        "warn"
    } else {
        "debug"
    }
}
