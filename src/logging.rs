use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "figures=warn";

/// Sends diagnostics to stderr so stdout only carries drawings.
/// `RUST_LOG` overrides the default level.
pub fn init() -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_DIRECTIVE),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}
