use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Installs the stderr `fmt` subscriber. Safe to call more than once; only the
/// first call has an effect.
pub fn init_logging(verbose: bool) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let installed = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if let Err(e) = installed {
            eprintln!("Failed to install log subscriber: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
        tracing::info!("logging initialised");
    }
}
