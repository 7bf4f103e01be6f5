use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Installs the stderr subscriber once. Later calls, or calls after another
/// subscriber was set, are no-ops.
pub fn init_logging(level: Level) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        });
    }
}

pub fn level_for(verbose: bool, quiet: bool) -> Level {
    match (verbose, quiet) {
        (true, _) => Level::DEBUG,
        (false, true) => Level::WARN,
        (false, false) => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), Level::INFO);
        assert_eq!(level_for(true, false), Level::DEBUG);
        assert_eq!(level_for(false, true), Level::WARN);
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(Level::INFO);
        init_logging(Level::DEBUG);
        assert!(tracing::dispatcher::has_been_set());
    }
}
