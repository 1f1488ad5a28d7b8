use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when neither `RUST_LOG` nor `--verbose` is set.
pub fn default_directive(level: &str) -> String {
    format!("staff_roster={}", level.to_ascii_lowercase())
}

// stdout belongs to the interactive console, logs go to stderr
pub fn init_cli_logger(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive("debug")))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("warn"), "staff_roster=warn");
        assert_eq!(default_directive("DEBUG"), "staff_roster=debug");
    }
}
