use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "i18n_inject=debug,warn"
    } else {
        "i18n_inject=info,warn"
    }
}

/// `RUST_LOG` wins over `--verbose`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// the run report. Calling it again keeps the first subscriber.
pub fn init_cli_logger(verbose: bool) {
    let installed = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("Logger already initialized, keeping existing subscriber");
    }
}
