use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Инициализация логов. `RUST_LOG` имеет приоритет над дефолтным фильтром.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "blackjack_engine=debug,info"
    } else {
        "blackjack_engine=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init: повторная инициализация (например, из тестов) не паникует.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();
}
