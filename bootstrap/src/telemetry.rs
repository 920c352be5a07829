use crate::args::CommonArgs;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Sets up logging, plus Sentry reporting when a DSN is configured.
/// The returned guard flushes pending Sentry events when dropped.
pub fn init(args: &CommonArgs) -> Option<sentry::ClientInitGuard> {
    let sentry_guard = args.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: args.sentry_environment.clone().map(Into::into),
                sample_rate: args.sentry_sample_rate.unwrap_or(1.0),
                traces_sample_rate: args.sentry_traces_sample_rate.unwrap_or(0.0),
                ..Default::default()
            },
        ))
    });

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_guard.as_ref().map(|_| sentry_tracing::layer()))
        .init();

    sentry_guard
}
