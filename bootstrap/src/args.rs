use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to the JSON file with the verification settings
    #[arg(long, env = "VERIFICATION_CONFIG", default_value = "config.json")]
    pub config: PathBuf,
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    pub sentry_environment: Option<String>,
    #[arg(long, env = "SENTRY_SAMPLE_RATE")]
    pub sentry_sample_rate: Option<f32>,
    #[arg(long, env = "SENTRY_TRACES_SAMPLE_RATE")]
    pub sentry_traces_sample_rate: Option<f32>,
}
