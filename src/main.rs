use tracing_subscriber::EnvFilter;

use patient_triage::config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = patient_triage::run().await {
        tracing::error!(error = %e, "assessment run failed");
        std::process::exit(1);
    }
}
