use tokio::net::TcpListener;
use todomvc_server::Config;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::from_env();
    init_tracing(&config);

    let listener = TcpListener::bind(&config.listen_address).await.map_err(|e| {
        error!(addr = %config.listen_address, error = %e, "bind failed");
        e
    })?;
    info!(addr = %config.listen_address, "listening");
    todomvc_server::run(listener).await
}
