use social_media_api::{config::Config, create_app};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "social_media_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::init();

    let app = match create_app(config.clone()).await {
        Ok(app) => {
            info!("✅ Connected to {}", config.database_url);
            app
        }
        Err(err) => {
            error!("🔥 Failed to open the database: {:?}", err);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("[::]:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("🔥 Failed to bind port {}: {}", config.port, err);
            std::process::exit(1);
        }
    };
    info!("Listening on {}", config.port);

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
}
