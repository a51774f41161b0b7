use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use hedgehog_service::config::Config;
use hedgehog_service::domain::hedgehog::service::HedgehogService;
use hedgehog_service::domain::profile::service::ProfileService;
use hedgehog_service::domain::user::service::UserService;
use hedgehog_service::inbound::http::router::create_router;
use hedgehog_service::outbound::database::connect_with_retry;
use hedgehog_service::outbound::repositories::PostgresHedgehogRepository;
use hedgehog_service::outbound::repositories::PostgresProfileRepository;
use hedgehog_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hedgehog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "hedgehog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt = ?config.jwt,
        connect_attempts = config.database.connect_attempts,
        "Configuration loaded"
    );

    let pg_pool = connect_with_retry(&config.database).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let jwt_handler = JwtHandler::new(
        config.jwt.secret.as_bytes(),
        &config.jwt.issuer,
        &config.jwt.audience,
    );
    let authenticator = Arc::new(Authenticator::new(jwt_handler, config.jwt.ttl_minutes));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let profile_repository = Arc::new(PostgresProfileRepository::new(pg_pool.clone()));
    let hedgehog_repository = Arc::new(PostgresHedgehogRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository, authenticator));
    let profile_service = Arc::new(ProfileService::new(profile_repository));
    let hedgehog_service = Arc::new(HedgehogService::new(hedgehog_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, profile_service, hedgehog_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
